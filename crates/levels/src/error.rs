use thiserror::Error;

/// Errors raised while parsing level names or registering custom levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The text is neither a rank, a `Level N` literal, nor a known name.
    #[error("unknown severity level '{0}'")]
    Unknown(String),

    /// The rank belongs to a built-in level and cannot be renamed.
    #[error("rank {rank} is reserved for built-in level {name}")]
    Reserved {
        /// The rejected rank.
        rank: u8,
        /// The built-in name already bound to the rank.
        name: &'static str,
    },

    /// The name is already bound to a different rank.
    #[error("level name '{name}' is already bound to rank {rank}")]
    NameTaken {
        /// The rejected name.
        name: String,
        /// The rank currently using the name.
        rank: u8,
    },

    /// The name reads as a rank or a `Level N` literal, so parsing it would
    /// not return the registered rank.
    #[error("level name '{0}' reads as a numeric rank")]
    NumericName(String),

    /// Level names must contain at least one non-whitespace character.
    #[error("level names must not be empty")]
    EmptyName,
}
