//! crates/levels/src/severity.rs
//! The fixed set of named severity levels.

use std::fmt;

use crate::Level;

/// Named severity levels known at compile time.
///
/// Discriminants are the numeric ranks, so `Severity::Warning as u8 == 30`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Low-severity records intended for files only (rank 1).
    FileOnly = 1,
    /// Debugging detail (rank 10).
    Debug = 10,
    /// Routine progress information (rank 20).
    Info = 20,
    /// Information that should stand out from routine INFO output (rank 25).
    ImportantInfo = 25,
    /// Potentially harmful situations (rank 30).
    Warning = 30,
    /// Failures the process can continue past (rank 40).
    Error = 40,
    /// Failures that threaten the process (rank 50).
    Critical = 50,
    /// Messages that accompany a raised failure; always shown (rank 99).
    RaiseMsg = 99,
}

impl Severity {
    /// Every named level in ascending rank order.
    pub const ALL: [Self; 8] = [
        Self::FileOnly,
        Self::Debug,
        Self::Info,
        Self::ImportantInfo,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::RaiseMsg,
    ];

    /// Returns the numeric rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the rank as a [`Level`].
    #[must_use]
    pub const fn level(self) -> Level {
        Level::new(self as u8)
    }

    /// Returns the display name used in file records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FileOnly => "FILEONLY",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::ImportantInfo => "IMPORTANTINFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::RaiseMsg => "RAISEMSG",
        }
    }

    /// Maps a rank back to its named level.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::FileOnly),
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            25 => Some(Self::ImportantInfo),
            30 => Some(Self::Warning),
            40 => Some(Self::Error),
            50 => Some(Self::Critical),
            99 => Some(Self::RaiseMsg),
            _ => None,
        }
    }

    /// Looks up a named level, ignoring ASCII case.
    ///
    /// `WARN` and `FATAL` are accepted as aliases for `WARNING` and
    /// `CRITICAL`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "FILEONLY" => Some(Self::FileOnly),
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "IMPORTANTINFO" => Some(Self::ImportantInfo),
            "WARNING" | "WARN" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "CRITICAL" | "FATAL" => Some(Self::Critical),
            "RAISEMSG" => Some(Self::RaiseMsg),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_match_documented_table() {
        let ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![1, 10, 20, 25, 30, 40, 50, 99]);
    }

    #[test]
    fn all_is_sorted_ascending() {
        assert!(Severity::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn from_rank_inverts_rank() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_rank(severity.rank()), Some(severity));
        }
        assert_eq!(Severity::from_rank(0), None);
        assert_eq!(Severity::from_rank(26), None);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Severity::from_name("importantinfo"), Some(Severity::ImportantInfo));
        assert_eq!(Severity::from_name(" RaiseMsg "), Some(Severity::RaiseMsg));
        assert_eq!(Severity::from_name("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_name("fatal"), Some(Severity::Critical));
        assert_eq!(Severity::from_name("verbose"), None);
    }

    #[test]
    fn display_uses_record_name() {
        assert_eq!(Severity::FileOnly.to_string(), "FILEONLY");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }
}
