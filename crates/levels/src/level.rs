//! crates/levels/src/level.rs
//! Raw severity ranks used for thresholds and generic emission.

use std::fmt;
use std::str::FromStr;

use crate::{LevelError, Severity, names};

/// A severity rank.
///
/// Unlike [`Severity`], a `Level` can hold any rank in `0..=255`. Sinks use it
/// as their threshold and the generic `log` entry point accepts it directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Rank 0. Reported as the stream level when no stream sink is attached.
    pub const NOTSET: Self = Self(0);
    /// Rank 1, [`Severity::FileOnly`].
    pub const FILE_ONLY: Self = Self(1);
    /// Rank 10, [`Severity::Debug`].
    pub const DEBUG: Self = Self(10);
    /// Rank 20, [`Severity::Info`].
    pub const INFO: Self = Self(20);
    /// Rank 25, [`Severity::ImportantInfo`].
    pub const IMPORTANT_INFO: Self = Self(25);
    /// Rank 30, [`Severity::Warning`].
    pub const WARNING: Self = Self(30);
    /// Rank 40, [`Severity::Error`].
    pub const ERROR: Self = Self(40);
    /// Rank 50, [`Severity::Critical`].
    pub const CRITICAL: Self = Self(50);
    /// Rank 99, [`Severity::RaiseMsg`].
    pub const RAISE_MSG: Self = Self(99);
    /// The lowest defined level; thresholds set here deliver everything.
    pub const LOWEST: Self = Self::FILE_ONLY;

    /// Wraps a raw rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Returns the raw rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Returns the named level for this rank, if it is a built-in one.
    #[must_use]
    pub const fn severity(self) -> Option<Severity> {
        Severity::from_rank(self.0)
    }

    /// Reports whether a record at `record` passes this level used as a
    /// threshold.
    ///
    /// ```
    /// use levels::Level;
    ///
    /// assert!(Level::INFO.admits(Level::INFO));
    /// assert!(Level::INFO.admits(Level::RAISE_MSG));
    /// assert!(!Level::INFO.admits(Level::DEBUG));
    /// ```
    #[must_use]
    pub const fn admits(self, record: Self) -> bool {
        record.0 >= self.0
    }

    /// Returns the display name: built-in, registered, or `Level N`.
    #[must_use]
    pub fn name(self) -> String {
        names::name_of(self.0)
    }

    /// Reports whether the rank has a built-in or registered name.
    #[must_use]
    pub fn is_known(self) -> bool {
        names::is_known(self.0)
    }
}

impl From<u8> for Level {
    fn from(rank: u8) -> Self {
        Self(rank)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity() {
            Some(severity) => f.write_str(severity.name()),
            None => f.write_str(&names::name_of(self.0)),
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    /// Parses a decimal rank, a `Level N` literal, or a level name.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Ok(Self(rank));
        }

        if let Some(rank) = parse_generic_name(trimmed) {
            return Ok(Self(rank));
        }

        names::rank_of(trimmed)
            .map(Self)
            .ok_or_else(|| LevelError::Unknown(text.to_owned()))
    }
}

/// Parses the `Level N` form produced for unnamed ranks.
pub(crate) fn parse_generic_name(text: &str) -> Option<u8> {
    let (prefix, rest) = text.split_at_checked(5)?;
    if !prefix.eq_ignore_ascii_case("level") {
        return None;
    }
    rest.trim_start().parse::<u8>().ok()
}
