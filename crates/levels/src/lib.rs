#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/levels/src/lib.rs
//!
//! # Overview
//!
//! `levels` defines the ordered severity ranks shared by every crate in the
//! tierlog workspace. The conventional levels (DEBUG=10 through CRITICAL=50)
//! keep their customary numbering and are joined by three additional built-in
//! levels:
//!
//! | Name            | Rank |
//! |-----------------|------|
//! | `RAISEMSG`      | 99   |
//! | `CRITICAL`      | 50   |
//! | `ERROR`         | 40   |
//! | `WARNING`       | 30   |
//! | `IMPORTANTINFO` | 25   |
//! | `INFO`          | 20   |
//! | `DEBUG`         | 10   |
//! | `FILEONLY`      | 1    |
//! | `NOTSET`        | 0    |
//!
//! # Design
//!
//! [`Severity`] enumerates the named levels at compile time so each of them
//! can carry a dedicated emit method further up the stack. [`Level`] is the
//! raw rank used for sink thresholds and for the generic `log(level, msg)`
//! entry point; it accepts any `u8`, including ranks that have no built-in
//! name. Names for such ranks can be registered at runtime through
//! [`register_level_name`]; unregistered ranks render as `Level N`.
//!
//! # Invariants
//!
//! - Ranks are totally ordered and a record of rank `R` passes a threshold
//!   `T` exactly when `R >= T` (see [`Level::admits`]).
//! - Built-in ranks can never be renamed or renumbered.
//!
//! # Examples
//!
//! ```
//! use levels::{Level, Severity};
//!
//! let threshold = Level::INFO;
//! assert!(threshold.admits(Severity::ImportantInfo.level()));
//! assert!(!threshold.admits(Level::DEBUG));
//! assert_eq!(Level::new(25).name(), "IMPORTANTINFO");
//! assert_eq!(Level::new(42).name(), "Level 42");
//! ```

mod error;
mod level;
mod names;
#[cfg(feature = "serde")]
mod serde_impl;
mod severity;

pub use error::LevelError;
pub use level::Level;
pub use names::{is_known, name_of, rank_of, register_level_name, registered_levels};
pub use severity::Severity;
