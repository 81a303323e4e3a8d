#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/platform/src/lib.rs
//!
//! Host probes used by the system information summary. All FFI lives here;
//! the rest of the workspace is `#![deny(unsafe_code)]`.
//!
//! Every probe returns a [`Result`] so callers decide how an unavailable
//! value is rendered. Nothing here substitutes placeholder values.

use std::io;
use std::num::NonZeroUsize;

use thiserror::Error;

mod memory;
mod uname;

pub use memory::{MemoryInfo, memory};
pub use uname::{OsInfo, os_info};

/// Failure of a host probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe has no implementation on this platform.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    /// The operating system reported an error.
    #[error("operating system error: {0}")]
    Os(#[from] io::Error),

    /// The operating system returned text that is not valid UTF-8.
    #[error("{0} is not valid UTF-8")]
    Encoding(&'static str),
}

/// Number of CPUs available to this process.
///
/// # Errors
///
/// Returns [`ProbeError::Os`] when the count cannot be determined.
pub fn cpu_count() -> Result<NonZeroUsize, ProbeError> {
    Ok(std::thread::available_parallelism()?)
}
