use crate::ProbeError;

/// Operating system identification as reported by `uname(2)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OsInfo {
    /// Kernel name, e.g. `Linux`.
    pub sysname: String,
    /// Network node name of the machine.
    pub nodename: String,
    /// Kernel release, e.g. `6.1.0-18-amd64`.
    pub release: String,
    /// Kernel build string.
    pub version: String,
    /// Hardware identifier, e.g. `x86_64`.
    pub machine: String,
}

/// Queries the kernel for its identification strings.
///
/// # Errors
///
/// [`ProbeError::Os`] if the call fails, [`ProbeError::Encoding`] if a field is
/// not UTF-8, [`ProbeError::Unsupported`] on non-Unix targets.
#[cfg(unix)]
#[allow(unsafe_code)]
pub fn os_info() -> Result<OsInfo, ProbeError> {
    use std::ffi::CStr;
    use std::io;

    fn field(raw: &[libc::c_char], name: &'static str) -> Result<String, ProbeError> {
        // SAFETY: uname(2) NUL-terminates every field within its array.
        let text = unsafe { CStr::from_ptr(raw.as_ptr()) };
        text.to_str()
            .map(str::to_owned)
            .map_err(|_| ProbeError::Encoding(name))
    }

    // SAFETY: utsname is plain old data; all-zero is a valid value.
    let mut utsname: libc::utsname = unsafe { std::mem::zeroed() };
    // SAFETY: the pointer refers to a live, writable utsname.
    if unsafe { libc::uname(&raw mut utsname) } != 0 {
        return Err(ProbeError::Os(io::Error::last_os_error()));
    }

    Ok(OsInfo {
        sysname: field(&utsname.sysname, "sysname")?,
        nodename: field(&utsname.nodename, "hostname")?,
        release: field(&utsname.release, "kernel release")?,
        version: field(&utsname.version, "kernel version")?,
        machine: field(&utsname.machine, "machine type")?,
    })
}

/// Queries the kernel for its identification strings.
///
/// # Errors
///
/// Always [`ProbeError::Unsupported`] on this target.
#[cfg(not(unix))]
pub fn os_info() -> Result<OsInfo, ProbeError> {
    Err(ProbeError::Unsupported("uname"))
}
