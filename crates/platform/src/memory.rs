use sysinfo::{System, SystemExt};

use crate::ProbeError;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Physical memory totals in bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MemoryInfo {
    /// Installed physical memory.
    pub total: u64,
    /// Memory available to new work without swapping.
    pub available: u64,
}

impl MemoryInfo {
    /// Total memory in GiB.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_gib(self) -> f64 {
        self.total as f64 / BYTES_PER_GIB
    }

    /// Share of memory in use, `0.0..=100.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn used_percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let used = self.total.saturating_sub(self.available);
        used as f64 * 100.0 / self.total as f64
    }
}

/// Reads physical memory totals.
///
/// `available` follows the kernel's estimate of memory that can be handed to
/// new work without swapping (`MemAvailable` on Linux), so reclaimable page
/// cache does not count as used.
///
/// # Errors
///
/// [`ProbeError::Unsupported`] when the platform has no memory statistics.
pub fn memory() -> Result<MemoryInfo, ProbeError> {
    if !System::IS_SUPPORTED {
        return Err(ProbeError::Unsupported("memory probe"));
    }
    let mut system = System::new();
    system.refresh_memory();
    let total = system.total_memory();
    if total == 0 {
        return Err(ProbeError::Unsupported("memory probe"));
    }
    Ok(MemoryInfo {
        total,
        available: system.available_memory().min(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_used_memory() {
        let info = MemoryInfo {
            total: 8 * 1024 * 1024 * 1024,
            available: 2 * 1024 * 1024 * 1024,
        };
        assert!((info.total_gib() - 8.0).abs() < f64::EPSILON);
        assert!((info.used_percent() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn empty_totals_do_not_divide_by_zero() {
        let info = MemoryInfo {
            total: 0,
            available: 0,
        };
        assert!(info.used_percent().abs() < f64::EPSILON);
    }

    #[cfg(target_os = "linux")]
    fn meminfo_kib(field: &str) -> u64 {
        let text = std::fs::read_to_string("/proc/meminfo").unwrap();
        text.lines()
            .find_map(|line| line.strip_prefix(field))
            .and_then(|rest| rest.trim_start_matches(':').split_whitespace().next())
            .and_then(|value| value.parse().ok())
            .unwrap()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_reports_installed_memory() {
        let info = memory().unwrap();
        assert!(info.total > 0);
        assert!(info.available <= info.total);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn used_percent_tracks_mem_available() {
        let info = memory().unwrap();
        let total = meminfo_kib("MemTotal") * 1024;
        let available = meminfo_kib("MemAvailable") * 1024;
        // cgroup limits replace the host totals inside constrained containers.
        if info.total != total {
            return;
        }
        let expected = MemoryInfo { total, available }.used_percent();
        assert!(
            (info.used_percent() - expected).abs() < 5.0,
            "used {:.1}% but MemAvailable gives {expected:.1}%",
            info.used_percent()
        );
    }
}
