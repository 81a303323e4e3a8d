//! crates/logging/src/diagnostics.rs
//! Text blocks written by [`Logger::log_dict`](crate::Logger::log_dict) and
//! [`Logger::log_system_info`](crate::Logger::log_system_info).

use std::fmt::{self, Debug, Display, Write as _};
use std::num::NonZeroUsize;

use platform::{MemoryInfo, OsInfo, ProbeError};
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

const DICT_RULE_WIDTH: usize = 78;
const DICT_TITLE_INDENT: usize = 20;
const SUMMARY_FOOTER_WIDTH: usize = 50;
const SUMMARY_HEADER: &str = "=========== System Information Summary ===========";
const INSTANTIATED_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:zero], [year]");

/// Renders `entries` as a ruled block with one `key = value` line per entry in
/// ascending key order.
pub fn render_dict<K, V, I>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Ord + Display,
    V: Debug,
{
    let mut entries: Vec<(K, V)> = entries.into_iter().collect();
    entries.sort_by(|left, right| left.0.cmp(&right.0));

    let rule = "-".repeat(DICT_RULE_WIDTH);
    let mut text = format!(
        "\n{rule}\n{:indent$}dictionary provided contains:\n{rule}\n",
        "",
        indent = DICT_TITLE_INDENT
    );
    for (key, value) in &entries {
        let _ = writeln!(text, "{key} = {value:?}");
    }
    text.push_str(&rule);
    text.push('\n');
    text
}

/// Host facts gathered for the system information summary.
///
/// Each probe keeps its own outcome so one failure does not hide the others.
#[derive(Debug)]
pub struct HostReport {
    /// Kernel identification.
    pub os: Result<OsInfo, ProbeError>,
    /// Available CPUs.
    pub cores: Result<NonZeroUsize, ProbeError>,
    /// Physical memory totals.
    pub memory: Result<MemoryInfo, ProbeError>,
}

impl HostReport {
    /// Runs every probe against the current host.
    pub fn probe() -> Self {
        Self {
            os: platform::os_info(),
            cores: platform::cpu_count(),
            memory: platform::memory(),
        }
    }
}

struct Missing<'a>(&'a ProbeError);

impl Display for Missing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unavailable ({})", self.0)
    }
}

/// Renders the system information block for a logger created on
/// `instantiated`.
pub fn render_system_summary(instantiated: Date, report: &HostReport) -> String {
    let date = instantiated
        .format(INSTANTIATED_FORMAT)
        .unwrap_or_else(|_| instantiated.to_string());
    let mut text = format!("Date logger instantiated: {date}\n\n\n{SUMMARY_HEADER}");

    match &report.os {
        Ok(os) => {
            let _ = write!(
                text,
                "\nOS type = {}\nOS Version = {}\nMachine UserName = {}\nMachine Processor Type = {}",
                os.sysname, os.release, os.nodename, os.machine
            );
        }
        Err(error) => {
            let missing = Missing(error);
            let _ = write!(
                text,
                "\nOS type = {}\nOS Version = {missing}\nMachine UserName = {missing}\nMachine Processor Type = {missing}",
                std::env::consts::OS
            );
        }
    }

    match &report.cores {
        Ok(cores) => {
            let _ = write!(text, "\nNumber of cores = {cores}");
        }
        Err(error) => {
            let _ = write!(text, "\nUnable to determine the number of CPUs: {error}");
        }
    }

    match &report.memory {
        Ok(memory) => {
            let _ = write!(
                text,
                "\nTotal RAM = {:.0}[GB], with ~ {:.0}% already in use",
                memory.total_gib(),
                memory.used_percent()
            );
        }
        Err(error) => {
            let _ = write!(text, "\nUnable to determine available RAM: {error}");
        }
    }

    let _ = write!(
        text,
        "\nCrate Version = {}\n{}",
        env!("CARGO_PKG_VERSION"),
        "=".repeat(SUMMARY_FOOTER_WIDTH)
    );
    text
}
