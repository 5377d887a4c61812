// src/log.rs
//
// Append-only debug log under the store dir. Lines look like
// `[00:01:02.345][INFO] message`, stamped with time since first use.
// `SCOUT_LOG=error|info|debug|off` picks the threshold (default: debug).

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Info,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        })
    }
}

static SINK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static THRESHOLD: OnceLock<Option<Level>> = OnceLock::new();

fn threshold() -> Option<Level> {
    *THRESHOLD.get_or_init(|| match std::env::var("SCOUT_LOG").ok().as_deref() {
        Some("off") => None,
        Some("error") => Some(Level::Error),
        Some("info") => Some(Level::Info),
        _ => Some(Level::Debug),
    })
}

fn stamp(ms: u128) -> String {
    let ms = ms as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

/// Write one line. Errors are swallowed; logging never fails the caller.
pub fn write_log(level: Level, msg: &str) {
    if threshold().is_none_or(|max| level > max) {
        return;
    }
    let since = START.get_or_init(Instant::now).elapsed().as_millis();
    let line = format!("[{}][{level}] {msg}\n", stamp(since));

    let Ok(_guard) = SINK.lock() else { return };
    let _ = fs::create_dir_all(STORE_DIR);
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_format() {
        assert_eq!(stamp(0), "00:00:00.000");
        assert_eq!(stamp(3_723_004), "01:02:03.004");
    }

    #[test]
    fn levels_order_by_verbosity() {
        assert!(Level::Error < Level::Info && Level::Info < Level::Debug);
        assert_eq!(Level::Info.to_string(), "INFO");
    }
}
