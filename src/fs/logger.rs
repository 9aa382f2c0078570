//! Console and SD-card logger.
//!
//! Implements the [`log`] facade. Every record is printed to the terminal and appended to
//! [`LOG_FILE`] on the SD card, so a match that went wrong can be read back in the pits.
//!
//! ```ignore
//! use bigbot::fs::logger;
//! use log::{LevelFilter, info};
//!
//! logger::init(LevelFilter::Debug).unwrap_or_else(|e| println!("Logger Error: {}", e));
//! info!("Robot up");
//! ```
//!
//! Lines look like:
//!
//! ```text
//! INFO [1m 12s 40ms] bigbot::robot - Driver control
//! WARN [1m 12s 60ms] bigbot::mechanism - Tilter Command Error: port 15 disconnected
//! ```

use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Log file name, relative to the SD card root. Truncated at every boot.
pub const LOG_FILE: &str = "bigbot.log";

/// Writes each record to the console and to [`LOG_FILE`].
pub struct RobotLogger {
    /// `None` when there is no SD card; records still reach the console.
    file: Mutex<Option<BufWriter<File>>>,
}

impl RobotLogger {
    fn new() -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self {
            file: Mutex::new(file),
        }
    }
}

impl log::Log for RobotLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(uptime(), record.level(), record.target(), record.args());
        print!("{}", line);

        if let Ok(mut guard) = self.file.lock()
            && let Some(file) = guard.as_mut()
        {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock()
            && let Some(file) = guard.as_mut()
        {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<RobotLogger> = OnceLock::new();

/// Installs the logger and sets the most verbose level that gets recorded.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(RobotLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Time since the user program started. Zero off the robot.
fn uptime() -> Duration {
    if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::ZERO
    }
}

/// Formats one log line, newline included.
fn format_line(
    uptime: Duration,
    level: log::Level,
    target: &str,
    message: &fmt::Arguments<'_>,
) -> String {
    // Sub-millisecond digits are noise at a 20ms tick.
    let uptime = Duration::from_millis(uptime.as_millis() as u64);
    format!(
        "{} [{}] {} - {}\n",
        level,
        format_duration(uptime),
        target,
        message
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use log::{Level, LevelFilter, debug, error, info, trace, warn};

    use super::format_line;

    #[test]
    fn line_layout() {
        let line = format_line(
            Duration::from_micros(72_040_512),
            Level::Warn,
            "bigbot::mechanism",
            &format_args!("Tilter Command Error: {}", "unplugged"),
        );
        assert_eq!(
            line,
            "WARN [1m 12s 40ms] bigbot::mechanism - Tilter Command Error: unplugged\n"
        );
    }

    #[test]
    #[ignore = "writes bigbot.log to the working directory"]
    fn logs_every_level() {
        super::init(LevelFilter::Trace).expect("Failed to initialize logger");

        trace!("trace");
        debug!("debug");
        info!("info");
        warn!("warn");
        error!("error");

        log::logger().flush();

        assert!(
            log::logger().enabled(
                &log::Metadata::builder()
                    .level(log::Level::Error)
                    .target("bigbot")
                    .build()
            )
        );
    }
}
