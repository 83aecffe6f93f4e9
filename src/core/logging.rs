//! Logging setup on top of flexi_logger
//!
//! Formats:
//! - `text` (default): timestamp, level and message
//! - `ext`: as `text` plus the source location of the log call
//! - `json`: one compact JSON object per line
//!
//! The logger handle is kept so the level can be raised or lowered at runtime.

use colored::Colorize;
use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle};
use std::sync::{Mutex, OnceLock};

static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Initialise the global logger
///
/// Must be called at most once per process; a second call returns the
/// `SetLoggerError` from the `log` facade.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level_str = log_level.unwrap_or("info");
    let mut logger = Logger::try_with_str(level_str)?;

    logger = match (log_format.unwrap_or("text"), color_enabled) {
        ("json", _) => logger.format(json_format),
        ("ext", true) => logger.format(extended_color_format),
        ("ext", false) => logger.format(extended_format),
        (_, true) => logger.format(simple_color_format),
        (_, false) => logger.format(simple_format),
    };

    if let Some(file_path) = log_file.filter(|p| *p != "none") {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));

    Ok(())
}

/// Change the active log level at runtime
///
/// Only the level can change after start-up; format and destination are
/// fixed when the logger is created.
pub fn reconfigure_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let handle_mutex = LOGGER_HANDLE
        .get()
        .ok_or("Logger handle not initialised. Call init_logging first.")?;
    let mut handle = handle_mutex
        .lock()
        .map_err(|_| "Could not acquire logger handle lock")?;
    handle.parse_and_push_temp_spec(level_str_or_default(log_level))?;
    Ok(())
}

fn level_str_or_default(level: &str) -> &str {
    if level.trim().is_empty() {
        "info"
    } else {
        level
    }
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// Format: "YYYY-MM-DD HH:mm:ss.fff INF message"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args()
    )
}

fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        colored_level(record.level()),
        record.args()
    )
}

// Format: "YYYY-MM-DD HH:mm:ss.fff INF message (queue/engine.rs:42)"
fn extended_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line())
    )
}

fn extended_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        colored_level(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line()).dimmed()
    )
}

fn colored_level(level: log::Level) -> colored::ColoredString {
    let abbr = level_abbr(level);
    match level {
        log::Level::Error => abbr.red().bold(),
        log::Level::Warn => abbr.yellow(),
        log::Level::Info => abbr.green(),
        log::Level::Debug => abbr.blue(),
        log::Level::Trace => abbr.magenta(),
    }
}

fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let json_obj = serde_json::json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line())
    });

    match serde_json::to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// helpqueue::queue::engine -> queue/engine.rs:42
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = if let Some(without_prefix) = target.strip_prefix("helpqueue::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    match line {
        Some(line_num) => format!("{}:{}", path_like, line_num),
        None => path_like,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn render(
        formatter: fn(
            &mut dyn std::io::Write,
            &mut DeferredNow,
            &log::Record,
        ) -> Result<(), std::io::Error>,
        target: &str,
        line: Option<u32>,
    ) -> String {
        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();
        let record = log::Record::builder()
            .level(log::Level::Info)
            .target(target)
            .line(line)
            .args(format_args!("Alice joined the quick lane"))
            .build();
        formatter(&mut buffer, &mut now, &record).expect("format should succeed");
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn test_format_target_as_path() {
        assert_eq!(
            format_target_as_path("helpqueue::queue::engine", Some(42)),
            "queue/engine.rs:42"
        );
        assert_eq!(format_target_as_path("tokio::runtime", None), "tokio/runtime");
    }

    #[test]
    fn test_simple_format_structure() {
        let output = render(simple_format, "helpqueue::queue::lane", Some(7));
        assert!(output.contains("INF Alice joined the quick lane"));
        assert!(!output.contains("queue/lane.rs"));
    }

    #[test]
    fn test_extended_format_includes_location() {
        let output = render(extended_format, "helpqueue::queue::lane", Some(7));
        assert!(
            output.ends_with("INF Alice joined the quick lane (queue/lane.rs:7)"),
            "unexpected output: {}",
            output
        );
    }

    #[test]
    fn test_json_format_is_single_object() {
        let output = render(json_format, "helpqueue::app::startup", Some(3));
        let parsed: serde_json::Value =
            serde_json::from_str(&output).expect("output should be valid JSON");
        assert_eq!(parsed["level"], "INF");
        assert_eq!(parsed["message"], "Alice joined the quick lane");
        assert_eq!(parsed["target"], "app/startup.rs:3");
        assert!(!output.contains('\n'));
    }

    #[test]
    #[serial]
    fn test_reconfigure_before_or_after_init() {
        // Another test binary may already own the global logger; either way
        // reconfiguration must not panic.
        let _ = init_logging(Some("debug"), None, None, false);
        match reconfigure_logging("trace") {
            Ok(()) => log::trace!("level raised"),
            Err(e) => assert!(e.to_string().contains("not initialised")),
        }
    }
}
