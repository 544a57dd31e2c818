use crate::error::{Result as ServerErrorResult, ServerError};

use dc_config::LogLevel;

use std::fmt;
use std::panic::Location;
use std::path::PathBuf;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::{Dispatch, FormatCallback};
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        // systemd, docker logs
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    match log_file {
        Some(ref path) => info!("Logger initialized: level={}, file={}", log_level, path.display()),
        None => info!("Logger initialized: level={}, stdout", log_level),
    }

    // Bridge tracing records from dependencies (hyper, tower-http) into log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// `[<rfc3339> - <LEVEL>] message [file:line]`
fn write_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
