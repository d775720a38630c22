use crate::{CliError, CliResult};

use ua_config::LoggingConfig;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Path of the per-invocation log file inside `logs_dir`.
pub fn log_file_path(logs_dir: &Path) -> PathBuf {
    logs_dir.join(format!(
        "user_manager_{}.log",
        Local::now().format("%Y-%m-%d_%H-%M-%S_%6f")
    ))
}

/// Initialize logger with fern
///
/// Every record goes to stdout (colored when enabled) and, in plain format,
/// to a fresh log file under `logs_dir`.
///
/// # Arguments
/// * `logging` - Level, color and debug settings
/// * `logs_dir` - Directory for the log file; created if missing
#[track_caller]
pub fn initialize(logging: &LoggingConfig, logs_dir: &Path) -> CliResult<PathBuf> {
    let level_filter = logging.effective_level();

    std::fs::create_dir_all(logs_dir).map_err(|e| {
        CliError::logger(format!(
            "Failed to create log directory {}: {}",
            logs_dir.display(),
            e
        ))
    })?;

    let log_path = log_file_path(logs_dir);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            CliError::logger(format!(
                "Failed to open log file {}: {}",
                log_path.display(),
                e
            ))
        })?;

    let file_dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(file);

    let console_dispatch = if logging.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339_seconds(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                ))
            })
            .chain(std::io::stdout())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339_seconds(SystemTime::now()),
                    level = record.level(),
                    message = message,
                ))
            })
            .chain(std::io::stdout())
    };

    Dispatch::new()
        .level(level_filter)
        // reqwest's connection pool is chatty at debug
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Info)
        .chain(console_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    info!(
        "Logger initialized: level={:?}, file={}",
        level_filter,
        log_path.display()
    );

    Ok(log_path)
}
