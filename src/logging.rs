use crate::config::Config;
use simplelog::WriteLogger;
use std::path::Path;
use thiserror::Error;

/// Start writing log messages to the log file named in `config`.  The
/// terminal belongs to the game, so nothing is ever logged to it.
pub(crate) fn init(config: &Config) -> Result<(), LogError> {
    let path = config.log_file().ok_or(LogError::NoPath)?;
    let file = open_log_file(&path)?;
    WriteLogger::init(config.log.level, simplelog::Config::default(), file)?;
    Ok(())
}

/// Open `path` for appending, creating it and its parent directories first
/// if needed
fn open_log_file(path: &Path) -> Result<fs_err::File, LogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Mkdir)?;
    }
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to determine path to local data directory for log file")]
    NoPath,
    #[error("failed to create log file directory")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}
