mod config;
mod error;
mod format;
mod log;

pub use config::{LOG_ENV, LOG_FORMAT_ENV, LoggerConfig};
pub use error::LoggerError;
pub use format::LoggerFormat;

pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    log::install(cfg)
}
