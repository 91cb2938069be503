use std::{
    env,
    io::{self, IsTerminal},
};

use crate::logger::{error::LoggerError, format::LoggerFormat};

/// Filter directives, e.g. `info` or `cfa_core=debug,reqwest=warn`.
pub const LOG_ENV: &str = "CFA_LOG";
/// `text`, `json` or `journald`.
pub const LOG_FORMAT_ENV: &str = "CFA_LOG_FORMAT";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl LoggerConfig {
    /// Defaults overridden by [`LOG_ENV`] and [`LOG_FORMAT_ENV`].
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggerError> {
        let mut cfg = Self::default();
        if let Some(level) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.level = level.trim().to_string();
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.format = format.parse()?;
        }
        Ok(cfg)
    }

    /// Raise the default level by `-v` count: 1 is debug, 2 and up is trace.
    ///
    /// An explicit filter from the environment is left alone.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        if self.level == DEFAULT_LEVEL {
            self.level = match verbose {
                0 => DEFAULT_LEVEL,
                1 => "debug",
                _ => "trace",
            }
            .to_string();
        }
        self
    }
}

const DEFAULT_LEVEL: &str = "info";

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: DEFAULT_LEVEL.to_string(),
            with_targets: true,
            use_color: io::stderr().is_terminal(),
        }
    }
}
