use std::io;

use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, fmt::time::OffsetTime, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Install the global subscriber: one output layer chosen by format, filtered
/// by `cfg.level`. Text and JSON go to stderr; stdout belongs to command output.
pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = mk_filter(&cfg.level)?;
    let output = match cfg.format {
        LoggerFormat::Text => text_layer(cfg),
        LoggerFormat::Json => json_layer(cfg),
        LoggerFormat::Journald => journald_layer()?,
    };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .try_init()
        .map_err(as_error)
}

fn text_layer(cfg: &LoggerConfig) -> OutputLayer {
    fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(cfg.use_color)
        .with_target(cfg.with_targets)
        .with_timer(local_rfc3339())
        .boxed()
}

fn json_layer(cfg: &LoggerConfig) -> OutputLayer {
    fmt::layer()
        .json()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_current_span(true)
        .with_timer(local_rfc3339())
        .boxed()
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald_layer() -> Result<OutputLayer, LoggerError> {
    let layer = tracing_journald::layer()
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))?
        .with_syslog_identifier("cfa-tech".to_string());
    Ok(layer.boxed())
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald_layer() -> Result<OutputLayer, LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}

fn mk_filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(level).map_err(|_| LoggerError::InvalidLogLevel(level.to_string()))
}

fn local_rfc3339() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn as_error(e: impl std::fmt::Display) -> LoggerError {
    let s = e.to_string();
    if s.contains("global default trace dispatcher") {
        LoggerError::AlreadyInitialized
    } else {
        LoggerError::InitializationFailed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_directives() {
        assert!(mk_filter("info").is_ok());
        assert!(mk_filter("cfa_core=debug,reqwest=warn").is_ok());
        assert!(matches!(
            mk_filter("cfa_core=loud"),
            Err(LoggerError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn second_install_reports_already_initialized() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Json,
            ..Default::default()
        };
        let _ = install(&cfg);
        assert!(matches!(install(&cfg), Err(LoggerError::AlreadyInitialized)));
    }

    #[cfg(not(feature = "journald"))]
    #[test]
    fn journald_layer_needs_feature() {
        assert!(matches!(journald_layer(), Err(LoggerError::JournaldNotSupported)));
    }
}
