use crate::config::LogConfig;
use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(Error::new(format!("unknown log format: {other}"))),
        }
    }
}

/// Directive syntax is checked here so a typo in `log.level` fails startup
/// instead of silently logging nothing.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(config.level.trim())
        .map_err(|err| Error::new(format!("log.level is invalid: {err}")))
}

/// Installs the global subscriber. A subscriber that is already set (tests,
/// embedding) is left in place.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match LogFormat::parse(&config.format)? {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Plain => builder.try_init().is_ok(),
    };
    if installed {
        tracing::debug!(level = %config.level, format = %config.format, "logging initialised");
    }
    Ok(())
}
