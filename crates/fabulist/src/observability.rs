//! Log subscriber setup for the Fabulist binary.

use fabulist_error::{ConfigError, FabulistResult};
use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How log output is filtered and formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Service name recorded at startup
    pub service_name: String,
    /// Service version recorded at startup
    pub service_version: String,
    /// Filter used when `RUST_LOG` is unset (e.g., "info", "debug")
    pub log_level: String,
    /// Emit one JSON object per event instead of human-readable lines
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the fallback log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Filter in effect: `RUST_LOG` when set and valid, else [`Self::log_level`].
    pub fn env_filter(&self) -> FabulistResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.log_level).map_err(|e| {
            ConfigError::new(format!("Invalid log level '{}': {}", self.log_level, e)).into()
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if the log level does not parse or a subscriber is already set.
pub fn init_observability(config: &ObservabilityConfig) -> FabulistResult<()> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install log subscriber: {}", e)))?;

    tracing::debug!(
        service = %config.service_name,
        version = %config.service_version,
        json = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
