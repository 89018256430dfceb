//! `[logging]` section and tracing subscriber setup.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// HTTP stack crates kept at `warn` unless `RUST_LOG` says otherwise; at
/// `debug` they log every polling request.
const QUIET_TARGETS: [&str; 3] = ["hyper_util", "reqwest", "teloxide::dispatching"];

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for a terminal.
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive, e.g. `info` or `coinradar=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".into()
}

impl LoggingConfig {
    /// Filter directives for the configured level, with the HTTP stack
    /// capped at `warn`.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut directives = self.level.trim().to_string();
        for target in QUIET_TARGETS {
            directives.push_str(&format!(",{target}=warn"));
        }
        directives
    }

    /// Reject a level that `EnvFilter` cannot parse.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" });
        }
        EnvFilter::try_new(self.directives()).map_err(|e| ConfigError::InvalidValue {
            field: "level",
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.directives()))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        match self.format {
            LogFormat::Json => fmt().json().with_env_filter(filter).init(),
            LogFormat::Pretty => fmt().with_env_filter(filter).init(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}
