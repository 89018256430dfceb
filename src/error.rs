use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Price lookup errors.
///
/// Per-symbol absence is not an error; it shows up as a missing entry in
/// the [`PriceResultSet`](crate::domain::price::PriceResultSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The provider call failed: non-success status, timeout, transport
    /// failure or an unreadable body.
    #[error("{}", upstream_message(.status, .detail))]
    Upstream {
        /// HTTP status, when the provider answered at all.
        status: Option<u16>,
        detail: String,
    },

    /// The call succeeded but carried no data for any requested symbol.
    #[error("quote provider returned no prices for the requested symbols")]
    EmptyResult,

    /// The selection contained no supported symbols.
    #[error("no supported symbols selected")]
    InvalidSelection,
}

impl PriceError {
    /// Build an upstream error without an HTTP status.
    pub fn upstream(detail: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            detail: detail.into(),
        }
    }
}

fn upstream_message(status: &Option<u16>, detail: &str) -> String {
    match status {
        Some(status) => format!("quote provider error (HTTP {status}): {detail}"),
        None => format!("quote provider error: {detail}"),
    }
}

impl From<reqwest::Error> for PriceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream {
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[cfg(feature = "telegram")]
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_includes_status_when_known() {
        let err = PriceError::Upstream {
            status: Some(429),
            detail: "Too Many Requests".into(),
        };
        assert_eq!(
            err.to_string(),
            "quote provider error (HTTP 429): Too Many Requests"
        );
    }

    #[test]
    fn upstream_message_without_status() {
        let err = PriceError::upstream("operation timed out");
        assert_eq!(err.to_string(), "quote provider error: operation timed out");
    }

    #[test]
    fn price_error_converts_into_crate_error() {
        let err: Error = PriceError::EmptyResult.into();
        assert!(matches!(err, Error::Price(PriceError::EmptyResult)));
    }
}
