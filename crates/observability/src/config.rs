use std::str::FromStr;

/// Environment variable holding the default filter directive.
pub const LOG_FILTER_ENV: &str = "AUTOSHOP_LOG";

/// Environment variable selecting the log format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "AUTOSHOP_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// How the tracing subscriber is built.
///
/// `RUST_LOG`, when set, still wins over `default_filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl ObservabilityConfig {
    /// Read [`LOG_FILTER_ENV`] and [`LOG_FORMAT_ENV`], falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_filter = lookup(LOG_FILTER_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.default_filter);

        let format = lookup(LOG_FORMAT_ENV)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.format);

        Self {
            default_filter,
            format,
        }
    }
}
