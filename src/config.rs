//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Service configuration, read from `CIVIC_SMS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Webhook URLs notified about every new report. Empty means log only.
    pub notify_webhooks: Vec<String>,
    /// Per-request timeout for webhook notifications.
    pub notify_timeout: Duration,
    /// Maximum number of reports returned by `GET /reports`.
    pub list_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            notify_webhooks: Vec::new(),
            notify_timeout: Duration::from_secs(10),
            list_limit: 100,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = parse_var(&lookup, "CIVIC_SMS_PORT")?.unwrap_or(defaults.port);

        let notify_webhooks: Vec<String> = lookup("CIVIC_SMS_NOTIFY_WEBHOOKS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let notify_timeout = parse_var::<u64>(&lookup, "CIVIC_SMS_NOTIFY_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.notify_timeout);

        let list_limit = parse_var(&lookup, "CIVIC_SMS_LIST_LIMIT")?.unwrap_or(defaults.list_limit);

        Ok(Self {
            port,
            notify_webhooks,
            notify_timeout,
            list_limit,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{raw:?}: {e}"),
            }),
    }
}
