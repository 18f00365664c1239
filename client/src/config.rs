//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::consts::DEFAULT_SIZE_PX;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Transport timeouts. `None` means the request waits as long as the server
/// takes; both are unset unless configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server origin without a trailing slash.
    pub base_url: String,
    pub timeouts: Timeouts,
    /// Intrinsic width and height of the square capture surface.
    pub canvas_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeouts: Timeouts::default(),
            canvas_size: DEFAULT_SIZE_PX,
        }
    }
}

impl ClientConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `DIGITPAD_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `DIGITPAD_REQUEST_TIMEOUT_SECS`: unset means no timeout
    /// - `DIGITPAD_CONNECT_TIMEOUT_SECS`: unset means no timeout
    /// - `DIGITPAD_CANVAS_SIZE`: default 280
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is blank.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reading from an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let base_url = match lookup("DIGITPAD_BASE_URL") {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_BASE_URL.to_owned(),
        };
        let timeouts = Timeouts {
            request_secs: parse_timeout(&lookup, "DIGITPAD_REQUEST_TIMEOUT_SECS"),
            connect_secs: parse_timeout(&lookup, "DIGITPAD_CONNECT_TIMEOUT_SECS"),
        };
        let canvas_size = match parse_or(&lookup, "DIGITPAD_CANVAS_SIZE", DEFAULT_SIZE_PX) {
            0 => DEFAULT_SIZE_PX,
            size => size,
        };
        Ok(Self { base_url, timeouts, canvas_size })
    }

    /// Override the base URL (e.g. from a command-line flag).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `base_url` is blank.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ClientError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key).map(|raw| raw.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            tracing::warn!(key, "unparseable value, using default");
            default
        }
        None => default,
    }
}

/// A positive number of seconds, or `None` when unset, zero, or unparseable.
fn parse_timeout(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    match parse_or(lookup, key, 0) {
        0 => None,
        secs => Some(secs),
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::Config("base URL must not be empty".to_owned()));
    }
    Ok(trimmed.to_owned())
}
