use std::sync::{Arc, PoisonError, RwLock};

use crate::constants::{
    DEFAULT_HOST, DEFAULT_REQUEST_TIMEOUT_SECS, HOST_ENV, REQUEST_TIMEOUT_ENV,
};
use crate::error::BigpayError;

/// Connection settings for the bigpay service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the payment service, e.g. `https://payments.bigcommerce.com`.
    pub host: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Build a config from `BIGPAY_HOST` and `BIGPAY_REQUEST_TIMEOUT_SECS`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, BigpayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BigpayError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.trim().is_empty()) {
            let parsed = url::Url::parse(host.trim())
                .map_err(|e| BigpayError::Config(format!("invalid {HOST_ENV}: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(BigpayError::Config(format!(
                    "{HOST_ENV} must be an http(s) URL, got scheme {}",
                    parsed.scheme()
                )));
            }
            config.host = host.trim().trim_end_matches('/').to_string();
            tracing::debug!(host = %config.host, "bigpay host taken from {HOST_ENV}");
        }

        if let Some(timeout) = lookup(REQUEST_TIMEOUT_ENV) {
            config.request_timeout_secs = timeout.trim().parse().map_err(|e| {
                BigpayError::Config(format!("invalid {REQUEST_TIMEOUT_ENV}: {e}"))
            })?;
        }

        Ok(config)
    }
}

/// A [`ClientConfig`] shared between the client and its collaborators.
///
/// Clones point at the same config, so a host change made through one handle
/// is visible to every other holder on its next read.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig(Arc<RwLock<ClientConfig>>);

impl SharedConfig {
    pub fn new(config: ClientConfig) -> Self {
        Self(Arc::new(RwLock::new(config)))
    }

    /// Copy of the current config.
    pub fn snapshot(&self) -> ClientConfig {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn host(&self) -> String {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .host
            .clone()
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .request_timeout_secs
    }

    /// Replace the host, leaving every other field untouched.
    pub fn set_host(&self, host: impl Into<String>) {
        self.0.write().unwrap_or_else(PoisonError::into_inner).host = host.into();
    }
}

impl From<ClientConfig> for SharedConfig {
    fn from(config: ClientConfig) -> Self {
        Self::new(config)
    }
}
