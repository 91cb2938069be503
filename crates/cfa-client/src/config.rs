use std::env;

use crate::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://cfautocare.biz/api";

const DEFAULT_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended to it.
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `CFA_API_URL` and `CFA_API_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ClientError> {
        let mut cfg = Self::default();
        if let Ok(url) = env::var("CFA_API_URL")
            && !url.trim().is_empty()
        {
            cfg.base_url = url.trim().to_string();
        }
        if let Ok(raw) = env::var("CFA_API_TIMEOUT_MS") {
            cfg.timeout_ms = raw.trim().parse().map_err(|_| {
                ClientError::InvalidConfig(format!("CFA_API_TIMEOUT_MS is not a number: {raw}"))
            })?;
        }
        Ok(cfg)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: concat!("cfa-tech/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
