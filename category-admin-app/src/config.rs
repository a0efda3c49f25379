//! Startup configuration
//!
//! Read once from the environment and passed down; nothing below this layer
//! looks at environment variables.

use std::time::Duration;

use category_admin_api::ApiConfig;
use category_admin_core::{CoreError, CoreResult};

/// Base URL of the category API, e.g. `http://localhost:3000/api`
pub const API_URL_VAR: &str = "CATEGORY_API_URL";
/// Optional per-request timeout in whole seconds
pub const TIMEOUT_VAR: &str = "CATEGORY_API_TIMEOUT_SECS";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CoreError::Config(format!("{API_URL_VAR} is not set")))?;
        let mut api = ApiConfig::new(&raw_url)
            .map_err(|e| CoreError::Config(format!("{API_URL_VAR}: {e}")))?;

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs = parse_timeout(raw.trim())?;
            api = api.with_timeout(Duration::from_secs(secs));
        }

        log::debug!(
            "Configured API base {} (timeout: {:?})",
            api.base_url(),
            api.timeout()
        );
        Ok(Self { api })
    }
}

fn parse_timeout(raw: &str) -> CoreResult<u64> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(CoreError::Config(format!(
            "{TIMEOUT_VAR} must be a positive number of seconds, got '{raw}'"
        ))),
        Ok(secs) => Ok(secs),
    }
}
