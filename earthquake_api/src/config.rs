//! Client configuration: endpoint, user agent and request timeout.

use std::time::Duration;

/// Base endpoint of the FDSN event service.
pub const DEFAULT_BASE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1";

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_BASE_URL: &str = "EARTHQUAKE_API_URL";
const ENV_USER_AGENT: &str = "EARTHQUAKE_USER_AGENT";
const ENV_TIMEOUT_SECS: &str = "EARTHQUAKE_TIMEOUT_SECS";

/// Settings for [`crate::HttpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and path prefix that method paths are appended to.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Builds a config from `EARTHQUAKE_API_URL`, `EARTHQUAKE_USER_AGENT` and
    /// `EARTHQUAKE_TIMEOUT_SECS`, using the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            config.user_agent = user_agent;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    ENV_TIMEOUT_SECS,
                    raw,
                    DEFAULT_TIMEOUT.as_secs()
                ),
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_user_agent() -> String {
    format!("usgs-earthquake-rs/{}", env!("CARGO_PKG_VERSION"))
}
