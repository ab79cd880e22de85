use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_SESSION_COOKIE};

use serde::Deserialize;

/// Where the todo backend lives and how credentials travel to it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Name of the cookie carrying the session token
    pub session_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            session_cookie: String::from(DEFAULT_SESSION_COOKIE),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        let cookie = self.session_cookie.as_str();
        if cookie.is_empty()
            || cookie
                .chars()
                .any(|c| c.is_whitespace() || c == '=' || c == ';')
        {
            return Err(ConfigError::api(format!(
                "api.session_cookie must be a non-empty cookie name, got '{}'",
                cookie
            )));
        }

        Ok(())
    }
}
