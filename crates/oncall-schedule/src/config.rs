//! Connection settings for the scheduling service.
//!
//! Each field resolves from an explicit value first, then its environment
//! variable, then a default. Only resolution and validation live here;
//! the HTTP client that consumes the settings is external.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ScheduleError;

pub const ENV_ENDPOINT: &str = "ONCALL_ENDPOINT";
pub const ENV_USERNAME: &str = "ONCALL_USERNAME";
pub const ENV_PASSWORD: &str = "ONCALL_PASSWORD";
pub const ENV_AUTH_TYPE: &str = "ONCALL_AUTH_TYPE";

/// Path appended to the endpoint to reach the API.
const API_PATH: &str = "/api/v0";

/// How the username/password pair is presented to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// Application API key.
    Api,
    /// Interactive user login.
    #[default]
    User,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Api => "api",
            AuthMethod::User => "user",
        }
    }

    fn parse(s: &str) -> Result<Self, ScheduleError> {
        match s {
            "api" => Ok(AuthMethod::Api),
            "user" => Ok(AuthMethod::User),
            other => Err(ScheduleError::InvalidConfig(format!(
                "auth method of '{other}' is not a valid auth method [\"api\", \"user\"]"
            ))),
        }
    }
}

/// Values supplied directly (flags, a config file). Unset fields fall back
/// to the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSettings {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth_type: Option<String>,
}

/// Fully resolved connection settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ProviderConfig {
    /// Everything before `/api/v0`, without a trailing slash.
    pub endpoint: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub auth_type: AuthMethod,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("auth_type", &self.auth_type)
            .finish()
    }
}

impl ProviderConfig {
    /// Resolve against the process environment.
    pub fn from_env(settings: &ProviderSettings) -> Result<Self, ScheduleError> {
        Self::resolve(settings, |key| std::env::var(key).ok())
    }

    /// Resolve `settings`, consulting `lookup` for each missing field.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidConfig`] if no endpoint is given, the
    /// endpoint is not an absolute http(s) URL, or the auth type is not
    /// `api` or `user`.
    pub fn resolve<F>(settings: &ProviderSettings, lookup: F) -> Result<Self, ScheduleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: &Option<String>, key: &str| {
            explicit
                .clone()
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(key).filter(|v| !v.is_empty()))
        };

        let endpoint = pick(&settings.endpoint, ENV_ENDPOINT).ok_or_else(|| {
            ScheduleError::InvalidConfig(format!(
                "an endpoint is required (set it directly or via {ENV_ENDPOINT})"
            ))
        })?;
        let endpoint = validate_endpoint(&endpoint)?;

        let auth_type = match pick(&settings.auth_type, ENV_AUTH_TYPE) {
            Some(s) => AuthMethod::parse(&s)?,
            None => AuthMethod::default(),
        };

        Ok(ProviderConfig {
            endpoint,
            username: pick(&settings.username, ENV_USERNAME).unwrap_or_default(),
            password: pick(&settings.password, ENV_PASSWORD).unwrap_or_default(),
            auth_type,
        })
    }

    /// Base URL of the API, e.g. `https://oncall.example.com/api/v0`.
    pub fn api_base(&self) -> String {
        format!("{}{API_PATH}", self.endpoint)
    }
}

/// Normalize the endpoint from its parsed form, without a trailing slash.
fn validate_endpoint(raw: &str) -> Result<String, ScheduleError> {
    let url = Url::parse(raw)
        .map_err(|e| ScheduleError::InvalidConfig(format!("endpoint '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScheduleError::InvalidConfig(format!(
            "endpoint '{raw}' must use http or https"
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ScheduleError::InvalidConfig(format!(
            "endpoint '{raw}' must not carry a query or fragment"
        )));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
