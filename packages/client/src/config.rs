//! Client configuration.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default URL scheme.
pub const DEFAULT_SCHEME: &str = "https";

/// Default web service host.
pub const DEFAULT_SERVER_HOST: &str = "musicbrainz.org";

/// Default web service port.
pub const DEFAULT_SERVER_PORT: u16 = 443;

/// User agent string identifying this client.
pub const DEFAULT_USER_AGENT: &str = concat!("mbxml/", env!("CARGO_PKG_VERSION"));

/// Minimum interval between two requests, in milliseconds.
///
/// MusicBrainz allows one request per second per client.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1000;

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings of a web service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub scheme: String,
    pub server_host: String,
    pub server_port: u16,
    pub user_agent: String,
    pub rate_limit_interval: Duration,
    pub timeout: Duration,
    /// OAuth bearer token; required for `user-*` includes.
    pub access_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            rate_limit_interval: Duration::from_millis(DEFAULT_RATE_LIMIT_MS),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from `MBXML_*` environment variables.
    ///
    /// Reads `MBXML_SCHEME`, `MBXML_SERVER_HOST`, `MBXML_SERVER_PORT`,
    /// `MBXML_USER_AGENT`, `MBXML_RATE_LIMIT_MS` and `MBXML_ACCESS_TOKEN`;
    /// unset variables keep their defaults.
    ///
    /// # Errors
    /// Returns `ClientError::Config` when a variable holds an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(scheme) = var("MBXML_SCHEME") {
            if scheme != "http" && scheme != "https" {
                return Err(ClientError::Config(format!(
                    "MBXML_SCHEME must be http or https: '{scheme}'"
                )));
            }
            config.scheme = scheme;
        }
        if let Some(host) = var("MBXML_SERVER_HOST") {
            config.server_host = host;
        }
        if let Some(port) = var("MBXML_SERVER_PORT") {
            config.server_port = port.parse().map_err(|_| {
                ClientError::Config(format!("MBXML_SERVER_PORT is not a port number: '{port}'"))
            })?;
        }
        if let Some(user_agent) = var("MBXML_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(interval) = var("MBXML_RATE_LIMIT_MS") {
            let millis: u64 = interval.parse().map_err(|_| {
                ClientError::Config(format!(
                    "MBXML_RATE_LIMIT_MS is not a number of milliseconds: '{interval}'"
                ))
            })?;
            config.rate_limit_interval = Duration::from_millis(millis);
        }
        config.access_token = var("MBXML_ACCESS_TOKEN").filter(|token| !token.is_empty());

        Ok(config)
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.server_host = host.into();
        self.server_port = port;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Base URL of the web service, e.g. `https://musicbrainz.org:443`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.server_host, self.server_port)
    }

    pub fn is_logged_in(&self) -> bool {
        self.access_token.is_some()
    }
}
