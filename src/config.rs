use std::fmt;
use std::sync::Arc;

use crate::transport::Transport;

/// Environment variable holding the access token read by [`ClientConfig::from_env`].
pub const ACCESS_TOKEN_ENV: &str = "CONSOLE_ACCESS_TOKEN";
/// Environment variable holding the API key read by [`ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "CONSOLE_API_KEY";
/// Environment variable holding the environment name read by [`ClientConfig::from_env`].
pub const ENVIRONMENT_ENV: &str = "CONSOLE_ENV";

/// Server environment the client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Prod,
    Stage,
}

impl Environment {
    /// Resolves an environment name; anything but `prod` or `stage` falls back
    /// to [`Environment::Prod`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("stage") => Self::Stage,
            Some("prod") | None => Self::Prod,
            Some(other) => {
                tracing::debug!(env = other, "unknown environment, using prod");
                Self::Prod
            }
        }
    }

    /// API host for this environment.
    pub fn host(self) -> &'static str {
        match self {
            Self::Prod => "developers.adobe.io",
            Self::Stage => "developers-stage.adobe.io",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Stage => "stage",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to initialize a [`crate::ConsoleClient`].
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub access_token: Option<String>,
    pub api_key: String,
    pub env: Environment,
    /// Overrides the environment's host (`host` or `host:port`).
    pub api_host: Option<String>,
    /// Overrides the server URL declared in `openapi/api.json`.
    pub server_url: Option<String>,
    pub transport: Option<Arc<dyn Transport>>,
}

impl ClientConfig {
    pub fn new(access_token: Option<&str>, api_key: impl Into<String>, env: Option<&str>) -> Self {
        Self {
            access_token: access_token.map(str::to_owned),
            api_key: api_key.into(),
            env: Environment::from_name(env),
            api_host: None,
            server_url: None,
            transport: None,
        }
    }

    /// Reads `CONSOLE_ACCESS_TOKEN`, `CONSOLE_API_KEY` and `CONSOLE_ENV`.
    pub fn from_env() -> Self {
        let access_token = std::env::var(ACCESS_TOKEN_ENV).ok();
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let env = std::env::var(ENVIRONMENT_ENV).ok();
        Self::new(access_token.as_deref(), api_key, env.as_deref())
    }

    #[must_use]
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Sends every call through `transport` instead of the default HTTP transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Host requests are rewritten to.
    pub fn resolved_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or(self.env.host())
    }
}
