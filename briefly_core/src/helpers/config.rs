use std::env;
use std::path::PathBuf;

use super::dto::Endpoints;
use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_AUTH_PROBE_PATH: &str = "usage";
pub const DEFAULT_DB_PATH: &str = "briefly_db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    auth_probe_path: String,
    db_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_probe_path: DEFAULT_AUTH_PROBE_PATH.to_string(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> ClientResult<Self> {
        let api_url = api_url.into().trim().trim_end_matches('/').to_string();

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "API URL must start with http:// or https://, got {:?}",
                api_url
            )));
        }

        Ok(Self {
            api_url,
            ..Self::default()
        })
    }

    /// Build the config from `BRIEFLY_API_URL`, `BRIEFLY_AUTH_PROBE_PATH` and
    /// `BRIEFLY_DB_PATH`, falling back to the defaults for unset variables.
    pub fn from_env() -> ClientResult<Self> {
        let api_url = env::var("BRIEFLY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(api_url)?;

        if let Ok(path) = env::var("BRIEFLY_AUTH_PROBE_PATH") {
            config = config.with_auth_probe_path(path);
        }

        if let Ok(path) = env::var("BRIEFLY_DB_PATH") {
            config = config.with_db_path(path);
        }

        Ok(config)
    }

    pub fn with_auth_probe_path(mut self, path: impl Into<String>) -> Self {
        self.auth_probe_path = path.into().trim_matches('/').to_string();
        self
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }

    pub fn endpoint_url(&self, endpoint: Endpoints) -> String {
        let path = match endpoint {
            Endpoints::AuthProbe => self.auth_probe_path.as_str(),
            Endpoints::Logout => "logout",
            Endpoints::Signup => "signup",
            Endpoints::Login => "login",
            Endpoints::Summarize => "summarize",
            Endpoints::Usage => "usage",
        };

        format!("{}/{}", self.api_url, path)
    }
}
