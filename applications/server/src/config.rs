/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

/// Bearer token settings shared with the identity provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    /// Lifetime of tokens minted by `issue-token`
    #[serde(default = "default_token_expiration_hours")]
    pub token_expiration_hours: u64,
}

/// Upper bound for `token_expiration_hours` (one year)
pub const MAX_TOKEN_EXPIRATION_HOURS: u64 = 24 * 365;

impl ServerConfig {
    /// Load configuration from an explicit file (falling back to `config.toml`)
    /// with `LINKSHELF_`-prefixed environment variables layered on top
    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<PathBuf>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        let config = settings
            .add_source(env)
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set LINKSHELF_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.token_expiration_hours == 0
            || self.auth.token_expiration_hours > MAX_TOKEN_EXPIRATION_HOURS
        {
            return Err(ServerError::Config(format!(
                "token_expiration_hours must be between 1 and {}",
                MAX_TOKEN_EXPIRATION_HOURS
            )));
        }

        Ok(())
    }
}

// e.g. LINKSHELF_AUTH__JWT_SECRET; nested keys are split on "__"
fn environment() -> config::Environment {
    config::Environment::with_prefix("LINKSHELF")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/linkshelf.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        token_expiration_hours: default_token_expiration_hours(),
    }
}

fn default_token_expiration_hours() -> u64 {
    24
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}
