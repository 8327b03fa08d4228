use std::fmt;

use shared::services::auth_service::AuthMode;

/// Where scores are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoresBackend {
    DynamoDb { table_name: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scores_backend: ScoresBackend,
    pub auth_mode: AuthMode,
    pub allowed_client_ids: Vec<String>,
    /// Serve on this address instead of the Lambda runtime.
    pub bind_addr: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} environment variable must be set", name),
            ConfigError::Invalid { name, value } => {
                write!(f, "{} has unsupported value '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let scores_backend = match var("SCORES_BACKEND").as_deref() {
            None | Some("dynamodb") => ScoresBackend::DynamoDb {
                table_name: var("SCORES_TABLE").ok_or(ConfigError::Missing("SCORES_TABLE"))?,
            },
            Some("memory") => ScoresBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "SCORES_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let auth_mode = match var("AUTH_MODE").as_deref() {
            None | Some("verify") => AuthMode::Verify {
                secret: var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            },
            Some("gateway") => AuthMode::Gateway,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "AUTH_MODE",
                    value: other.to_string(),
                })
            }
        };

        let allowed_client_ids = var("ALLOWED_CLIENT_IDS")
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            scores_backend,
            auth_mode,
            allowed_client_ids,
            bind_addr: var("BIND_ADDR"),
        })
    }
}
