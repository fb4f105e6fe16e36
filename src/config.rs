//! Service configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Which `CompanionStore` backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Postgres { database_url: String, max_connections: u32 },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreKind,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STORE`: `postgres` (default) or `memory`
    /// - `DATABASE_URL`: required when `STORE` is `postgres`
    /// - `DB_MAX_CONNECTIONS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required var is absent or a value does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required var is absent or a value does
    /// not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let store = match lookup("STORE").as_deref().unwrap_or("postgres") {
            "postgres" => {
                let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
                let max_connections = lookup("DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
                StoreKind::Postgres { database_url, max_connections }
            }
            "memory" => StoreKind::Memory,
            other => return Err(ConfigError::Invalid { var: "STORE", value: other.to_owned() }),
        };

        Ok(Self { port, store })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
