use std::fmt;

use harvest_core::AppError;
use sqlx::postgres::PgConnectOptions;

/// Database that always exists on a PostgreSQL server; used to issue `CREATE DATABASE`.
const MAINTENANCE_DATABASE: &str = "postgres";

/// Configuration for the PostgreSQL connection.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DbConfig {
    /// Read configuration from environment variables.
    ///
    /// - `DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD` (required)
    /// - `DB_PORT` (optional, defaults to 5432)
    /// - `DB_MAX_CONNECTIONS` (optional, defaults to 1)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| {
                AppError::ConfigError(format!("{key} not set. Required for database operations."))
            })
        };

        let port = match lookup("DB_PORT") {
            None => 5432,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::ConfigError(format!("Invalid DB_PORT '{raw}': must be a port number"))
            })?,
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => 1,
            Some(raw) => {
                let parsed: u32 = raw.trim().parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid DB_MAX_CONNECTIONS '{raw}': must be a positive integer"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::ConfigError(
                        "DB_MAX_CONNECTIONS must be at least 1".into(),
                    ));
                }
                parsed
            }
        };

        Ok(Self {
            host: required("DB_HOST")?,
            port,
            database: required("DB_NAME")?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            max_connections,
        })
    }

    /// Options for connecting to the configured database.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.server_options().database(&self.database)
    }

    /// Options for connecting to the server's maintenance database.
    pub fn maintenance_options(&self) -> PgConnectOptions {
        self.server_options().database(MAINTENANCE_DATABASE)
    }

    fn server_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
    }
}
