use harvest_core::AppError;
use harvest_core::traits::EmployerSource;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};

use crate::config::DbConfig;
use crate::error::{classify, connection_failure};
use crate::loader::Loader;
use crate::queries::VacancyRepository;
use crate::schema::{SCHEMA, quote_ident};

/// Central database facade: owns the connection, manages the schema,
/// and vends the loader and query repository.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create the configured database if it does not exist yet.
    ///
    /// Connects to the server's maintenance database for the duration of
    /// the call. An existing database is not an error.
    pub async fn ensure_database_exists(config: &DbConfig) -> Result<(), AppError> {
        let mut conn = PgConnection::connect_with(&config.maintenance_options())
            .await
            .map_err(connection_failure)?;

        let statement = format!("CREATE DATABASE {}", quote_ident(&config.database));
        let created = conn.execute(statement.as_str()).await.map_err(classify);
        conn.close().await.map_err(classify)?;

        match created {
            Ok(_) => {
                tracing::info!(database = %config.database, "Created database");
                Ok(())
            }
            Err(AppError::DuplicateDatabase(_)) => {
                tracing::debug!(database = %config.database, "Database already exists");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DbConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await
            .map_err(connection_failure)?;

        Ok(Self { pool })
    }

    /// Create the employers and vacancies tables if they are missing.
    pub async fn ensure_tables_exist(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(classify)?;
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(classify)?;
        }
        tx.commit().await.map_err(classify)?;
        tracing::debug!("Schema ready");
        Ok(())
    }

    /// Get a [`Loader`] that writes into this database from `source`.
    pub fn loader<S: EmployerSource>(&self, source: S) -> Loader<S> {
        Loader::new(self.pool.clone(), source)
    }

    /// Get a [`VacancyRepository`] backed by this pool.
    pub fn queries(&self) -> VacancyRepository {
        VacancyRepository::new(self.pool.clone())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the connection, waiting for it to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
