use thiserror::Error;

/// Application-wide error types for Harvest.
#[derive(Error, Debug)]
pub enum AppError {
    /// The job-board API could not be reached or answered with a non-success status.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// `CREATE DATABASE` hit an existing database (SQLSTATE 42P04).
    #[error("Database already exists: {0}")]
    DuplicateDatabase(String),

    /// The database server could not be reached.
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// An integrity constraint rejected a write (SQLSTATE class 23).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
