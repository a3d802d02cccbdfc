use harvest_core::AppError;

/// SQLSTATE raised by `CREATE DATABASE` when the database already exists.
pub const DUPLICATE_DATABASE: &str = "42P04";

/// Map a sqlx error onto the application error taxonomy.
pub fn classify(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => classify_sqlstate(&code, db_err.message().to_string()),
            None => AppError::DatabaseError(err.to_string()),
        },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => AppError::ConnectionFailure(err.to_string()),
        _ => AppError::DatabaseError(err.to_string()),
    }
}

/// Any failure while establishing a connection is a connection failure.
pub fn connection_failure(err: sqlx::Error) -> AppError {
    AppError::ConnectionFailure(err.to_string())
}

fn classify_sqlstate(code: &str, message: String) -> AppError {
    match code {
        DUPLICATE_DATABASE => AppError::DuplicateDatabase(message),
        // class 23: integrity constraint violation
        c if c.starts_with("23") => AppError::ConstraintViolation(message),
        // class 08: connection exception
        c if c.starts_with("08") => AppError::ConnectionFailure(message),
        _ => AppError::DatabaseError(format!("{message} (SQLSTATE {code})")),
    }
}
