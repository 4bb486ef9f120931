use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Result type for library store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for library store client operations
#[derive(Debug, Error)]
pub enum Error {
    /// Row with the requested id does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Validation error - invalid input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection error - database unreachable or authentication failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Referential-integrity breach reported by the storage layer
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Database error - SQL errors other than constraint violations
    #[error("Database error: {0}")]
    Database(String),

    /// Pool error - connection pool issues
    #[error("Pool error: {0}")]
    Pool(String),
}

/// Convert tokio-postgres errors to library store errors
impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            let code = db_error.code();

            // Foreign-key and uniqueness breaches surface as constraint
            // violations so callers can answer with a conflict.
            if code == &SqlState::FOREIGN_KEY_VIOLATION || code == &SqlState::UNIQUE_VIOLATION {
                return Error::Constraint(db_error.message().to_string());
            }

            // Return the actual database error message
            return Error::Database(format!("{}: {}", code.code(), db_error.message()));
        }

        Error::Database(err.to_string())
    }
}

/// Convert deadpool errors to library store errors
impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::Pool(err.to_string())
    }
}

/// Convert deadpool build errors to library store errors
impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::Connection(err.to_string())
    }
}
