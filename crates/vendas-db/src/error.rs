//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)      CoreError (bad money / date text)     │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ├──► typed API:    list() / create()   → DbResult<T>             │
//! │       │                                                                 │
//! │       └──► sentinel API: list_all() / insert() → None / false (logged) │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vendas_core::CoreError;

/// Database operation errors.
///
/// Every variant is a "storage operation failed" case. The variants only
/// exist so logs say which kind.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed (syntax, missing table, ...).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// NOT NULL / CHECK / UNIQUE constraint rejected the statement.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// A stored value could not be turned back into a record field.
    ///
    /// ## When This Occurs
    /// - `valor_pedido` is not a decimal
    /// - `data_pedido` is not ISO 8601
    /// - Column type mismatch
    #[error("Decode failed: {0}")]
    Decode(String),

    /// The INSERT ran but returned no generated identifier.
    #[error("{entity} was not inserted")]
    NothingInserted { entity: String },

    /// The record already carries a storage identifier.
    #[error("{entity} is already persisted with id {id}")]
    AlreadyPersisted { entity: String, id: i64 },

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// A configuration value could not be parsed.
    #[error("Invalid configuration value for {0}")]
    InvalidConfig(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn nothing_inserted(entity: impl Into<String>) -> Self {
        DbError::NothingInserted {
            entity: entity.into(),
        }
    }

    pub fn already_persisted(entity: impl Into<String>, id: i64) -> Self {
        DbError::AlreadyPersisted {
            entity: entity.into(),
            id,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → ConstraintViolation / QueryFailed
/// sqlx::Error::ColumnDecode   → Decode
/// sqlx::Error::PoolTimedOut   → PoolExhausted
/// sqlx::Error::PoolClosed     → ConnectionFailed
/// Other                       → Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports "<KIND> constraint failed: <table>.<column>"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_) => {
                DbError::Decode(err.to_string())
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

impl From<CoreError> for DbError {
    fn from(err: CoreError) -> Self {
        DbError::Decode(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
