use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

/// Failures surfaced by every store operation. Nothing is retried internally;
/// the caller decides whether a retry is safe.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection failure: {0}")]
    ConnectionFailure(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("serialization failure: {0}")]
    SerializationFailure(String),
    #[error("database error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn not_found(entity: &str, app_id: &str) -> Self {
        Self::NotFound(format!("{} for app {} not found", entity, app_id))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<DbErr> for StoreError {
    fn from(e: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
            return Self::ConstraintViolation(msg);
        }
        match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::ConnectionFailure(e.to_string()),
            DbErr::Exec(ref inner) | DbErr::Query(ref inner) if lost_connection(inner) => {
                Self::ConnectionFailure(e.to_string())
            }
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            other => Self::Database(other.to_string()),
        }
    }
}

/// Driver errors meaning the engine went away mid-statement rather than
/// rejecting the statement.
fn lost_connection(e: &RuntimeErr) -> bool {
    matches!(
        e,
        RuntimeErr::SqlxError(
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolClosed
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::WorkerCrashed
        )
    )
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationFailure(e.to_string())
    }
}
