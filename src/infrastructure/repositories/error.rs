use crate::domain::errors::DomainError;

/// Maps driver failures on the read path. Every failure is a persistence
/// error; pool exhaustion gets a stable message.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        other => DomainError::Persistence(other.to_string()),
    }
}
