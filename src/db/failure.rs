use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Engine failure, reduced to the categories the route layer maps onto
/// HTTP statuses. Classification happens here once; call sites never
/// inspect engine messages themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageFailure {
    #[error("unique constraint violated")]
    Uniqueness,
    #[error("foreign key constraint violated")]
    ForeignKey,
    #[error("check constraint violated")]
    CheckConstraint,
    #[error("database is busy")]
    Busy,
    #[error("database or disk is full")]
    Full,
    #[error("database is read-only")]
    ReadOnly,
    #[error("bind parameter out of range")]
    Range,
    #[error("datatype mismatch")]
    Mismatch,
    #[error("string or blob too big")]
    TooLarge,
    #[error("database file is not accessible")]
    Permission,
    #[error("unexpected storage error: {0}")]
    Unknown(String),
}

impl From<DieselError> for StorageFailure {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => match kind {
                DatabaseErrorKind::UniqueViolation => StorageFailure::Uniqueness,
                DatabaseErrorKind::ForeignKeyViolation => StorageFailure::ForeignKey,
                DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation => {
                    StorageFailure::CheckConstraint
                }
                _ => classify_engine_message(info.message()),
            },
            other => StorageFailure::Unknown(other.to_string()),
        }
    }
}

// SQLite reports non-constraint conditions through its message text;
// diesel surfaces them under DatabaseErrorKind::Unknown.
fn classify_engine_message(raw: &str) -> StorageFailure {
    let message = raw.to_lowercase();

    if message.contains("database is locked")
        || message.contains("database table is locked")
        || message.contains("busy")
    {
        StorageFailure::Busy
    } else if message.contains("database or disk is full") {
        StorageFailure::Full
    } else if message.contains("readonly") || message.contains("read-only") {
        StorageFailure::ReadOnly
    } else if message.contains("bind or column index out of range") {
        StorageFailure::Range
    } else if message.contains("datatype mismatch") {
        StorageFailure::Mismatch
    } else if message.contains("string or blob too big") {
        StorageFailure::TooLarge
    } else if message.contains("access permission denied")
        || message.contains("not authorized")
        || message.contains("unable to open database file")
    {
        StorageFailure::Permission
    } else {
        StorageFailure::Unknown(raw.to_string())
    }
}
