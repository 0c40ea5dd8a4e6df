use sea_orm::{DbErr, SqlErr};

/// What a failed statement means for the CV tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DbFailure {
    UniqueViolation,
    ForeignKeyViolation(String),
    Other(String),
}

pub(super) fn classify(err: &DbErr) -> DbFailure {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return DbFailure::UniqueViolation,
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return DbFailure::ForeignKeyViolation(msg)
        }
        _ => {}
    }

    // Driver-agnostic fallback: Postgres SQLSTATE codes and SQLite messages.
    let msg = err.to_string();
    let lower = msg.to_lowercase();

    if lower.contains("23505") || lower.contains("duplicate key") || lower.contains("unique constraint") {
        DbFailure::UniqueViolation
    } else if lower.contains("23503") || lower.contains("foreign key") {
        DbFailure::ForeignKeyViolation(msg)
    } else {
        DbFailure::Other(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_unique_violation_is_detected() {
        let err = DbErr::Custom(
            "error returned from database: duplicate key value violates unique constraint \"idx_cvs_email_unique\""
                .to_string(),
        );
        assert_eq!(classify(&err), DbFailure::UniqueViolation);
    }

    #[test]
    fn sqlite_unique_violation_is_detected() {
        let err = DbErr::Custom("UNIQUE constraint failed: cvs.email".to_string());
        assert_eq!(classify(&err), DbFailure::UniqueViolation);
    }

    #[test]
    fn foreign_key_violation_is_detected() {
        let err = DbErr::Custom("FOREIGN KEY constraint failed".to_string());
        assert!(matches!(classify(&err), DbFailure::ForeignKeyViolation(_)));
    }

    #[test]
    fn anything_else_is_other() {
        let err = DbErr::Custom("connection reset".to_string());
        assert_eq!(
            classify(&err),
            DbFailure::Other("Custom Error: connection reset".to_string())
        );
    }
}
