// src/shared/db_error.rs
use sea_orm::{DbErr, SqlErr};

/// Constraint violations the adapters translate into domain errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Unique violation; carries the lowercased driver message so callers can
    /// tell which column collided.
    Unique(String),
    ForeignKey(String),
}

/// Classifies a `DbErr`, preferring the driver error code and falling back to
/// the message text (mock connections only carry text).
pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            return Some(ConstraintViolation::Unique(msg.to_lowercase()))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return Some(ConstraintViolation::ForeignKey(msg.to_lowercase()))
        }
        _ => {}
    }

    let msg = err.to_string().to_lowercase();
    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        Some(ConstraintViolation::Unique(msg))
    } else if msg.contains("23503") || msg.contains("foreign key") {
        Some(ConstraintViolation::ForeignKey(msg))
    } else {
        None
    }
}
