//! Error handling for mesa-store
//!
//! Wraps rusqlite and IO failures into the workspace error taxonomy

use mesa_core::errors::MesaError;

/// Result type alias using MesaError
pub type Result<T> = std::result::Result<T, MesaError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> MesaError {
    MesaError::Persistence {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> MesaError {
    MesaError::Persistence {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}

/// Create a corrupt-row error for data that no longer parses
pub fn corrupt_row(id: &str, reason: &str) -> MesaError {
    MesaError::Persistence {
        op: "row_decode".to_string(),
        message: format!("Reservation row {} is corrupt: {}", id, reason),
    }
}
