//! Mesa Store - SQLite persistence for reservations
//!
//! Provides:
//! - SQLite schema with a migrations framework (embedded SQL, checksums)
//! - Repository layer bridging the domain model to persistence

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use repo::SqliteRepo;
