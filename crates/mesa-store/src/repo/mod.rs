//! Repository layer
//!
//! Bridges the domain model to the SQLite schema.

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
