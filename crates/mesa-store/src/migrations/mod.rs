//! Schema migrations
//!
//! Embedded SQL migrations with checksums and an idempotent runner

pub mod checksums;
pub mod embedded;
pub mod runner;

pub use runner::apply_migrations;
