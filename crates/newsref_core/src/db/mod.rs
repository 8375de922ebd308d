//! SQLite bootstrap for the key-value storage backend.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No blob is read or written before migrations succeed.
//! - Failures surface as `StorageError`, the same type the backends return.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
