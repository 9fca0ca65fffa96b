//! Persistence contracts for saved creations.
//!
//! # Responsibility
//! - Define the gallery's data access trait.
//! - Keep SQL inside the SQLite implementation.
//!
//! # Invariants
//! - Writes call `Creation::validate()` before touching storage.
//! - Reads reject malformed rows with `RepoError::InvalidData`.

pub mod creation_repo;
