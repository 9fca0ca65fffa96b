//! Use-case services over the creation store.
//!
//! # Responsibility
//! - Combine session, engine and repository into gallery operations.
//! - Keep FFI and CLI callers away from SQL.

pub mod gallery_service;
