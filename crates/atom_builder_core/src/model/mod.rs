//! Domain model for the atom builder.
//!
//! # Responsibility
//! - Define engine state, derived info and saved-creation records.
//! - Hold the pure heuristics (element lookup, stability) the engine uses.
//!
//! # Invariants
//! - Everything in this module is free of I/O and logging.

pub mod atom;
pub mod creation;
pub mod derived;
pub mod element;
pub mod stability;
