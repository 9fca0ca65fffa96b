//! Flutter-facing bindings for the atom builder core.

pub mod api;
