//! Core domain logic for the atom builder.
//! Engine, heuristics and gallery storage live here; UI layers only call in.

pub mod auth;
pub mod config;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod scene;
pub mod service;
pub mod share;

pub use auth::{AuthSession, User};
pub use config::{AppConfig, BackendConfig, ConfigError};
pub use engine::AtomStateEngine;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::atom::{AtomState, ParticleCounts, ParticleLimits, VizMode};
pub use model::creation::{Creation, CreationId, CreationValidationError};
pub use model::derived::{derive, AtomicMass, DerivedInfo};
pub use model::element::{
    element_by_protons, element_by_symbol, elements_in_group, Element, ElementGroup,
};
pub use model::stability::{classify_stability, stable_neutron_count, Stability, StabilityStatus};
pub use repo::creation_repo::{
    CreationListQuery, CreationRepository, RepoError, RepoResult, SqliteCreationRepository,
};
pub use scene::{compose_scene, SceneLayout};
pub use service::gallery_service::{
    share_link, GalleryError, GalleryService, SaveOutcome, SaveRequest,
};
pub use share::{element_share_query, encode_share_query, parse_share_query, ShareLinkError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
