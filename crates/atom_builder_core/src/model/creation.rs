//! Saved creation domain model.
//!
//! # Responsibility
//! - Define the snapshot record persisted by the gallery.
//! - Validate persisted shape on construction, deserialization and writes.
//!
//! # Invariants
//! - `id` is never nil.
//! - `user_id` and `name` are non-blank.
//! - `protons >= 1`; a saved atom always has a nucleus.

use crate::model::atom::{ParticleCounts, MIN_PROTONS};
use crate::model::stability::StabilityStatus;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a saved creation.
pub type CreationId = Uuid;

/// Validation errors for `Creation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationValidationError {
    NilId,
    EmptyUserId,
    EmptyName,
    MissingNucleus,
}

impl Display for CreationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "creation id must not be nil"),
            Self::EmptyUserId => write!(f, "creation user_id must not be empty"),
            Self::EmptyName => write!(f, "creation name must not be empty"),
            Self::MissingNucleus => {
                write!(f, "creation protons must be >= {MIN_PROTONS}")
            }
        }
    }
}

impl Error for CreationValidationError {}

/// One saved atom, owned by a user and optionally listed publicly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CreationWire")]
pub struct Creation {
    pub id: CreationId,
    pub user_id: String,
    /// Display name at save time; `Anonymous` when the account has none.
    pub user_name: String,
    pub name: String,
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub is_antimatter: bool,
    pub is_public: bool,
    /// Stability label computed when the creation was saved.
    pub stability: StabilityStatus,
    /// Whether the element was beyond the known table at save time.
    pub predicted: bool,
    /// Unix epoch milliseconds.
    pub published_at: i64,
}

impl Creation {
    /// Creates a creation with a generated id.
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        name: impl Into<String>,
        counts: ParticleCounts,
    ) -> Result<Self, CreationValidationError> {
        Self::with_id(Uuid::new_v4(), user_id, user_name, name, counts)
    }

    /// Creates a creation with a caller-provided id.
    ///
    /// Stability defaults to `Unknown` and `published_at` to `0`; the gallery
    /// service fills both before persisting.
    pub fn with_id(
        id: CreationId,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        name: impl Into<String>,
        counts: ParticleCounts,
    ) -> Result<Self, CreationValidationError> {
        let creation = Self {
            id,
            user_id: user_id.into(),
            user_name: user_name.into(),
            name: name.into(),
            protons: counts.protons,
            neutrons: counts.neutrons,
            electrons: counts.electrons,
            is_antimatter: false,
            is_public: false,
            stability: StabilityStatus::Unknown,
            predicted: false,
            published_at: 0,
        };
        creation.validate()?;
        Ok(creation)
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), CreationValidationError> {
        if self.id.is_nil() {
            return Err(CreationValidationError::NilId);
        }
        if self.user_id.trim().is_empty() {
            return Err(CreationValidationError::EmptyUserId);
        }
        if self.name.trim().is_empty() {
            return Err(CreationValidationError::EmptyName);
        }
        if self.protons < MIN_PROTONS {
            return Err(CreationValidationError::MissingNucleus);
        }
        Ok(())
    }

    /// Particle counts to hand back to the engine.
    pub fn counts(&self) -> ParticleCounts {
        ParticleCounts::new(self.protons, self.neutrons, self.electrons)
    }
}

#[derive(Deserialize)]
struct CreationWire {
    id: CreationId,
    user_id: String,
    user_name: String,
    name: String,
    protons: u32,
    neutrons: u32,
    electrons: u32,
    is_antimatter: bool,
    is_public: bool,
    stability: StabilityStatus,
    predicted: bool,
    published_at: i64,
}

impl TryFrom<CreationWire> for Creation {
    type Error = CreationValidationError;

    fn try_from(wire: CreationWire) -> Result<Self, Self::Error> {
        let creation = Self {
            id: wire.id,
            user_id: wire.user_id,
            user_name: wire.user_name,
            name: wire.name,
            protons: wire.protons,
            neutrons: wire.neutrons,
            electrons: wire.electrons,
            is_antimatter: wire.is_antimatter,
            is_public: wire.is_public,
            stability: wire.stability,
            predicted: wire.predicted,
            published_at: wire.published_at,
        };
        creation.validate()?;
        Ok(creation)
    }
}
