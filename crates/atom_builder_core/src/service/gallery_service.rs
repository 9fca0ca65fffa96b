//! Creations gallery use cases.
//!
//! # Responsibility
//! - Save the engine's current atom for the signed-in user.
//! - List a user's creations and the public gallery.
//! - Load a saved creation back into an engine.
//!
//! # Invariants
//! - Saving without a persistable session yields `SaveOutcome::SignInRequired`,
//!   never an error, and never touches storage.
//! - Stored names are trimmed, whitespace-collapsed and never empty.
//! - Stability and `predicted` are computed from the counts at save time.

use crate::auth::AuthSession;
use crate::engine::AtomStateEngine;
use crate::model::creation::{Creation, CreationId};
use crate::repo::creation_repo::{CreationListQuery, CreationRepository, RepoError};
use crate::share::encode_share_query;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Notice shown when a signed-out or guest user tries to save.
pub const SIGN_IN_REQUIRED_MESSAGE: &str = "Please sign in to save your creations.";

const MAX_NAME_CHARS: usize = 80;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Fields the user picks in the save dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRequest {
    pub name: String,
    pub is_public: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(CreationId),
    SignInRequired,
}

impl SaveOutcome {
    /// User-facing notice for outcomes that need one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Saved(_) => None,
            Self::SignInRequired => Some(SIGN_IN_REQUIRED_MESSAGE),
        }
    }
}

#[derive(Debug)]
pub enum GalleryError {
    Repo(RepoError),
    NotFound(CreationId),
    NotOwner(CreationId),
}

impl Display for GalleryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "creation not found: {id}"),
            Self::NotOwner(id) => write!(f, "creation {id} belongs to another user"),
        }
    }
}

impl Error for GalleryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) | Self::NotOwner(_) => None,
        }
    }
}

impl From<RepoError> for GalleryError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type GalleryResult<T> = Result<T, GalleryError>;

pub struct GalleryService<R: CreationRepository> {
    repo: R,
    clock: fn() -> i64,
}

impl<R: CreationRepository> GalleryService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, now_epoch_ms)
    }

    /// Uses `clock` (epoch milliseconds) to stamp `published_at`.
    pub fn with_clock(repo: R, clock: fn() -> i64) -> Self {
        Self { repo, clock }
    }

    /// Saves the engine's current atom.
    pub fn save_current(
        &self,
        session: &AuthSession,
        engine: &AtomStateEngine,
        request: &SaveRequest,
    ) -> GalleryResult<SaveOutcome> {
        let user = match session.user() {
            Some(user) if session.can_persist() => user,
            _ => {
                warn!("event=creation_save module=gallery status=rejected reason=sign_in_required");
                return Ok(SaveOutcome::SignInRequired);
            }
        };

        let derived = engine.derived();
        let (counts, is_antimatter) = engine.snapshot();
        let name = normalize_creation_name(&request.name).unwrap_or_else(|| derived.name.clone());

        let mut creation = Creation::new(user.id.as_str(), user.name_or_anonymous(), name, counts)
            .map_err(RepoError::from)?;
        creation.is_antimatter = is_antimatter;
        creation.is_public = request.is_public;
        creation.stability = derived.stability.status;
        creation.predicted = derived.predicted;
        creation.published_at = (self.clock)();

        let id = self.repo.create_creation(&creation)?;
        info!(
            "event=creation_save module=gallery status=ok id={id} protons={} public={}",
            counts.protons, request.is_public
        );
        Ok(SaveOutcome::Saved(id))
    }

    /// The signed-in user's creations, newest first.
    ///
    /// Signed-out sessions get an empty list.
    pub fn list_mine(
        &self,
        session: &AuthSession,
        limit: Option<u32>,
    ) -> GalleryResult<Vec<Creation>> {
        let Some(user) = session.user() else {
            return Ok(Vec::new());
        };
        let mut query = CreationListQuery::owned_by(user.id.as_str());
        query.limit = limit;
        Ok(self.repo.list_creations(&query)?)
    }

    /// Public creations ordered by user name, then newest first.
    pub fn list_public(&self, limit: Option<u32>) -> GalleryResult<Vec<Creation>> {
        let mut query = CreationListQuery::public();
        query.limit = limit;
        Ok(self.repo.list_creations(&query)?)
    }

    pub fn get(&self, id: CreationId) -> GalleryResult<Creation> {
        self.repo.get_creation(id)?.ok_or(GalleryError::NotFound(id))
    }

    /// Loads a saved creation into `engine` as a preset.
    pub fn remix(&self, id: CreationId, engine: &mut AtomStateEngine) -> GalleryResult<Creation> {
        let creation = self.get(id)?;
        engine.load_preset(creation.counts(), creation.is_antimatter);
        info!("event=creation_remix module=gallery status=ok id={id}");
        Ok(creation)
    }

    /// Deletes one of the signed-in user's creations.
    pub fn delete_mine(&self, session: &AuthSession, id: CreationId) -> GalleryResult<()> {
        let creation = self.get(id)?;
        let owns = session
            .user()
            .is_some_and(|user| user.id == creation.user_id);
        if !owns {
            return Err(GalleryError::NotOwner(id));
        }
        self.repo.delete_creation(id)?;
        info!("event=creation_delete module=gallery status=ok id={id}");
        Ok(())
    }
}

/// Share-link query for a saved creation.
pub fn share_link(creation: &Creation) -> String {
    encode_share_query(creation.counts())
}

/// Collapses whitespace and caps length; `None` when nothing is left.
pub fn normalize_creation_name(raw: &str) -> Option<String> {
    let collapsed = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    if collapsed.is_empty() {
        return None;
    }
    Some(collapsed.chars().take(MAX_NAME_CHARS).collect())
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
