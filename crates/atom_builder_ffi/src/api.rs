//! FFI use-case API for the Flutter atom builder.
//!
//! # Responsibility
//! - Expose engine mutators, derived info, scene layout, auth and gallery
//!   calls to Dart via FRB.
//! - Flatten core types into plain view structs with string enums.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - One builder session per process; `configure` must run before any other
//!   session call to take effect.
//! - Failures come back inside response envelopes, never as panics.

use atom_builder_core::db::open_db;
use atom_builder_core::service::gallery_service::GalleryResult;
use atom_builder_core::{
    compose_scene, core_version as core_version_inner, element_share_query as element_link,
    init_logging as init_logging_inner,
    ping as ping_inner, share_link, AppConfig, AtomStateEngine, AuthSession, Creation,
    CreationId, GalleryService, ParticleCounts, SaveOutcome, SaveRequest,
    SqliteCreationRepository, VizMode,
};
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const DB_FILE_NAME: &str = "atom_builder_creations.sqlite3";
const DB_PATH_ENV: &str = "ATOM_BUILDER_DB_PATH";
const LIST_DEFAULT_LIMIT: u32 = 50;
const LIST_LIMIT_MAX: u32 = 200;

static SESSION: OnceLock<Mutex<BuilderSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Repeating the call with the same `level + log_dir` is a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Installs the startup configuration from a JSON document.
///
/// Returns an empty string on success. Once a session exists, only an
/// identical config is accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn configure(config_json: String) -> String {
    let config = match AppConfig::from_json_str(&config_json) {
        Ok(config) => config,
        Err(err) => return err.to_string(),
    };

    let mut installed = false;
    let cell = SESSION.get_or_init(|| {
        installed = true;
        Mutex::new(BuilderSession::new(config.clone()))
    });
    if installed {
        return String::new();
    }

    if lock(cell).config == config {
        String::new()
    } else {
        "session already configured; refusing to switch config".to_string()
    }
}

/// Flattened atom state plus derived info.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomView {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub is_antimatter: bool,
    pub is_stable_mode: bool,
    /// `bohr|cloud`.
    pub viz_mode: String,
    pub symbol: String,
    pub name: String,
    /// Table atomic weight, or `?` beyond the table.
    pub mass: String,
    pub group: String,
    pub charge: i32,
    pub charge_label: String,
    pub ion_kind: String,
    pub stability: String,
    pub stability_reason: String,
    pub predicted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub radius: f64,
    pub electrons: u32,
}

/// Everything the 3D viewport reads for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    pub protons: u32,
    pub neutrons: u32,
    pub nucleus_radius: f64,
    pub shells: Vec<ShellView>,
    pub proton_color: String,
    pub neutron_color: String,
    pub electron_color: String,
    pub proton_label: String,
    pub neutron_label: String,
    pub electron_label: String,
    pub viz_mode: String,
    pub show_orbits: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthView {
    pub signed_in: bool,
    pub is_anonymous: bool,
    pub can_persist: bool,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

/// Save result; `needs_sign_in` marks the non-fatal notice case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveResponse {
    pub ok: bool,
    pub needs_sign_in: bool,
    pub creation_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub creation_id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, creation_id: CreationId) -> Self {
        Self {
            ok: true,
            creation_id: Some(creation_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            creation_id: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationItem {
    pub id: String,
    pub user_name: String,
    pub name: String,
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub is_antimatter: bool,
    pub is_public: bool,
    pub stability: String,
    pub predicted: bool,
    pub published_at: i64,
    pub share_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationListResponse {
    pub items: Vec<CreationItem>,
    pub message: String,
    pub applied_limit: u32,
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_state() -> AtomView {
    session().view()
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_protons(value: i64) -> AtomView {
    session().update(|engine| engine.set_protons(value))
}

/// Sets neutrons; leaves stable mode when it was on.
#[flutter_rust_bridge::frb(sync)]
pub fn set_neutrons(value: i64) -> AtomView {
    session().update(|engine| engine.set_neutrons(value))
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_electrons(value: i64) -> AtomView {
    session().update(|engine| engine.set_electrons(value))
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_antimatter(is_antimatter: bool) -> AtomView {
    session().update(|engine| engine.set_is_antimatter(is_antimatter))
}

#[flutter_rust_bridge::frb(sync)]
pub fn toggle_antimatter() -> AtomView {
    session().update(AtomStateEngine::toggle_antimatter)
}

/// Sets `bohr|cloud`; unknown names leave the mode unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn set_viz_mode(mode: String) -> AtomView {
    session().set_viz_mode(&mode)
}

#[flutter_rust_bridge::frb(sync)]
pub fn toggle_viz_mode() -> AtomView {
    session().update(AtomStateEngine::toggle_viz_mode)
}

#[flutter_rust_bridge::frb(sync)]
pub fn toggle_stable_mode() -> AtomView {
    session().update(AtomStateEngine::toggle_stable_mode)
}

#[flutter_rust_bridge::frb(sync)]
pub fn reset_atom() -> AtomView {
    session().update(AtomStateEngine::reset_atom)
}

#[flutter_rust_bridge::frb(sync)]
pub fn load_preset(protons: u32, neutrons: u32, electrons: u32, is_antimatter: bool) -> AtomView {
    let counts = ParticleCounts::new(protons, neutrons, electrons);
    session().update(|engine| engine.load_preset(counts, is_antimatter))
}

/// Replaces the engine with one seeded from a `p/n/e` query.
#[flutter_rust_bridge::frb(sync)]
pub fn seed_from_share_link(query: String) -> AtomView {
    session().seed(&query)
}

#[flutter_rust_bridge::frb(sync)]
pub fn share_query() -> String {
    session().engine.share_query()
}

/// Builder query for a periodic-table tile; empty for unknown elements.
#[flutter_rust_bridge::frb(sync)]
pub fn element_share_query(protons: u32) -> String {
    element_link(protons).unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn scene() -> SceneView {
    session().scene()
}

#[flutter_rust_bridge::frb(sync)]
pub fn sign_in(display_name: String) -> AuthView {
    let mut session = session();
    session.auth.sign_in(&display_name);
    session.auth_view()
}

#[flutter_rust_bridge::frb(sync)]
pub fn sign_in_anonymously() -> AuthView {
    let mut session = session();
    session.auth.sign_in_anonymously();
    session.auth_view()
}

#[flutter_rust_bridge::frb(sync)]
pub fn sign_out() -> AuthView {
    let mut session = session();
    session.auth.sign_out();
    session.auth_view()
}

#[flutter_rust_bridge::frb(sync)]
pub fn auth_status() -> AuthView {
    session().auth_view()
}

/// Saves the current atom for the signed-in user.
#[flutter_rust_bridge::frb(sync)]
pub fn save_creation(name: String, is_public: bool) -> SaveResponse {
    session().save(name, is_public)
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_my_creations(limit: Option<u32>) -> CreationListResponse {
    session().list(ListScope::Mine, limit)
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_public_creations(limit: Option<u32>) -> CreationListResponse {
    session().list(ListScope::Public, limit)
}

/// Loads a saved creation into the engine.
#[flutter_rust_bridge::frb(sync)]
pub fn remix_creation(creation_id: String) -> ActionResponse {
    session().remix(&creation_id)
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_creation(creation_id: String) -> ActionResponse {
    session().delete(&creation_id)
}

enum ListScope {
    Mine,
    Public,
}

/// Process-wide state behind the exported functions.
struct BuilderSession {
    config: AppConfig,
    engine: AtomStateEngine,
    auth: AuthSession,
    db_path: PathBuf,
}

impl BuilderSession {
    fn new(config: AppConfig) -> Self {
        let db_path = resolve_db_path(&config);
        Self::with_db_path(config, db_path)
    }

    fn with_db_path(config: AppConfig, db_path: PathBuf) -> Self {
        Self {
            engine: AtomStateEngine::new(config.limits),
            auth: AuthSession::new(),
            db_path,
            config,
        }
    }

    fn view(&self) -> AtomView {
        to_atom_view(&self.engine)
    }

    fn update(&mut self, mutate: impl FnOnce(&mut AtomStateEngine)) -> AtomView {
        mutate(&mut self.engine);
        self.view()
    }

    fn set_viz_mode(&mut self, mode: &str) -> AtomView {
        match VizMode::parse(&mode.trim().to_ascii_lowercase()) {
            Some(mode) => self.engine.set_viz_mode(mode),
            None => warn!("event=set_viz_mode module=ffi status=ignored value={mode}"),
        }
        self.view()
    }

    fn seed(&mut self, query: &str) -> AtomView {
        self.engine = AtomStateEngine::from_share_query(query, self.config.limits);
        self.view()
    }

    fn scene(&self) -> SceneView {
        let scene = compose_scene(self.engine.state());
        SceneView {
            protons: scene.protons,
            neutrons: scene.neutrons,
            nucleus_radius: scene.nucleus_radius,
            shells: scene
                .shells
                .into_iter()
                .map(|shell| ShellView {
                    radius: shell.radius,
                    electrons: shell.electrons,
                })
                .collect(),
            proton_color: scene.proton_color.to_string(),
            neutron_color: scene.neutron_color.to_string(),
            electron_color: scene.electron_color.to_string(),
            proton_label: scene.labels.proton.to_string(),
            neutron_label: scene.labels.neutron.to_string(),
            electron_label: scene.labels.electron.to_string(),
            viz_mode: scene.viz_mode.as_str().to_string(),
            show_orbits: scene.show_orbits,
        }
    }

    fn auth_view(&self) -> AuthView {
        let user = self.auth.user();
        AuthView {
            signed_in: user.is_some(),
            is_anonymous: user.is_some_and(|user| user.is_anonymous),
            can_persist: self.auth.can_persist(),
            user_id: user.map(|user| user.id.clone()),
            display_name: user.and_then(|user| user.display_name.clone()),
        }
    }

    fn save(&self, name: String, is_public: bool) -> SaveResponse {
        let request = SaveRequest { name, is_public };
        let result = with_gallery(&self.db_path, |service| {
            service.save_current(&self.auth, &self.engine, &request)
        });

        match result {
            Ok(SaveOutcome::Saved(id)) => SaveResponse {
                ok: true,
                needs_sign_in: false,
                creation_id: Some(id.to_string()),
                message: "Creation saved.".to_string(),
            },
            Ok(outcome @ SaveOutcome::SignInRequired) => SaveResponse {
                ok: false,
                needs_sign_in: true,
                creation_id: None,
                message: outcome.notice().unwrap_or_default().to_string(),
            },
            Err(err) => SaveResponse {
                ok: false,
                needs_sign_in: false,
                creation_id: None,
                message: format!("save_creation failed: {err}"),
            },
        }
    }

    fn list(&self, scope: ListScope, limit: Option<u32>) -> CreationListResponse {
        let applied_limit = normalize_list_limit(limit);
        let result = with_gallery(&self.db_path, |service| match scope {
            ListScope::Mine => service.list_mine(&self.auth, Some(applied_limit)),
            ListScope::Public => service.list_public(Some(applied_limit)),
        });

        match result {
            Ok(creations) => {
                let items = creations.iter().map(to_creation_item).collect::<Vec<_>>();
                let message = if items.is_empty() {
                    "No creations yet.".to_string()
                } else {
                    format!("Found {} creation(s).", items.len())
                };
                CreationListResponse {
                    items,
                    message,
                    applied_limit,
                }
            }
            Err(err) => CreationListResponse {
                items: Vec::new(),
                message: format!("list creations failed: {err}"),
                applied_limit,
            },
        }
    }

    fn remix(&mut self, raw_id: &str) -> ActionResponse {
        let id = match parse_creation_id(raw_id) {
            Ok(id) => id,
            Err(message) => return ActionResponse::failure(message),
        };
        match with_gallery(&self.db_path, |service| service.remix(id, &mut self.engine)) {
            Ok(creation) => ActionResponse::success(format!("Loaded {}.", creation.name), id),
            Err(err) => ActionResponse::failure(format!("remix_creation failed: {err}")),
        }
    }

    fn delete(&self, raw_id: &str) -> ActionResponse {
        let id = match parse_creation_id(raw_id) {
            Ok(id) => id,
            Err(message) => return ActionResponse::failure(message),
        };
        match with_gallery(&self.db_path, |service| service.delete_mine(&self.auth, id)) {
            Ok(()) => ActionResponse::success("Creation deleted.", id),
            Err(err) => ActionResponse::failure(format!("delete_creation failed: {err}")),
        }
    }
}

fn session() -> MutexGuard<'static, BuilderSession> {
    lock(SESSION.get_or_init(|| Mutex::new(BuilderSession::new(AppConfig::default()))))
}

fn lock(cell: &Mutex<BuilderSession>) -> MutexGuard<'_, BuilderSession> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_gallery<T>(
    db_path: &Path,
    run: impl FnOnce(&GalleryService<SqliteCreationRepository<'_>>) -> GalleryResult<T>,
) -> Result<T, String> {
    let conn = open_db(db_path).map_err(|err| format!("creations DB open failed: {err}"))?;
    let service = GalleryService::new(SqliteCreationRepository::new(&conn));
    run(&service).map_err(|err| err.to_string())
}

fn resolve_db_path(config: &AppConfig) -> PathBuf {
    if let Some(path) = &config.db_path {
        return path.clone();
    }
    if let Ok(raw) = std::env::var(DB_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(DB_FILE_NAME)
}

fn normalize_list_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => LIST_DEFAULT_LIMIT,
        Some(value) => value.min(LIST_LIMIT_MAX),
    }
}

fn parse_creation_id(raw: &str) -> Result<CreationId, String> {
    uuid::Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid creation id `{raw}`"))
}

fn to_atom_view(engine: &AtomStateEngine) -> AtomView {
    let state = engine.state();
    let info = engine.derived();
    AtomView {
        protons: state.protons,
        neutrons: state.neutrons,
        electrons: state.electrons,
        is_antimatter: state.is_antimatter,
        is_stable_mode: state.is_stable_mode,
        viz_mode: state.viz_mode.as_str().to_string(),
        mass: info.mass.to_string(),
        group: info.group.label().to_string(),
        charge: info.charge,
        charge_label: info.charge_label(),
        ion_kind: info.ion_kind().to_string(),
        stability: info.stability.status.as_str().to_string(),
        stability_reason: info.stability.reason,
        predicted: info.predicted,
        symbol: info.symbol,
        name: info.name,
    }
}

fn to_creation_item(creation: &Creation) -> CreationItem {
    CreationItem {
        id: creation.id.to_string(),
        user_name: creation.user_name.clone(),
        name: creation.name.clone(),
        protons: creation.protons,
        neutrons: creation.neutrons,
        electrons: creation.electrons,
        is_antimatter: creation.is_antimatter,
        is_public: creation.is_public,
        stability: creation.stability.as_str().to_string(),
        predicted: creation.predicted,
        published_at: creation.published_at,
        share_query: share_link(creation),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        configure, core_version, element_share_query, init_logging, normalize_list_limit, ping,
        BuilderSession, ListScope,
    };
    use atom_builder_core::AppConfig;

    fn scratch_session(dir: &tempfile::TempDir) -> BuilderSession {
        BuilderSession::with_db_path(AppConfig::default(), dir.path().join("creations.sqlite3"))
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn element_tile_query_uses_common_isotope() {
        assert_eq!(element_share_query(3), "p=3&n=4&e=3");
        assert!(element_share_query(200).is_empty());
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn configure_reports_invalid_json() {
        let message = configure("{not json".to_string());
        assert!(message.contains("invalid config JSON"));
    }

    #[test]
    fn list_limit_is_defaulted_and_capped() {
        assert_eq!(normalize_list_limit(None), 50);
        assert_eq!(normalize_list_limit(Some(0)), 50);
        assert_eq!(normalize_list_limit(Some(7)), 7);
        assert_eq!(normalize_list_limit(Some(10_000)), 200);
    }

    #[test]
    fn mutators_return_fresh_views() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = scratch_session(&dir);

        let view = session.update(|engine| engine.set_protons(6));
        assert_eq!(view.symbol, "C");
        assert_eq!(view.electrons, 6);

        let view = session.update(|engine| engine.toggle_stable_mode());
        assert_eq!(view.neutrons, 6);
        assert_eq!(view.stability, "Stable");

        let view = session.set_viz_mode("CLOUD");
        assert_eq!(view.viz_mode, "cloud");
        let view = session.set_viz_mode("hologram");
        assert_eq!(view.viz_mode, "cloud");
    }

    #[test]
    fn seed_and_scene_follow_share_link() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = scratch_session(&dir);

        let view = session.seed("?p=11&n=12&e=10");
        assert_eq!(view.symbol, "Na");
        assert_eq!(view.charge_label, "+1");

        let scene = session.scene();
        let per_shell: Vec<u32> = scene.shells.iter().map(|shell| shell.electrons).collect();
        assert_eq!(per_shell, vec![2, 8]);
        assert!(scene.show_orbits);
    }

    #[test]
    fn save_requires_sign_in_then_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = scratch_session(&dir);
        session.update(|engine| engine.set_protons(2));

        let response = session.save("helium".to_string(), true);
        assert!(!response.ok);
        assert!(response.needs_sign_in);
        assert_eq!(response.message, "Please sign in to save your creations.");

        session.auth.sign_in("Ada");
        let response = session.save("helium".to_string(), true);
        assert!(response.ok, "{}", response.message);
        let id = response.creation_id.expect("saved id");

        let conn = rusqlite::Connection::open(&session.db_path).expect("open creations db");
        let (name, user_name): (String, String) = conn
            .query_row(
                "SELECT name, user_name FROM creations WHERE id = ?1",
                [id.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("saved row");
        assert_eq!(name, "helium");
        assert_eq!(user_name, "Ada");
        drop(conn);

        let listed = session.list(ListScope::Public, None);
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].share_query, "p=2&n=0&e=2");

        session.update(|engine| engine.reset_atom());
        let remixed = session.remix(&id);
        assert!(remixed.ok, "{}", remixed.message);
        assert_eq!(session.view().protons, 2);

        let deleted = session.delete(&id);
        assert!(deleted.ok, "{}", deleted.message);
        assert!(session.list(ListScope::Mine, None).items.is_empty());
    }

    #[test]
    fn malformed_ids_fail_without_touching_storage() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = scratch_session(&dir);
        let response = session.remix("not-a-uuid");
        assert!(!response.ok);
        assert!(response.message.contains("invalid creation id"));
    }
}
