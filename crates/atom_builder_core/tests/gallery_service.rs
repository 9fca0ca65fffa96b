use atom_builder_core::db::open_db_in_memory;
use atom_builder_core::service::gallery_service::SIGN_IN_REQUIRED_MESSAGE;
use atom_builder_core::{
    share_link, AtomStateEngine, AuthSession, CreationListQuery, CreationRepository,
    GalleryError, GalleryService, ParticleCounts, SaveOutcome, SaveRequest,
    SqliteCreationRepository, StabilityStatus,
};

fn fixed_clock() -> i64 {
    1_700_000_000_000
}

fn saved_id(outcome: SaveOutcome) -> uuid::Uuid {
    match outcome {
        SaveOutcome::Saved(id) => id,
        SaveOutcome::SignInRequired => panic!("expected a saved creation"),
    }
}

#[test]
fn signed_out_save_is_a_notice_and_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = GalleryService::new(SqliteCreationRepository::new(&conn));
    let engine = AtomStateEngine::default();

    let outcome = service
        .save_current(&AuthSession::new(), &engine, &SaveRequest::default())
        .unwrap();
    assert_eq!(outcome, SaveOutcome::SignInRequired);
    assert_eq!(outcome.notice(), Some(SIGN_IN_REQUIRED_MESSAGE));

    let mut guest = AuthSession::new();
    guest.sign_in_anonymously();
    let outcome = service
        .save_current(&guest, &engine, &SaveRequest::default())
        .unwrap();
    assert_eq!(outcome, SaveOutcome::SignInRequired);

    let all = SqliteCreationRepository::new(&conn)
        .list_creations(&CreationListQuery::default())
        .unwrap();
    assert!(all.is_empty());
}

#[test]
fn save_snapshots_engine_state_and_derived_labels() {
    let conn = open_db_in_memory().unwrap();
    let service = GalleryService::with_clock(SqliteCreationRepository::new(&conn), fixed_clock);
    let mut session = AuthSession::new();
    session.sign_in("Ada");

    let mut engine = AtomStateEngine::default();
    engine.toggle_stable_mode();
    engine.set_protons(6);
    engine.set_is_antimatter(true);

    let request = SaveRequest {
        name: "  anti   carbon ".to_string(),
        is_public: true,
    };
    let id = saved_id(service.save_current(&session, &engine, &request).unwrap());

    let saved = service.get(id).unwrap();
    assert_eq!(saved.name, "anti carbon");
    assert_eq!(saved.user_name, "Ada");
    assert_eq!(saved.counts(), ParticleCounts::new(6, 6, 6));
    assert!(saved.is_antimatter);
    assert!(saved.is_public);
    assert_eq!(saved.stability, StabilityStatus::Stable);
    assert!(!saved.predicted);
    assert_eq!(saved.published_at, fixed_clock());
}

#[test]
fn blank_name_falls_back_to_element_name() {
    let conn = open_db_in_memory().unwrap();
    let service = GalleryService::new(SqliteCreationRepository::new(&conn));
    let mut session = AuthSession::new();
    session.sign_in("Ada");

    let mut engine = AtomStateEngine::default();
    engine.load_preset(ParticleCounts::new(119, 179, 119), false);

    let request = SaveRequest {
        name: " \t ".to_string(),
        is_public: false,
    };
    let id = saved_id(service.save_current(&session, &engine, &request).unwrap());

    let saved = service.get(id).unwrap();
    assert_eq!(saved.name, "ununennium");
    assert_eq!(saved.stability, StabilityStatus::Predicted);
    assert!(saved.predicted);
}

#[test]
fn listings_follow_ownership_and_visibility() {
    let conn = open_db_in_memory().unwrap();
    let service = GalleryService::new(SqliteCreationRepository::new(&conn));
    let engine = AtomStateEngine::default();

    let mut ada = AuthSession::new();
    ada.sign_in("Ada");
    let mut bo = AuthSession::new();
    bo.sign_in("Bo");

    let public = SaveRequest {
        name: "shared".to_string(),
        is_public: true,
    };
    let private = SaveRequest {
        name: "secret".to_string(),
        is_public: false,
    };
    service.save_current(&ada, &engine, &private).unwrap();
    service.save_current(&bo, &engine, &public).unwrap();

    let ada_mine = service.list_mine(&ada, None).unwrap();
    assert_eq!(ada_mine.len(), 1);
    assert_eq!(ada_mine[0].name, "secret");

    let gallery = service.list_public(Some(10)).unwrap();
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].user_name, "Bo");

    assert!(service.list_mine(&AuthSession::new(), None).unwrap().is_empty());
}

#[test]
fn remix_loads_preset_and_share_link_matches() {
    let conn = open_db_in_memory().unwrap();
    let service = GalleryService::new(SqliteCreationRepository::new(&conn));
    let mut session = AuthSession::new();
    session.sign_in("Ada");

    let mut source = AtomStateEngine::default();
    source.load_preset(ParticleCounts::new(26, 30, 23), true);
    let id = saved_id(
        service
            .save_current(&session, &source, &SaveRequest::default())
            .unwrap(),
    );

    let mut target = AtomStateEngine::default();
    target.toggle_stable_mode();
    let creation = service.remix(id, &mut target).unwrap();

    assert_eq!(target.state().counts(), ParticleCounts::new(26, 30, 23));
    assert!(target.state().is_antimatter);
    assert!(!target.state().is_stable_mode);
    assert_eq!(share_link(&creation), "p=26&n=30&e=23");
}

#[test]
fn remix_of_unknown_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = GalleryService::new(SqliteCreationRepository::new(&conn));
    let mut engine = AtomStateEngine::default();

    let missing = uuid::Uuid::new_v4();
    let err = service.remix(missing, &mut engine).unwrap_err();
    assert!(matches!(err, GalleryError::NotFound(id) if id == missing));
    assert_eq!(engine.state().counts(), ParticleCounts::hydrogen());
}

#[test]
fn only_owner_can_delete() {
    let conn = open_db_in_memory().unwrap();
    let service = GalleryService::new(SqliteCreationRepository::new(&conn));
    let engine = AtomStateEngine::default();

    let mut ada = AuthSession::new();
    ada.sign_in("Ada");
    let mut bo = AuthSession::new();
    bo.sign_in("Bo");

    let id = saved_id(
        service
            .save_current(&ada, &engine, &SaveRequest::default())
            .unwrap(),
    );

    let err = service.delete_mine(&bo, id).unwrap_err();
    assert!(matches!(err, GalleryError::NotOwner(_)));

    service.delete_mine(&ada, id).unwrap();
    assert!(matches!(service.get(id), Err(GalleryError::NotFound(_))));
}
