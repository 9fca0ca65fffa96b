use atom_builder_core::{
    derive, AtomStateEngine, ParticleCounts, ParticleLimits, StabilityStatus, VizMode,
};

fn counts(engine: &AtomStateEngine) -> ParticleCounts {
    engine.state().counts()
}

#[test]
fn new_engine_holds_hydrogen() {
    let engine = AtomStateEngine::default();
    assert_eq!(counts(&engine), ParticleCounts::new(1, 0, 1));
    assert!(!engine.state().is_antimatter);
    assert!(!engine.state().is_stable_mode);
    assert_eq!(engine.state().viz_mode, VizMode::Bohr);
    assert_eq!(engine.derived().symbol, "H");
}

#[test]
fn out_of_range_input_is_clamped() {
    let mut engine = AtomStateEngine::default();

    engine.set_protons(10_000);
    assert_eq!(engine.state().protons, 150);
    engine.set_protons(-5);
    assert_eq!(engine.state().protons, 1);

    engine.set_neutrons(i64::MAX);
    assert_eq!(engine.state().neutrons, 250);
    engine.set_neutrons(-1);
    assert_eq!(engine.state().neutrons, 0);

    engine.set_electrons(9_999);
    assert_eq!(engine.state().electrons, 150);
    engine.set_electrons(i64::MIN);
    assert_eq!(engine.state().electrons, 0);
}

#[test]
fn custom_limits_bound_the_engine() {
    let limits = ParticleLimits {
        max_protons: 118,
        max_neutrons: 200,
        max_electrons: 118,
    };
    let mut engine = AtomStateEngine::new(limits);
    engine.set_protons(150);
    assert_eq!(engine.state().protons, 118);
}

#[test]
fn stable_mode_snaps_immediately() {
    let mut engine = AtomStateEngine::default();
    engine.set_protons(6);
    engine.set_electrons(2);
    engine.toggle_stable_mode();

    assert!(engine.state().is_stable_mode);
    assert_eq!(counts(&engine), ParticleCounts::new(6, 6, 6));
    assert_eq!(engine.derived().stability.status, StabilityStatus::Stable);
}

#[test]
fn stable_mode_follows_proton_changes() {
    let mut engine = AtomStateEngine::default();
    engine.toggle_stable_mode();
    engine.set_protons(26);
    assert_eq!(counts(&engine), ParticleCounts::new(26, 39, 26));

    engine.toggle_stable_mode();
    assert!(!engine.state().is_stable_mode);
    engine.set_protons(27);
    assert_eq!(engine.state().neutrons, 39);
}

#[test]
fn manual_neutron_edit_leaves_stable_mode() {
    let mut engine = AtomStateEngine::default();
    engine.toggle_stable_mode();
    engine.set_protons(8);
    engine.set_neutrons(10);

    assert!(!engine.state().is_stable_mode);
    assert_eq!(engine.state().neutrons, 10);

    engine.set_protons(9);
    assert_eq!(engine.state().neutrons, 10);
}

#[test]
fn electrons_are_free_in_stable_mode() {
    let mut engine = AtomStateEngine::default();
    engine.toggle_stable_mode();
    engine.set_protons(11);
    engine.set_electrons(10);

    assert!(engine.state().is_stable_mode);
    assert_eq!(engine.state().electrons, 10);
    assert_eq!(engine.derived().charge_label(), "+1");
}

#[test]
fn reset_restores_hydrogen_and_default_flags() {
    let mut engine = AtomStateEngine::default();
    engine.set_protons(92);
    engine.set_neutrons(146);
    engine.set_is_antimatter(true);
    engine.set_viz_mode(VizMode::Cloud);
    engine.toggle_stable_mode();

    engine.reset_atom();

    assert_eq!(counts(&engine), ParticleCounts::new(1, 0, 1));
    assert!(!engine.state().is_antimatter);
    assert!(!engine.state().is_stable_mode);
    assert_eq!(engine.state().viz_mode, VizMode::Bohr);
}

#[test]
fn antimatter_inverts_charge_sign_only() {
    let mut engine = AtomStateEngine::default();
    engine.set_electrons(0);
    assert_eq!(engine.derived().charge, 1);

    engine.set_is_antimatter(true);
    assert_eq!(engine.derived().charge, -1);
    assert_eq!(counts(&engine), ParticleCounts::new(1, 0, 0));
}

#[test]
fn load_preset_round_trips_and_clears_stable_mode() {
    let mut engine = AtomStateEngine::default();
    engine.toggle_stable_mode();

    let preset = ParticleCounts::new(8, 7, 10);
    engine.load_preset(preset, true);

    assert_eq!(counts(&engine), preset);
    assert!(engine.state().is_antimatter);
    assert!(!engine.state().is_stable_mode);
}

#[test]
fn load_preset_clamps_but_does_not_snap() {
    let mut engine = AtomStateEngine::default();
    engine.load_preset(ParticleCounts::new(500, 3, 0), false);
    assert_eq!(counts(&engine), ParticleCounts::new(150, 3, 0));
}

#[test]
fn share_query_seeds_and_falls_back() {
    let limits = ParticleLimits::default();

    let seeded = AtomStateEngine::from_share_query("?p=6&e=4", limits);
    assert_eq!(counts(&seeded), ParticleCounts::new(6, 6, 4));

    let fallback = AtomStateEngine::from_share_query("?p=carbon", limits);
    assert_eq!(counts(&fallback), ParticleCounts::hydrogen());
}

#[test]
fn share_query_with_blank_values_seeds_defaults() {
    let engine = AtomStateEngine::from_share_query("?p=6&n=&e=", ParticleLimits::default());
    assert_eq!(counts(&engine), ParticleCounts::new(6, 6, 6));
}

#[test]
fn derived_info_matches_pure_projection() {
    let mut engine = AtomStateEngine::default();
    engine.set_protons(17);
    engine.set_neutrons(18);
    engine.set_electrons(18);

    let info = engine.derived();
    assert_eq!(info, derive(engine.state()));
    assert_eq!(info.symbol, "Cl");
    assert_eq!(info.ion_kind(), "Anion");
}
