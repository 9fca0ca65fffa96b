//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `atom_builder_core` linkage.
//! - Print derived info for an optional share-link query, e.g.
//!   `atom_builder "p=6&n=8"`.

use atom_builder_core::{compose_scene, AppConfig, AtomStateEngine};

fn main() {
    println!("atom_builder_core ping={}", atom_builder_core::ping());
    println!("atom_builder_core version={}", atom_builder_core::core_version());

    let config = match std::env::var("ATOM_BUILDER_CONFIG") {
        Ok(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("config error: {err}");
                std::process::exit(2);
            }
        },
        Err(_) => AppConfig::default(),
    };

    let query = std::env::args().nth(1).unwrap_or_default();
    let engine = AtomStateEngine::from_share_query(&query, config.limits);
    let state = engine.state();
    let info = engine.derived();
    let shells = compose_scene(state)
        .shells
        .iter()
        .map(|shell| shell.electrons.to_string())
        .collect::<Vec<_>>()
        .join(",");

    println!(
        "atom p={} n={} e={} symbol={} name={} mass={} charge={} ({})",
        state.protons,
        state.neutrons,
        state.electrons,
        info.symbol,
        info.name,
        info.mass,
        info.charge_label(),
        info.ion_kind()
    );
    println!(
        "stability={} reason=\"{}\" predicted={} shells=[{shells}] share={}",
        info.stability.status,
        info.stability.reason,
        info.predicted,
        engine.share_query()
    );
}
