//! Atom builder state engine.
//!
//! # Responsibility
//! - Own the current `AtomState` for one UI session.
//! - Enforce bounds and stable-mode rules on every mutation.
//! - Expose derived info as a pure projection of the current state.
//!
//! # Invariants
//! - No mutator fails; out-of-range input is clamped.
//! - While `is_stable_mode` is on, `neutrons == stable_neutron_count(protons)`
//!   and `electrons == protons` (both clamped to limits).
//! - A manual neutron edit turns stable mode off and is applied.
//! - `load_preset` always turns stable mode off and never snaps counts.

use crate::model::atom::{AtomState, ParticleCounts, ParticleLimits, VizMode};
use crate::model::derived::{derive, DerivedInfo};
use crate::model::stability::stable_neutron_count;
use crate::share::{encode_share_query, seed_from_share_query};
use log::debug;

/// Session-scoped owner of the atom being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomStateEngine {
    state: AtomState,
    limits: ParticleLimits,
}

impl Default for AtomStateEngine {
    fn default() -> Self {
        Self::new(ParticleLimits::default())
    }
}

impl AtomStateEngine {
    /// Creates an engine holding default hydrogen.
    pub fn new(limits: ParticleLimits) -> Self {
        Self {
            state: AtomState::default(),
            limits,
        }
    }

    /// Creates an engine seeded from a share-link query.
    ///
    /// Malformed or empty queries leave the default hydrogen state.
    pub fn from_share_query(query: &str, limits: ParticleLimits) -> Self {
        let mut engine = Self::new(limits);
        if let Some(counts) = seed_from_share_query(query, &limits) {
            engine.state.set_counts(counts);
            debug!(
                "event=engine_seed module=engine status=ok protons={} neutrons={} electrons={}",
                counts.protons, counts.neutrons, counts.electrons
            );
        }
        engine
    }

    pub fn state(&self) -> &AtomState {
        &self.state
    }

    pub fn limits(&self) -> &ParticleLimits {
        &self.limits
    }

    /// Recomputes derived info for the current state.
    pub fn derived(&self) -> DerivedInfo {
        derive(&self.state)
    }

    /// Counts and antimatter flag as handed to persistence.
    pub fn snapshot(&self) -> (ParticleCounts, bool) {
        (self.state.counts(), self.state.is_antimatter)
    }

    /// Share-link query for the current counts.
    pub fn share_query(&self) -> String {
        encode_share_query(self.state.counts())
    }

    /// Sets the proton count.
    ///
    /// In stable mode neutrons and electrons snap to the new count. Outside
    /// stable mode electrons follow only when the atom was neutral.
    pub fn set_protons(&mut self, protons: i64) {
        let was_neutral = self.state.counts().is_neutral();
        self.state.protons = self.limits.clamp_protons(protons);

        if self.state.is_stable_mode {
            self.snap_to_stable();
        } else if was_neutral {
            self.state.electrons = self.limits.clamp_electrons(i64::from(self.state.protons));
        }

        debug!(
            "event=set_protons module=engine protons={} neutrons={} electrons={} stable_mode={}",
            self.state.protons,
            self.state.neutrons,
            self.state.electrons,
            self.state.is_stable_mode
        );
    }

    /// Sets the neutron count; a manual edit leaves stable mode.
    pub fn set_neutrons(&mut self, neutrons: i64) {
        if self.state.is_stable_mode {
            self.state.is_stable_mode = false;
            debug!("event=stable_mode_exit module=engine reason=manual_neutrons");
        }
        self.state.neutrons = self.limits.clamp_neutrons(neutrons);
        debug!(
            "event=set_neutrons module=engine neutrons={}",
            self.state.neutrons
        );
    }

    pub fn set_electrons(&mut self, electrons: i64) {
        self.state.electrons = self.limits.clamp_electrons(electrons);
        debug!(
            "event=set_electrons module=engine electrons={}",
            self.state.electrons
        );
    }

    pub fn set_is_antimatter(&mut self, is_antimatter: bool) {
        self.state.is_antimatter = is_antimatter;
        debug!("event=set_antimatter module=engine value={is_antimatter}");
    }

    pub fn toggle_antimatter(&mut self) {
        self.set_is_antimatter(!self.state.is_antimatter);
    }

    pub fn set_viz_mode(&mut self, mode: VizMode) {
        self.state.viz_mode = mode;
        debug!("event=set_viz_mode module=engine value={}", mode.as_str());
    }

    pub fn toggle_viz_mode(&mut self) {
        self.set_viz_mode(self.state.viz_mode.toggled());
    }

    /// Flips stable mode; turning it on snaps counts immediately.
    pub fn toggle_stable_mode(&mut self) {
        self.state.is_stable_mode = !self.state.is_stable_mode;
        if self.state.is_stable_mode {
            self.snap_to_stable();
        }
        debug!(
            "event=toggle_stable_mode module=engine value={} neutrons={} electrons={}",
            self.state.is_stable_mode, self.state.neutrons, self.state.electrons
        );
    }

    /// Restores default hydrogen and clears every flag, `viz_mode` included.
    pub fn reset_atom(&mut self) {
        self.state = AtomState::default();
        debug!("event=reset_atom module=engine status=ok");
    }

    /// Replaces counts from an external preset.
    ///
    /// Counts are clamped to limits but otherwise taken as given.
    pub fn load_preset(&mut self, config: ParticleCounts, is_antimatter: bool) {
        self.state.set_counts(self.limits.clamp_counts(config));
        self.state.is_antimatter = is_antimatter;
        self.state.is_stable_mode = false;
        debug!(
            "event=load_preset module=engine protons={} neutrons={} electrons={} antimatter={}",
            self.state.protons, self.state.neutrons, self.state.electrons, is_antimatter
        );
    }

    fn snap_to_stable(&mut self) {
        let protons = self.state.protons;
        self.state.neutrons = self
            .limits
            .clamp_neutrons(i64::from(stable_neutron_count(protons)));
        self.state.electrons = self.limits.clamp_electrons(i64::from(protons));
    }
}
