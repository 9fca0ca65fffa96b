//! Atom state domain model.
//!
//! # Responsibility
//! - Define the mutable state owned by the builder engine.
//! - Define the particle-count triple exchanged with presets, share links
//!   and saved creations.
//! - Provide bound clamping used by every engine mutator.
//!
//! # Invariants
//! - `protons >= MIN_PROTONS`; no nucleus-less state is representable
//!   through the engine.
//! - Counts never exceed the configured `ParticleLimits`.

use serde::{Deserialize, Serialize};

/// Lowest accepted proton count.
pub const MIN_PROTONS: u32 = 1;
/// Default proton ceiling; allows systematic names up to `150`.
pub const DEFAULT_MAX_PROTONS: u32 = 150;
/// Default neutron ceiling.
pub const DEFAULT_MAX_NEUTRONS: u32 = 250;
/// Default electron ceiling.
pub const DEFAULT_MAX_ELECTRONS: u32 = 150;

/// Display preference forwarded unchanged to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VizMode {
    /// Planetary orbits with visible shell rings.
    #[default]
    Bohr,
    /// Probability-cloud rendering without shell rings.
    Cloud,
}

impl VizMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bohr => "bohr",
            Self::Cloud => "cloud",
        }
    }

    /// Parses the lowercase wire value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bohr" => Some(Self::Bohr),
            "cloud" => Some(Self::Cloud),
            _ => None,
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Bohr => Self::Cloud,
            Self::Cloud => Self::Bohr,
        }
    }
}

/// Inclusive upper bounds for particle counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleLimits {
    pub max_protons: u32,
    pub max_neutrons: u32,
    pub max_electrons: u32,
}

impl Default for ParticleLimits {
    fn default() -> Self {
        Self {
            max_protons: DEFAULT_MAX_PROTONS,
            max_neutrons: DEFAULT_MAX_NEUTRONS,
            max_electrons: DEFAULT_MAX_ELECTRONS,
        }
    }
}

impl ParticleLimits {
    pub fn clamp_protons(&self, value: i64) -> u32 {
        clamp_count(value, i64::from(MIN_PROTONS), self.max_protons)
    }

    pub fn clamp_neutrons(&self, value: i64) -> u32 {
        clamp_count(value, 0, self.max_neutrons)
    }

    pub fn clamp_electrons(&self, value: i64) -> u32 {
        clamp_count(value, 0, self.max_electrons)
    }

    /// Clamps every field of `counts` into bounds.
    pub fn clamp_counts(&self, counts: ParticleCounts) -> ParticleCounts {
        ParticleCounts {
            protons: self.clamp_protons(i64::from(counts.protons)),
            neutrons: self.clamp_neutrons(i64::from(counts.neutrons)),
            electrons: self.clamp_electrons(i64::from(counts.electrons)),
        }
    }
}

/// Proton/neutron/electron triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleCounts {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
}

impl ParticleCounts {
    pub fn new(protons: u32, neutrons: u32, electrons: u32) -> Self {
        Self {
            protons,
            neutrons,
            electrons,
        }
    }

    /// Hydrogen-1: one proton, no neutrons, one electron.
    pub fn hydrogen() -> Self {
        Self::new(1, 0, 1)
    }

    pub fn is_neutral(&self) -> bool {
        self.protons == self.electrons
    }
}

impl Default for ParticleCounts {
    fn default() -> Self {
        Self::hydrogen()
    }
}

/// Complete engine state. Derived info is never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomState {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub is_antimatter: bool,
    pub viz_mode: VizMode,
    pub is_stable_mode: bool,
}

impl AtomState {
    /// Particle-count triple of this state.
    pub fn counts(&self) -> ParticleCounts {
        ParticleCounts::new(self.protons, self.neutrons, self.electrons)
    }

    pub(crate) fn set_counts(&mut self, counts: ParticleCounts) {
        self.protons = counts.protons;
        self.neutrons = counts.neutrons;
        self.electrons = counts.electrons;
    }
}

impl Default for AtomState {
    fn default() -> Self {
        let hydrogen = ParticleCounts::hydrogen();
        Self {
            protons: hydrogen.protons,
            neutrons: hydrogen.neutrons,
            electrons: hydrogen.electrons,
            is_antimatter: false,
            viz_mode: VizMode::Bohr,
            is_stable_mode: false,
        }
    }
}

fn clamp_count(value: i64, min: i64, max: u32) -> u32 {
    let max = i64::from(max).max(min);
    // Bounded by `max`, which came from a `u32`.
    value.clamp(min, max) as u32
}

#[cfg(test)]
mod tests {
    use super::{AtomState, ParticleCounts, ParticleLimits, VizMode};

    #[test]
    fn default_state_is_neutral_hydrogen() {
        let state = AtomState::default();
        assert_eq!(state.counts(), ParticleCounts::hydrogen());
        assert!(!state.is_antimatter);
        assert!(!state.is_stable_mode);
        assert_eq!(state.viz_mode, VizMode::Bohr);
    }

    #[test]
    fn limits_clamp_both_ends() {
        let limits = ParticleLimits::default();
        assert_eq!(limits.clamp_protons(-5), 1);
        assert_eq!(limits.clamp_protons(0), 1);
        assert_eq!(limits.clamp_protons(999), 150);
        assert_eq!(limits.clamp_neutrons(-1), 0);
        assert_eq!(limits.clamp_neutrons(251), 250);
        assert_eq!(limits.clamp_electrons(151), 150);
    }

    #[test]
    fn viz_mode_wire_values() {
        assert_eq!(VizMode::parse("cloud"), Some(VizMode::Cloud));
        assert_eq!(VizMode::parse("Cloud"), None);
        assert_eq!(VizMode::Bohr.toggled(), VizMode::Cloud);
        assert_eq!(
            serde_json::to_value(VizMode::Cloud).expect("serialize"),
            "cloud"
        );
    }
}
