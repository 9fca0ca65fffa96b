//! Band-of-stability heuristics.
//!
//! # Responsibility
//! - Predict a plausible neutron count for a proton count.
//! - Classify a proton/neutron pair into a qualitative stability label.
//!
//! # Invariants
//! - Both functions are deterministic and total over `u32` inputs.
//! - The piecewise rules are a teaching heuristic and are kept verbatim;
//!   they are not nuclear physics.

use crate::model::element::{element_by_protons, KNOWN_ELEMENT_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Last proton count with at least one stable isotope (lead).
pub const LAST_STABLE_PROTONS: u32 = 82;

const LIGHT_ELEMENT_LIMIT: u32 = 20;

/// Qualitative stability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StabilityStatus {
    Stable,
    Unstable,
    Radioactive,
    Predicted,
    /// Only produced when reading legacy records without a label.
    Unknown,
}

impl StabilityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Unstable => "Unstable",
            Self::Radioactive => "Radioactive",
            Self::Predicted => "Predicted",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses the persisted label; returns `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Stable" => Some(Self::Stable),
            "Unstable" => Some(Self::Unstable),
            "Radioactive" => Some(Self::Radioactive),
            "Predicted" => Some(Self::Predicted),
            "Unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl Display for StabilityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stability label with a short human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stability {
    pub status: StabilityStatus,
    pub reason: String,
}

impl Stability {
    fn new(status: StabilityStatus, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

/// Predicts the "most stable" neutron count for `protons`.
///
/// - `1` → `0` (protium), `2` → `2` (helium-4).
/// - up to 20: rounded table mass minus `protons` (fallback `protons`).
/// - up to 82: `round(z × (1.25 + z / 100))`.
/// - above 82: rounded table mass (parentheses stripped) minus `protons`,
///   falling back to `round(z × 1.5)` beyond the table.
pub fn stable_neutron_count(protons: u32) -> u32 {
    match protons {
        1 => 0,
        2 => 2,
        z if z <= LIGHT_ELEMENT_LIMIT => mass_based_neutrons(z).unwrap_or(z),
        z if z <= LAST_STABLE_PROTONS => {
            let z = f64::from(z);
            round_to_u32(z * (1.25 + z / 100.0))
        }
        z => mass_based_neutrons(z).unwrap_or_else(|| round_to_u32(f64::from(z) * 1.5)),
    }
}

/// Classifies a nucleus against the heuristic band of stability.
pub fn classify_stability(protons: u32, neutrons: u32) -> Stability {
    if protons > KNOWN_ELEMENT_COUNT {
        return Stability::new(
            StabilityStatus::Predicted,
            "hypothetical element beyond known table",
        );
    }
    if protons > LAST_STABLE_PROTONS {
        return Stability::new(
            StabilityStatus::Radioactive,
            "all Z>82 elements are radioactive",
        );
    }

    let target = i64::from(stable_neutron_count(protons));
    let tolerance = if protons <= LIGHT_ELEMENT_LIMIT {
        1
    } else {
        (f64::from(protons) * 0.05).round() as i64
    };
    let neutrons_signed = i64::from(neutrons);

    if (neutrons_signed - target).abs() <= tolerance {
        let ratio = if protons == 0 {
            0.0
        } else {
            f64::from(neutrons) / f64::from(protons)
        };
        Stability::new(
            StabilityStatus::Stable,
            format!("N/Z ratio ({ratio:.2}) is within the band of stability"),
        )
    } else if neutrons_signed < target {
        Stability::new(
            StabilityStatus::Unstable,
            "neutron-deficient, positron emission/electron capture likely",
        )
    } else {
        Stability::new(
            StabilityStatus::Unstable,
            "neutron-rich, beta emission likely",
        )
    }
}

fn mass_based_neutrons(protons: u32) -> Option<u32> {
    let mass = element_by_protons(protons)?.mass_value()?;
    let rounded = mass.round() as i64 - i64::from(protons);
    u32::try_from(rounded.max(0)).ok()
}

fn round_to_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
