//! Derived atom information.
//!
//! # Responsibility
//! - Compute identity, mass, charge and stability from an `AtomState`.
//!
//! # Invariants
//! - `derive` is a pure function; no result is cached or stored.
//! - `mass` is the table's standard atomic weight as published, never the
//!   mass number `protons + neutrons`.

use crate::model::atom::AtomState;
use crate::model::element::{
    element_by_protons, parse_table_mass, systematic_element, ElementGroup,
};
use crate::model::stability::{classify_stability, Stability};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Table mass of the current element, or unknown for synthesized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomicMass {
    /// Published notation, e.g. `"12.011"` or `"(98)"`.
    Tabulated(&'static str),
    /// Rendered as `?`.
    Unknown,
}

impl AtomicMass {
    /// Numeric value with parenthesis markers stripped.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Tabulated(raw) => parse_table_mass(raw),
            Self::Unknown => None,
        }
    }
}

impl Display for AtomicMass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tabulated(raw) => f.write_str(raw),
            Self::Unknown => f.write_str("?"),
        }
    }
}

impl Serialize for AtomicMass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything the UI shows about the current atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedInfo {
    pub symbol: String,
    pub name: String,
    pub mass: AtomicMass,
    pub group: ElementGroup,
    pub charge: i32,
    pub stability: Stability,
    /// `true` when the identity was synthesized beyond the table.
    pub predicted: bool,
}

impl DerivedInfo {
    /// Charge formatted with an explicit sign, e.g. `+1`, `0`, `-2`.
    pub fn charge_label(&self) -> String {
        if self.charge > 0 {
            format!("+{}", self.charge)
        } else {
            self.charge.to_string()
        }
    }

    /// Ion kind for the charge sign.
    pub fn ion_kind(&self) -> &'static str {
        match self.charge {
            0 => "Neutral",
            c if c > 0 => "Cation",
            _ => "Anion",
        }
    }
}

/// Signed charge; the sign convention flips in antimatter mode.
pub fn charge_of(state: &AtomState) -> i32 {
    let protons = i64::from(state.protons);
    let electrons = i64::from(state.electrons);
    let charge = if state.is_antimatter {
        electrons - protons
    } else {
        protons - electrons
    };
    // Both counts are bounded by `u32` limits far below `i32::MAX`.
    charge.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Computes the derived view of `state`.
pub fn derive(state: &AtomState) -> DerivedInfo {
    let charge = charge_of(state);
    let stability = classify_stability(state.protons, state.neutrons);

    match element_by_protons(state.protons) {
        Some(element) => DerivedInfo {
            symbol: element.symbol.to_string(),
            name: element.name.to_string(),
            mass: AtomicMass::Tabulated(element.mass),
            group: element.group,
            charge,
            stability,
            predicted: false,
        },
        None => {
            let synthesized = systematic_element(state.protons);
            DerivedInfo {
                symbol: synthesized.symbol,
                name: synthesized.name,
                mass: AtomicMass::Unknown,
                group: ElementGroup::Unknown,
                charge,
                stability,
                predicted: true,
            }
        }
    }
}
