//! Render-facing projection of the atom state.
//!
//! The viewport reads counts, flags and layout from here; it never writes
//! back to the engine.

use crate::model::atom::{AtomState, VizMode};
use serde::Serialize;

/// Shell capacities used for visual balance, innermost first.
pub const SHELL_CAPACITIES: [u32; 7] = [2, 8, 8, 18, 18, 32, 32];

const MIN_NUCLEUS_RADIUS: f64 = 0.2;
const SHELL_GAP: f64 = 1.5;

const PROTON_COLOR: &str = "#FF0066";
const ANTIPROTON_COLOR: &str = "#00FFFF";
const NEUTRON_COLOR: &str = "#9F00FF";
const ANTINEUTRON_COLOR: &str = "#AA00FF";
const ELECTRON_COLOR: &str = "#00FFFF";
const POSITRON_COLOR: &str = "#FF0066";

/// Particle names shown on sliders and legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParticleLabels {
    pub proton: &'static str,
    pub neutron: &'static str,
    pub electron: &'static str,
}

impl ParticleLabels {
    pub fn for_antimatter(is_antimatter: bool) -> Self {
        if is_antimatter {
            Self {
                proton: "Anti-Protons",
                neutron: "Anti-Neutrons",
                electron: "Positrons",
            }
        } else {
            Self {
                proton: "Protons",
                neutron: "Neutrons",
                electron: "Electrons",
            }
        }
    }
}

/// One electron shell ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellLayout {
    pub radius: f64,
    pub electrons: u32,
}

/// Everything the viewport needs to compose a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub protons: u32,
    pub neutrons: u32,
    pub nucleus_radius: f64,
    pub shells: Vec<ShellLayout>,
    pub proton_color: &'static str,
    pub neutron_color: &'static str,
    pub electron_color: &'static str,
    pub labels: ParticleLabels,
    pub viz_mode: VizMode,
    /// Shell rings are drawn in Bohr mode only.
    pub show_orbits: bool,
}

/// Distributes electrons over `SHELL_CAPACITIES`.
///
/// Electrons left after the last capacity are added to the last shell.
pub fn electron_shells(electrons: u32) -> Vec<u32> {
    let mut shells = Vec::new();
    let mut remaining = electrons;

    for capacity in SHELL_CAPACITIES {
        if remaining == 0 {
            break;
        }
        let in_shell = remaining.min(capacity);
        shells.push(in_shell);
        remaining -= in_shell;
    }

    if remaining > 0 {
        if let Some(last) = shells.last_mut() {
            *last += remaining;
        }
    }

    shells
}

/// Nucleus radius grows slowly with nucleon count.
pub fn nucleus_radius(protons: u32, neutrons: u32) -> f64 {
    let nucleons = f64::from(protons) + f64::from(neutrons);
    (1.0 + (nucleons - 1.0) * 0.02).max(MIN_NUCLEUS_RADIUS)
}

/// Builds the scene description for `state`.
pub fn compose_scene(state: &AtomState) -> SceneLayout {
    let radius = nucleus_radius(state.protons, state.neutrons);
    let shells = electron_shells(state.electrons)
        .into_iter()
        .enumerate()
        .map(|(index, electrons)| ShellLayout {
            radius: radius + SHELL_GAP + index as f64 * SHELL_GAP,
            electrons,
        })
        .collect();

    let (proton_color, neutron_color, electron_color) = if state.is_antimatter {
        (ANTIPROTON_COLOR, ANTINEUTRON_COLOR, POSITRON_COLOR)
    } else {
        (PROTON_COLOR, NEUTRON_COLOR, ELECTRON_COLOR)
    };

    SceneLayout {
        protons: state.protons,
        neutrons: state.neutrons,
        nucleus_radius: radius,
        shells,
        proton_color,
        neutron_color,
        electron_color,
        labels: ParticleLabels::for_antimatter(state.is_antimatter),
        viz_mode: state.viz_mode,
        show_orbits: state.viz_mode == VizMode::Bohr,
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_scene, electron_shells, nucleus_radius};
    use crate::model::atom::{AtomState, VizMode};

    #[test]
    fn shells_fill_in_order() {
        assert_eq!(electron_shells(0), Vec::<u32>::new());
        assert_eq!(electron_shells(1), vec![1]);
        assert_eq!(electron_shells(11), vec![2, 8, 1]);
        assert_eq!(electron_shells(118), vec![2, 8, 8, 18, 18, 32, 32]);
    }

    #[test]
    fn overflow_lands_in_last_shell() {
        assert_eq!(electron_shells(150), vec![2, 8, 8, 18, 18, 32, 64]);
    }

    #[test]
    fn nucleus_radius_has_floor_and_growth() {
        assert!((nucleus_radius(1, 0) - 1.0).abs() < 1e-9);
        assert!((nucleus_radius(6, 6) - 1.22).abs() < 1e-9);
    }

    #[test]
    fn antimatter_swaps_colors_and_labels() {
        let state = AtomState {
            is_antimatter: true,
            viz_mode: VizMode::Cloud,
            ..AtomState::default()
        };
        let scene = compose_scene(&state);
        assert_eq!(scene.proton_color, "#00FFFF");
        assert_eq!(scene.electron_color, "#FF0066");
        assert_eq!(scene.labels.electron, "Positrons");
        assert!(!scene.show_orbits);
        assert_eq!(scene.shells.len(), 1);
        assert!((scene.shells[0].radius - 2.5).abs() < 1e-9);
    }
}
