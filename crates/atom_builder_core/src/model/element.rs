//! Periodic table data and systematic naming for undiscovered elements.
//!
//! # Responsibility
//! - Hold the static 118-entry element table.
//! - Synthesize IUPAC-style placeholder identities beyond the table.
//!
//! # Invariants
//! - `ELEMENTS[z - 1].atomic_number == z` for every entry.
//! - Systematic names are a pure function of the decimal digits of `z`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Highest atomic number present in the static table.
pub const KNOWN_ELEMENT_COUNT: u32 = 118;

const SYSTEMATIC_ROOTS: [&str; 10] = [
    "nil", "un", "bi", "tri", "quad", "pent", "hex", "sept", "oct", "enn",
];

/// Chemical category shown next to the element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementGroup {
    AlkaliMetal,
    AlkalineEarthMetal,
    Lanthanide,
    Actinide,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    /// Used for synthesized elements beyond the table.
    Unknown,
}

impl ElementGroup {
    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "Alkali Metal",
            Self::AlkalineEarthMetal => "Alkaline Earth Metal",
            Self::Lanthanide => "Lanthanide",
            Self::Actinide => "Actinide",
            Self::TransitionMetal => "Transition Metal",
            Self::PostTransitionMetal => "Post-transition Metal",
            Self::Metalloid => "Metalloid",
            Self::Nonmetal => "Nonmetal",
            Self::Halogen => "Halogen",
            Self::NobleGas => "Noble Gas",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for ElementGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the periodic table.
///
/// `mass` keeps the published notation: a standard atomic weight such as
/// `"12.011"`, or a parenthesised mass number such as `"(98)"` for elements
/// without a standard weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub mass: &'static str,
    /// Neutrons of the common isotope the table tile opens with.
    pub neutrons: u32,
    pub group: ElementGroup,
}

impl Element {
    /// Numeric mass with any parenthesis markers stripped.
    pub fn mass_value(&self) -> Option<f64> {
        parse_table_mass(self.mass)
    }

    /// Whether the table lists a mass number instead of a standard weight.
    pub fn has_estimated_mass(&self) -> bool {
        self.mass.starts_with('(')
    }
}

/// Placeholder identity synthesized for `z > 118`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystematicElement {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
}

static ELEMENTS: [Element; KNOWN_ELEMENT_COUNT as usize] = [
    Element { atomic_number: 1, symbol: "H", name: "Hydrogen", mass: "1.008", neutrons: 0, group: ElementGroup::Nonmetal },
    Element { atomic_number: 2, symbol: "He", name: "Helium", mass: "4.0026", neutrons: 2, group: ElementGroup::NobleGas },
    Element { atomic_number: 3, symbol: "Li", name: "Lithium", mass: "6.94", neutrons: 4, group: ElementGroup::AlkaliMetal },
    Element { atomic_number: 4, symbol: "Be", name: "Beryllium", mass: "9.0122", neutrons: 5, group: ElementGroup::AlkalineEarthMetal },
    Element { atomic_number: 5, symbol: "B", name: "Boron", mass: "10.81", neutrons: 6, group: ElementGroup::Metalloid },
    Element { atomic_number: 6, symbol: "C", name: "Carbon", mass: "12.011", neutrons: 6, group: ElementGroup::Nonmetal },
    Element { atomic_number: 7, symbol: "N", name: "Nitrogen", mass: "14.007", neutrons: 7, group: ElementGroup::Nonmetal },
    Element { atomic_number: 8, symbol: "O", name: "Oxygen", mass: "15.999", neutrons: 8, group: ElementGroup::Nonmetal },
    Element { atomic_number: 9, symbol: "F", name: "Fluorine", mass: "18.998", neutrons: 10, group: ElementGroup::Halogen },
    Element { atomic_number: 10, symbol: "Ne", name: "Neon", mass: "20.180", neutrons: 10, group: ElementGroup::NobleGas },
    Element { atomic_number: 11, symbol: "Na", name: "Sodium", mass: "22.990", neutrons: 12, group: ElementGroup::AlkaliMetal },
    Element { atomic_number: 12, symbol: "Mg", name: "Magnesium", mass: "24.305", neutrons: 12, group: ElementGroup::AlkalineEarthMetal },
    Element { atomic_number: 13, symbol: "Al", name: "Aluminum", mass: "26.982", neutrons: 14, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 14, symbol: "Si", name: "Silicon", mass: "28.085", neutrons: 14, group: ElementGroup::Metalloid },
    Element { atomic_number: 15, symbol: "P", name: "Phosphorus", mass: "30.974", neutrons: 16, group: ElementGroup::Nonmetal },
    Element { atomic_number: 16, symbol: "S", name: "Sulfur", mass: "32.06", neutrons: 16, group: ElementGroup::Nonmetal },
    Element { atomic_number: 17, symbol: "Cl", name: "Chlorine", mass: "35.45", neutrons: 18, group: ElementGroup::Halogen },
    Element { atomic_number: 18, symbol: "Ar", name: "Argon", mass: "39.948", neutrons: 22, group: ElementGroup::NobleGas },
    Element { atomic_number: 19, symbol: "K", name: "Potassium", mass: "39.098", neutrons: 20, group: ElementGroup::AlkaliMetal },
    Element { atomic_number: 20, symbol: "Ca", name: "Calcium", mass: "40.078", neutrons: 20, group: ElementGroup::AlkalineEarthMetal },
    Element { atomic_number: 21, symbol: "Sc", name: "Scandium", mass: "44.956", neutrons: 24, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 22, symbol: "Ti", name: "Titanium", mass: "47.867", neutrons: 26, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 23, symbol: "V", name: "Vanadium", mass: "50.942", neutrons: 28, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 24, symbol: "Cr", name: "Chromium", mass: "51.996", neutrons: 28, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 25, symbol: "Mn", name: "Manganese", mass: "54.938", neutrons: 30, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 26, symbol: "Fe", name: "Iron", mass: "55.845", neutrons: 30, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 27, symbol: "Co", name: "Cobalt", mass: "58.933", neutrons: 32, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 28, symbol: "Ni", name: "Nickel", mass: "58.693", neutrons: 31, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 29, symbol: "Cu", name: "Copper", mass: "63.546", neutrons: 35, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 30, symbol: "Zn", name: "Zinc", mass: "65.38", neutrons: 35, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 31, symbol: "Ga", name: "Gallium", mass: "69.723", neutrons: 39, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 32, symbol: "Ge", name: "Germanium", mass: "72.630", neutrons: 41, group: ElementGroup::Metalloid },
    Element { atomic_number: 33, symbol: "As", name: "Arsenic", mass: "74.922", neutrons: 42, group: ElementGroup::Metalloid },
    Element { atomic_number: 34, symbol: "Se", name: "Selenium", mass: "78.971", neutrons: 45, group: ElementGroup::Nonmetal },
    Element { atomic_number: 35, symbol: "Br", name: "Bromine", mass: "79.904", neutrons: 45, group: ElementGroup::Halogen },
    Element { atomic_number: 36, symbol: "Kr", name: "Krypton", mass: "83.798", neutrons: 48, group: ElementGroup::NobleGas },
    Element { atomic_number: 37, symbol: "Rb", name: "Rubidium", mass: "85.468", neutrons: 48, group: ElementGroup::AlkaliMetal },
    Element { atomic_number: 38, symbol: "Sr", name: "Strontium", mass: "87.62", neutrons: 50, group: ElementGroup::AlkalineEarthMetal },
    Element { atomic_number: 39, symbol: "Y", name: "Yttrium", mass: "88.906", neutrons: 50, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 40, symbol: "Zr", name: "Zirconium", mass: "91.224", neutrons: 51, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 41, symbol: "Nb", name: "Niobium", mass: "92.906", neutrons: 52, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 42, symbol: "Mo", name: "Molybdenum", mass: "95.96", neutrons: 54, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 43, symbol: "Tc", name: "Technetium", mass: "(98)", neutrons: 55, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 44, symbol: "Ru", name: "Ruthenium", mass: "101.07", neutrons: 57, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 45, symbol: "Rh", name: "Rhodium", mass: "102.91", neutrons: 58, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 46, symbol: "Pd", name: "Palladium", mass: "106.42", neutrons: 60, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 47, symbol: "Ag", name: "Silver", mass: "107.87", neutrons: 61, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 48, symbol: "Cd", name: "Cadmium", mass: "112.41", neutrons: 64, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 49, symbol: "In", name: "Indium", mass: "114.82", neutrons: 66, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 50, symbol: "Sn", name: "Tin", mass: "118.71", neutrons: 69, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 51, symbol: "Sb", name: "Antimony", mass: "121.76", neutrons: 71, group: ElementGroup::Metalloid },
    Element { atomic_number: 52, symbol: "Te", name: "Tellurium", mass: "127.60", neutrons: 75, group: ElementGroup::Metalloid },
    Element { atomic_number: 53, symbol: "I", name: "Iodine", mass: "126.90", neutrons: 74, group: ElementGroup::Halogen },
    Element { atomic_number: 54, symbol: "Xe", name: "Xenon", mass: "131.29", neutrons: 77, group: ElementGroup::NobleGas },
    Element { atomic_number: 55, symbol: "Cs", name: "Cesium", mass: "132.91", neutrons: 78, group: ElementGroup::AlkaliMetal },
    Element { atomic_number: 56, symbol: "Ba", name: "Barium", mass: "137.33", neutrons: 81, group: ElementGroup::AlkalineEarthMetal },
    Element { atomic_number: 57, symbol: "La", name: "Lanthanum", mass: "138.91", neutrons: 82, group: ElementGroup::Lanthanide },
    Element { atomic_number: 58, symbol: "Ce", name: "Cerium", mass: "140.12", neutrons: 82, group: ElementGroup::Lanthanide },
    Element { atomic_number: 59, symbol: "Pr", name: "Praseodymium", mass: "140.91", neutrons: 82, group: ElementGroup::Lanthanide },
    Element { atomic_number: 60, symbol: "Nd", name: "Neodymium", mass: "144.24", neutrons: 84, group: ElementGroup::Lanthanide },
    Element { atomic_number: 61, symbol: "Pm", name: "Promethium", mass: "(145)", neutrons: 84, group: ElementGroup::Lanthanide },
    Element { atomic_number: 62, symbol: "Sm", name: "Samarium", mass: "150.36", neutrons: 88, group: ElementGroup::Lanthanide },
    Element { atomic_number: 63, symbol: "Eu", name: "Europium", mass: "151.96", neutrons: 89, group: ElementGroup::Lanthanide },
    Element { atomic_number: 64, symbol: "Gd", name: "Gadolinium", mass: "157.25", neutrons: 93, group: ElementGroup::Lanthanide },
    Element { atomic_number: 65, symbol: "Tb", name: "Terbium", mass: "158.93", neutrons: 94, group: ElementGroup::Lanthanide },
    Element { atomic_number: 66, symbol: "Dy", name: "Dysprosium", mass: "162.50", neutrons: 97, group: ElementGroup::Lanthanide },
    Element { atomic_number: 67, symbol: "Ho", name: "Holmium", mass: "164.93", neutrons: 98, group: ElementGroup::Lanthanide },
    Element { atomic_number: 68, symbol: "Er", name: "Erbium", mass: "167.26", neutrons: 99, group: ElementGroup::Lanthanide },
    Element { atomic_number: 69, symbol: "Tm", name: "Thulium", mass: "168.93", neutrons: 100, group: ElementGroup::Lanthanide },
    Element { atomic_number: 70, symbol: "Yb", name: "Ytterbium", mass: "173.05", neutrons: 103, group: ElementGroup::Lanthanide },
    Element { atomic_number: 71, symbol: "Lu", name: "Lutetium", mass: "174.97", neutrons: 104, group: ElementGroup::Lanthanide },
    Element { atomic_number: 72, symbol: "Hf", name: "Hafnium", mass: "178.49", neutrons: 106, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 73, symbol: "Ta", name: "Tantalum", mass: "180.95", neutrons: 108, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 74, symbol: "W", name: "Tungsten", mass: "183.84", neutrons: 110, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 75, symbol: "Re", name: "Rhenium", mass: "186.21", neutrons: 111, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 76, symbol: "Os", name: "Osmium", mass: "190.23", neutrons: 114, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 77, symbol: "Ir", name: "Iridium", mass: "192.22", neutrons: 115, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 78, symbol: "Pt", name: "Platinum", mass: "195.08", neutrons: 117, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 79, symbol: "Au", name: "Gold", mass: "196.97", neutrons: 118, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 80, symbol: "Hg", name: "Mercury", mass: "200.59", neutrons: 121, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 81, symbol: "Tl", name: "Thallium", mass: "204.38", neutrons: 123, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 82, symbol: "Pb", name: "Lead", mass: "207.2", neutrons: 125, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 83, symbol: "Bi", name: "Bismuth", mass: "208.98", neutrons: 126, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 84, symbol: "Po", name: "Polonium", mass: "(209)", neutrons: 125, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 85, symbol: "At", name: "Astatine", mass: "(210)", neutrons: 125, group: ElementGroup::Halogen },
    Element { atomic_number: 86, symbol: "Rn", name: "Radon", mass: "(222)", neutrons: 136, group: ElementGroup::NobleGas },
    Element { atomic_number: 87, symbol: "Fr", name: "Francium", mass: "(223)", neutrons: 136, group: ElementGroup::AlkaliMetal },
    Element { atomic_number: 88, symbol: "Ra", name: "Radium", mass: "(226)", neutrons: 138, group: ElementGroup::AlkalineEarthMetal },
    Element { atomic_number: 89, symbol: "Ac", name: "Actinium", mass: "(227)", neutrons: 138, group: ElementGroup::Actinide },
    Element { atomic_number: 90, symbol: "Th", name: "Thorium", mass: "232.04", neutrons: 142, group: ElementGroup::Actinide },
    Element { atomic_number: 91, symbol: "Pa", name: "Protactinium", mass: "231.04", neutrons: 140, group: ElementGroup::Actinide },
    Element { atomic_number: 92, symbol: "U", name: "Uranium", mass: "238.03", neutrons: 146, group: ElementGroup::Actinide },
    Element { atomic_number: 93, symbol: "Np", name: "Neptunium", mass: "(237)", neutrons: 144, group: ElementGroup::Actinide },
    Element { atomic_number: 94, symbol: "Pu", name: "Plutonium", mass: "(244)", neutrons: 150, group: ElementGroup::Actinide },
    Element { atomic_number: 95, symbol: "Am", name: "Americium", mass: "(243)", neutrons: 148, group: ElementGroup::Actinide },
    Element { atomic_number: 96, symbol: "Cm", name: "Curium", mass: "(247)", neutrons: 151, group: ElementGroup::Actinide },
    Element { atomic_number: 97, symbol: "Bk", name: "Berkelium", mass: "(247)", neutrons: 150, group: ElementGroup::Actinide },
    Element { atomic_number: 98, symbol: "Cf", name: "Californium", mass: "(251)", neutrons: 153, group: ElementGroup::Actinide },
    Element { atomic_number: 99, symbol: "Es", name: "Einsteinium", mass: "(252)", neutrons: 153, group: ElementGroup::Actinide },
    Element { atomic_number: 100, symbol: "Fm", name: "Fermium", mass: "(257)", neutrons: 157, group: ElementGroup::Actinide },
    Element { atomic_number: 101, symbol: "Md", name: "Mendelevium", mass: "(258)", neutrons: 157, group: ElementGroup::Actinide },
    Element { atomic_number: 102, symbol: "No", name: "Nobelium", mass: "(259)", neutrons: 157, group: ElementGroup::Actinide },
    Element { atomic_number: 103, symbol: "Lr", name: "Lawrencium", mass: "(262)", neutrons: 159, group: ElementGroup::Actinide },
    Element { atomic_number: 104, symbol: "Rf", name: "Rutherfordium", mass: "(267)", neutrons: 163, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 105, symbol: "Db", name: "Dubnium", mass: "(268)", neutrons: 163, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 106, symbol: "Sg", name: "Seaborgium", mass: "(271)", neutrons: 165, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 107, symbol: "Bh", name: "Bohrium", mass: "(272)", neutrons: 165, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 108, symbol: "Hs", name: "Hassium", mass: "(277)", neutrons: 169, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 109, symbol: "Mt", name: "Meitnerium", mass: "(278)", neutrons: 169, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 110, symbol: "Ds", name: "Darmstadtium", mass: "(281)", neutrons: 171, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 111, symbol: "Rg", name: "Roentgenium", mass: "(282)", neutrons: 171, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 112, symbol: "Cn", name: "Copernicium", mass: "(285)", neutrons: 173, group: ElementGroup::TransitionMetal },
    Element { atomic_number: 113, symbol: "Nh", name: "Nihonium", mass: "(286)", neutrons: 173, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 114, symbol: "Fl", name: "Flerovium", mass: "(289)", neutrons: 175, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 115, symbol: "Mc", name: "Moscovium", mass: "(290)", neutrons: 175, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 116, symbol: "Lv", name: "Livermorium", mass: "(293)", neutrons: 177, group: ElementGroup::PostTransitionMetal },
    Element { atomic_number: 117, symbol: "Ts", name: "Tennessine", mass: "(294)", neutrons: 177, group: ElementGroup::Halogen },
    Element { atomic_number: 118, symbol: "Og", name: "Oganesson", mass: "(294)", neutrons: 176, group: ElementGroup::NobleGas },
];

/// Looks up an element by proton count (1-based).
pub fn element_by_protons(protons: u32) -> Option<&'static Element> {
    if (1..=KNOWN_ELEMENT_COUNT).contains(&protons) {
        Some(&ELEMENTS[(protons - 1) as usize])
    } else {
        None
    }
}

/// Looks up an element by its case-sensitive symbol (e.g. `"Fe"`).
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|element| element.symbol == symbol)
}

/// Returns the full static table in atomic-number order.
pub fn all_elements() -> &'static [Element] {
    &ELEMENTS
}

/// Elements of one group in atomic-number order.
pub fn elements_in_group(group: ElementGroup) -> impl Iterator<Item = &'static Element> {
    ELEMENTS.iter().filter(move |element| element.group == group)
}

/// Builds the IUPAC systematic name and symbol for any atomic number.
///
/// Each decimal digit maps to a numeral root; the name is the concatenated
/// roots plus `ium`, the symbol is the roots' first letters uppercased.
/// `119` yields `ununennium` / `UUE`.
pub fn systematic_element(protons: u32) -> SystematicElement {
    let roots = protons
        .to_string()
        .bytes()
        .map(|digit| SYSTEMATIC_ROOTS[usize::from(digit - b'0')])
        .collect::<Vec<_>>();

    let name = format!("{}ium", roots.concat());
    let symbol = roots
        .iter()
        .filter_map(|root| root.chars().next())
        .collect::<String>()
        .to_uppercase();

    SystematicElement {
        atomic_number: protons,
        symbol,
        name,
    }
}

/// Parses table mass notation, `"12.011"` or `"(98)"`.
pub(crate) fn parse_table_mass(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .parse::<f64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::{
        all_elements, element_by_protons, element_by_symbol, elements_in_group,
        parse_table_mass, systematic_element, ElementGroup, KNOWN_ELEMENT_COUNT,
    };

    #[test]
    fn table_is_dense_and_ordered() {
        let elements = all_elements();
        assert_eq!(elements.len(), KNOWN_ELEMENT_COUNT as usize);
        for (index, element) in elements.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, index + 1);
            assert!(element.mass_value().is_some(), "{} mass", element.symbol);
        }
    }

    #[test]
    fn lookup_by_protons_and_symbol_agree() {
        let carbon = element_by_protons(6).expect("carbon");
        assert_eq!(carbon.symbol, "C");
        assert_eq!(element_by_symbol("C"), Some(carbon));
        assert_eq!(carbon.group, ElementGroup::Nonmetal);
    }

    #[test]
    fn out_of_range_lookups_return_none() {
        assert!(element_by_protons(0).is_none());
        assert!(element_by_protons(119).is_none());
        assert!(element_by_symbol("Xx").is_none());
    }

    #[test]
    fn parenthesised_mass_is_stripped() {
        let technetium = element_by_protons(43).expect("technetium");
        assert!(technetium.has_estimated_mass());
        assert_eq!(technetium.mass_value(), Some(98.0));
    }

    #[test]
    fn common_isotope_neutrons_follow_the_table() {
        let neutrons = |z| element_by_protons(z).expect("known element").neutrons;
        assert_eq!(neutrons(1), 0);
        assert_eq!(neutrons(3), 4);
        assert_eq!(neutrons(6), 6);
        assert_eq!(neutrons(94), 150);
        assert_eq!(neutrons(118), 176);
    }

    #[test]
    fn group_filter_keeps_only_members_in_order() {
        let noble: Vec<&str> = elements_in_group(ElementGroup::NobleGas)
            .map(|element| element.symbol)
            .collect();
        assert_eq!(noble, ["He", "Ne", "Ar", "Kr", "Xe", "Rn", "Og"]);

        let total: usize = [
            ElementGroup::AlkaliMetal,
            ElementGroup::AlkalineEarthMetal,
            ElementGroup::Lanthanide,
            ElementGroup::Actinide,
            ElementGroup::TransitionMetal,
            ElementGroup::PostTransitionMetal,
            ElementGroup::Metalloid,
            ElementGroup::Nonmetal,
            ElementGroup::Halogen,
            ElementGroup::NobleGas,
        ]
        .into_iter()
        .map(|group| elements_in_group(group).count())
        .sum();
        assert_eq!(total, all_elements().len());
        assert_eq!(elements_in_group(ElementGroup::Unknown).count(), 0);
    }

    #[test]
    fn table_mass_parser_accepts_padding_and_parentheses() {
        assert_eq!(parse_table_mass("12.011"), Some(12.011));
        assert_eq!(parse_table_mass(" (209) "), Some(209.0));
        assert_eq!(parse_table_mass("?"), None);
    }

    #[test]
    fn systematic_name_for_119() {
        let element = systematic_element(119);
        assert_eq!(element.name, "ununennium");
        assert_eq!(element.symbol, "UUE");
    }

    #[test]
    fn systematic_name_uses_nil_for_zero_digits() {
        let element = systematic_element(120);
        assert_eq!(element.name, "unbinilium");
        assert_eq!(element.symbol, "UBN");
    }
}
