/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element reference data
//!
//! Per-element data (canonical symbol, atomic weight, covalent radius) for
//! hydrogen through oganesson. Weights follow the IUPAC 2013 relative atomic
//! masses; covalent radii are the Cordero single-bond values in Angstroms.
//! Entries are indexed by atomic number, so `ELEMENTS[z - 1]` is element `z`.

/// Reference data for a single element
struct ElementData {
    symbol: &'static str,
    weight: f64,
    covalent_radius: f64,
}

const fn el(symbol: &'static str, weight: f64, covalent_radius: f64) -> ElementData {
    ElementData {
        symbol,
        weight,
        covalent_radius,
    }
}

static ELEMENTS: [ElementData; 118] = [
    el("H", 1.008, 0.31),
    el("He", 4.0026, 0.28),
    el("Li", 6.94, 1.28),
    el("Be", 9.0122, 0.96),
    el("B", 10.81, 0.84),
    el("C", 12.011, 0.76),
    el("N", 14.007, 0.71),
    el("O", 15.999, 0.66),
    el("F", 18.998, 0.57),
    el("Ne", 20.180, 0.58),
    el("Na", 22.990, 1.66),
    el("Mg", 24.305, 1.41),
    el("Al", 26.982, 1.21),
    el("Si", 28.085, 1.11),
    el("P", 30.974, 1.07),
    el("S", 32.06, 1.05),
    el("Cl", 35.45, 1.02),
    el("Ar", 39.95, 1.06),
    el("K", 39.098, 2.03),
    el("Ca", 40.078, 1.76),
    el("Sc", 44.956, 1.70),
    el("Ti", 47.867, 1.60),
    el("V", 50.942, 1.53),
    el("Cr", 51.996, 1.39),
    el("Mn", 54.938, 1.39),
    el("Fe", 55.845, 1.32),
    el("Co", 58.933, 1.26),
    el("Ni", 58.693, 1.24),
    el("Cu", 63.546, 1.32),
    el("Zn", 65.38, 1.22),
    el("Ga", 69.723, 1.22),
    el("Ge", 72.630, 1.20),
    el("As", 74.922, 1.19),
    el("Se", 78.971, 1.20),
    el("Br", 79.904, 1.20),
    el("Kr", 83.798, 1.16),
    el("Rb", 85.468, 2.20),
    el("Sr", 87.62, 1.95),
    el("Y", 88.906, 1.90),
    el("Zr", 91.224, 1.75),
    el("Nb", 92.906, 1.64),
    el("Mo", 95.95, 1.54),
    el("Tc", 98.0, 1.47),
    el("Ru", 101.07, 1.46),
    el("Rh", 102.91, 1.42),
    el("Pd", 106.42, 1.39),
    el("Ag", 107.87, 1.45),
    el("Cd", 112.41, 1.44),
    el("In", 114.82, 1.42),
    el("Sn", 118.71, 1.39),
    el("Sb", 121.76, 1.39),
    el("Te", 127.60, 1.38),
    el("I", 126.90, 1.39),
    el("Xe", 131.29, 1.40),
    el("Cs", 132.91, 2.44),
    el("Ba", 137.33, 2.15),
    el("La", 138.91, 2.07),
    el("Ce", 140.12, 2.04),
    el("Pr", 140.91, 2.03),
    el("Nd", 144.24, 2.01),
    el("Pm", 145.0, 1.99),
    el("Sm", 150.36, 1.98),
    el("Eu", 151.96, 1.98),
    el("Gd", 157.25, 1.96),
    el("Tb", 158.93, 1.94),
    el("Dy", 162.50, 1.92),
    el("Ho", 164.93, 1.92),
    el("Er", 167.26, 1.89),
    el("Tm", 168.93, 1.90),
    el("Yb", 173.05, 1.87),
    el("Lu", 174.97, 1.87),
    el("Hf", 178.49, 1.75),
    el("Ta", 180.95, 1.70),
    el("W", 183.84, 1.62),
    el("Re", 186.21, 1.51),
    el("Os", 190.23, 1.44),
    el("Ir", 192.22, 1.41),
    el("Pt", 195.08, 1.36),
    el("Au", 196.97, 1.36),
    el("Hg", 200.59, 1.32),
    el("Tl", 204.38, 1.45),
    el("Pb", 207.2, 1.46),
    el("Bi", 208.98, 1.48),
    el("Po", 209.0, 1.40),
    el("At", 210.0, 1.50),
    el("Rn", 222.0, 1.50),
    el("Fr", 223.0, 2.60),
    el("Ra", 226.0, 2.21),
    el("Ac", 227.0, 2.15),
    el("Th", 232.04, 2.06),
    el("Pa", 231.04, 2.00),
    el("U", 238.03, 1.96),
    el("Np", 237.0, 1.90),
    el("Pu", 244.0, 1.87),
    el("Am", 243.0, 1.80),
    el("Cm", 247.0, 1.69),
    // Covalent radii beyond curium are approximated
    el("Bk", 247.0, 1.65),
    el("Cf", 251.0, 1.65),
    el("Es", 252.0, 1.65),
    el("Fm", 257.0, 1.65),
    el("Md", 258.0, 1.65),
    el("No", 259.0, 1.65),
    el("Lr", 266.0, 1.65),
    el("Rf", 267.0, 1.65),
    el("Db", 268.0, 1.65),
    el("Sg", 269.0, 1.65),
    el("Bh", 270.0, 1.65),
    el("Hs", 277.0, 1.65),
    el("Mt", 278.0, 1.65),
    el("Ds", 281.0, 1.65),
    el("Rg", 282.0, 1.65),
    el("Cn", 285.0, 1.65),
    el("Nh", 286.0, 1.65),
    el("Fl", 289.0, 1.65),
    el("Mc", 290.0, 1.65),
    el("Lv", 293.0, 1.65),
    el("Ts", 294.0, 1.65),
    el("Og", 294.0, 1.65),
];

fn lookup(atomic_number: u32) -> Option<&'static ElementData> {
    if atomic_number == 0 {
        return None;
    }
    ELEMENTS.get(atomic_number as usize - 1)
}

/// Canonical element symbol for an atomic number
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    lookup(atomic_number).map(|e| e.symbol)
}

/// Atomic weight in atomic mass units (amu)
pub fn atomic_weight(atomic_number: u32) -> Option<f64> {
    lookup(atomic_number).map(|e| e.weight)
}

/// Covalent radius in Angstroms
pub fn covalent_radius(atomic_number: u32) -> Option<f64> {
    lookup(atomic_number).map(|e| e.covalent_radius)
}

/// Atomic number for an element symbol
///
/// Matching is case-insensitive, so "Fe", "fe" and "FE" all resolve to 26.
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u32> {
    let symbol = symbol.trim();
    ELEMENTS
        .iter()
        .position(|e| e.symbol.eq_ignore_ascii_case(symbol))
        .map(|idx| idx as u32 + 1)
}

/// Canonical capitalization for an element symbol given in any case
pub fn canonical_symbol(symbol: &str) -> Option<&'static str> {
    atomic_number_from_symbol(symbol).and_then(element_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_symbol() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(6), Some("C"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(92), Some("U"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn test_atomic_number_from_symbol() {
        assert_eq!(atomic_number_from_symbol("H"), Some(1));
        assert_eq!(atomic_number_from_symbol("h"), Some(1));
        assert_eq!(atomic_number_from_symbol("Fe"), Some(26));
        assert_eq!(atomic_number_from_symbol("fe"), Some(26));
        assert_eq!(atomic_number_from_symbol("FE"), Some(26));
        assert_eq!(atomic_number_from_symbol(" Br "), Some(35));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
        assert_eq!(atomic_number_from_symbol(""), None);
    }

    #[test]
    fn test_canonical_symbol() {
        assert_eq!(canonical_symbol("fe"), Some("Fe"));
        assert_eq!(canonical_symbol("BR"), Some("Br"));
        assert_eq!(canonical_symbol("u"), Some("U"));
        assert_eq!(canonical_symbol("Zz"), None);
    }

    #[test]
    fn test_atomic_weight() {
        assert!(atomic_weight(1).unwrap() > 1.0 && atomic_weight(1).unwrap() < 1.1);
        assert!(atomic_weight(6).unwrap() > 12.0 && atomic_weight(6).unwrap() < 12.1);
        assert!(atomic_weight(26).unwrap() > 55.0 && atomic_weight(26).unwrap() < 56.0);
        assert_eq!(atomic_weight(0), None);
        assert_eq!(atomic_weight(119), None);
    }

    #[test]
    fn test_covalent_radius() {
        assert_eq!(covalent_radius(6), Some(0.76));
        assert_eq!(covalent_radius(1), Some(0.31));
        assert_eq!(covalent_radius(119), None);
    }
}
