/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Covalent bond between two atomic sites

use super::errors::Result;
use super::estimator;
use crate::atoms::Site;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A covalent bond between two sites
///
/// Purely a value object: the sites are fixed at construction and every
/// query is derived from their positions and elements on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovalentBond {
    site1: Site,
    site2: Site,
}

impl CovalentBond {
    /// Create a bond between two sites
    pub fn new(site1: Site, site2: Site) -> Self {
        Self { site1, site2 }
    }

    /// First site of the bond
    pub fn site1(&self) -> &Site {
        &self.site1
    }

    /// Second site of the bond
    pub fn site2(&self) -> &Site {
        &self.site2
    }

    /// Euclidean distance between the two sites in Angstroms
    pub fn length(&self) -> f64 {
        self.site1.distance_to(&self.site2)
    }

    /// Estimate the bond order from the bond's geometric length
    ///
    /// Delegates to [`estimator::get_bond_order`] with this bond's length
    /// as the distance.
    pub fn get_bond_order(&self, tol: f64, default_length: Option<f64>) -> Result<f64> {
        estimator::get_bond_order(
            self.site1.symbol(),
            self.site2.symbol(),
            self.length(),
            tol,
            default_length,
        )
    }

    /// Decide whether two sites are within bonding distance of each other
    pub fn is_bonded(
        site1: &Site,
        site2: &Site,
        tol: f64,
        default_length: Option<f64>,
    ) -> Result<bool> {
        estimator::is_bonded(site1, site2, tol, default_length)
    }
}

impl fmt::Display for CovalentBond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Covalent bond between {} and {} ({:.4} A)",
            self.site1,
            self.site2,
            self.length()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Vector3D;
    use approx::assert_relative_eq;

    #[test]
    fn test_bond_length() {
        let site1 = Site::new("C", Vector3D::origin()).unwrap();
        let site2 = Site::new("H", Vector3D::new(0.0, 0.7, 0.6)).unwrap();
        let bond = CovalentBond::new(site1, site2);

        assert_relative_eq!(bond.length(), 0.9219544457292887, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let site1 = Site::new("C", Vector3D::origin()).unwrap();
        let site2 = Site::new("H", Vector3D::new(0.0, 0.0, 1.08)).unwrap();
        let bond = CovalentBond::new(site1, site2);

        let text = bond.to_string();
        assert!(text.contains("C"));
        assert!(text.contains("H"));
    }
}
