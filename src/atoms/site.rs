/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic site representation

use super::database;
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chemical element placed at a Cartesian position
///
/// Sites are value objects: element and position are fixed at construction
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Canonical element symbol
    symbol: String,
    /// Atomic number (Z) of the element
    atomic_number: u32,
    /// Position of the site in 3D space
    position: Vector3D,
}

impl Site {
    /// Create a new site from an element symbol and a position
    ///
    /// The symbol is matched case-insensitively and stored in its canonical
    /// capitalization, so `Site::new("fe", ..)` yields a site reporting "Fe".
    pub fn new(symbol: &str, position: Vector3D) -> Result<Self> {
        let atomic_number = database::atomic_number_from_symbol(symbol)
            .ok_or_else(|| AtomError::UnknownSymbol(symbol.to_string()))?;
        let symbol = database::element_symbol(atomic_number)
            .ok_or(AtomError::InvalidAtomicNumber(atomic_number))?;
        Ok(Self {
            symbol: symbol.to_string(),
            atomic_number,
            position,
        })
    }

    /// Create a new site from an atomic number and a position
    pub fn from_atomic_number(atomic_number: u32, position: Vector3D) -> Result<Self> {
        let symbol = database::element_symbol(atomic_number)
            .ok_or(AtomError::InvalidAtomicNumber(atomic_number))?;
        Ok(Self {
            symbol: symbol.to_string(),
            atomic_number,
            position,
        })
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the atomic number
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Get the site's position
    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    /// Get the atomic weight from the element database
    pub fn atomic_weight(&self) -> Option<f64> {
        database::atomic_weight(self.atomic_number)
    }

    /// Get the covalent radius from the element database
    pub fn covalent_radius(&self) -> Option<f64> {
        database::covalent_radius(self.atomic_number)
    }

    /// Euclidean distance to another site in Angstroms
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance(&other.position)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z={}) at {}", self.symbol, self.atomic_number, self.position)
    }
}
