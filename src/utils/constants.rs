/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants

/// Bohr radius in Angstroms
pub const BOHR_RADIUS: f64 = 0.529177;
