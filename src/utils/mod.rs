/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Shared utilities
//!
//! Physical constants and unit conversions used across the crate.

pub mod constants;
mod conversions;

pub use conversions::{angstrom_to_bohr, bohr_to_angstrom};
