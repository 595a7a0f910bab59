/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the bonds module

use thiserror::Error;

/// Errors that can occur during bond length and bond order estimation
#[derive(Error, Debug)]
pub enum BondError {
    /// Element symbol not present in the periodic table
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    /// No tabulated reference data for the element pair
    ///
    /// Recoverable: callers may retry with a default order-1 length.
    #[error("No tabulated bond data for element pair {0}-{1}")]
    NoBondData(String, String),

    /// Distance cannot be bracketed by the tabulated bond lengths
    #[error("Distance {distance} A cannot be bracketed by the tabulated bond lengths for {elem1}-{elem2}")]
    DistanceOutOfRange {
        elem1: String,
        elem2: String,
        distance: f64,
    },
}

/// Result type for bond operations
pub type Result<T> = std::result::Result<T, BondError>;
