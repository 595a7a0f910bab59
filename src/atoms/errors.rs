/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the atoms module

use thiserror::Error;

/// Errors that can occur when constructing atomic sites
#[derive(Error, Debug)]
pub enum AtomError {
    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(u32),

    #[error("Unknown element symbol: {0}")]
    UnknownSymbol(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
