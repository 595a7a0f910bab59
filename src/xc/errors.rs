/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the exchange-correlation registry

use thiserror::Error;

/// Errors that can occur when resolving functional identifiers
#[derive(Error, Debug)]
pub enum XcError {
    #[error("Unknown exchange-correlation functional: {0}")]
    UnknownFunctional(String),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, XcError>;
