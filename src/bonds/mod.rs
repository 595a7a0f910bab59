/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Covalent bond model
//!
//! This module estimates bond lengths and bond orders for element pairs from
//! a packaged reference table, and decides bondedness of two sites from
//! their geometric distance. The table is loaded once per process and every
//! lookup returns an independent copy, so concurrent readers need no
//! locking.

mod covalent;
mod errors;
mod estimator;
mod table;

pub use covalent::CovalentBond;
pub use errors::{BondError, Result};
pub use estimator::{get_bond_length, get_bond_order, is_bonded, DEFAULT_TOL};
pub use table::{all_bond_lengths, ElementPair};
