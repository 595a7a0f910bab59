/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reference table of covalent bond lengths
//!
//! The packaged data maps a canonical element pair to per-bond-order
//! reference lengths in Angstroms. The table is parsed and validated once on
//! first access and is read-only afterwards; every lookup hands out an
//! independent copy, so callers may mutate results freely.

use super::errors::{BondError, Result};
use crate::atoms::database;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Canonical unordered pair of element symbols
///
/// Symbols are matched case-insensitively, stored in canonical
/// capitalization, and sorted, so `ElementPair::new("H", "C")` and
/// `ElementPair::new("c", "h")` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementPair {
    first: String,
    second: String,
}

impl ElementPair {
    /// Canonicalize two element symbols into an unordered pair key
    pub fn new(elem1: &str, elem2: &str) -> Result<Self> {
        let a = database::canonical_symbol(elem1)
            .ok_or_else(|| BondError::UnknownElement(elem1.to_string()))?;
        let b = database::canonical_symbol(elem2)
            .ok_or_else(|| BondError::UnknownElement(elem2.to_string()))?;
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// First symbol of the canonical (sorted) pair
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Second symbol of the canonical (sorted) pair
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for ElementPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Packaged reference data, keyed "A-B" with bond orders as string keys
static RAW_TABLE: &str = include_str!("bond_lengths.json");

static BOND_LENGTHS: Lazy<HashMap<ElementPair, BTreeMap<u32, f64>>> = Lazy::new(|| {
    let raw: HashMap<String, BTreeMap<String, f64>> =
        serde_json::from_str(RAW_TABLE).expect("packaged bond length table must be valid JSON");

    let mut table = HashMap::with_capacity(raw.len());
    for (pair_key, orders) in raw {
        let (a, b) = pair_key
            .split_once('-')
            .expect("pair keys in the packaged table are written as A-B");
        let pair = ElementPair::new(a, b).expect("pair keys in the packaged table name known elements");

        let mut lengths: BTreeMap<u32, f64> = BTreeMap::new();
        for (order, length) in orders {
            let order: u32 = order
                .parse()
                .expect("bond orders in the packaged table are positive integers");
            assert!(
                order >= 1 && length > 0.0,
                "invalid entry for {}: order {} length {}",
                pair,
                order,
                length
            );
            lengths.insert(order, length);
        }
        assert!(!lengths.is_empty(), "empty entry for {}", pair);
        // Lengths must decrease strictly with increasing order
        for (shorter, longer) in lengths.values().skip(1).zip(lengths.values()) {
            assert!(shorter < longer, "non-decreasing lengths for {}", pair);
        }
        table.insert(pair, lengths);
    }
    log::debug!("loaded bond length data for {} element pairs", table.len());
    table
});

/// Look up all tabulated bond lengths for an element pair
///
/// The result maps bond order to reference length in Angstroms and is an
/// owned copy: mutating it never affects later lookups. An untabulated pair
/// is an error unless `default_length` is given, in which case the result is
/// a single order-1 entry holding that value.
pub fn all_bond_lengths(
    elem1: &str,
    elem2: &str,
    default_length: Option<f64>,
) -> Result<BTreeMap<u32, f64>> {
    let pair = ElementPair::new(elem1, elem2)?;
    match BOND_LENGTHS.get(&pair) {
        Some(lengths) => Ok(lengths.clone()),
        None => match default_length {
            Some(length) => Ok(BTreeMap::from([(1, length)])),
            None => Err(BondError::NoBondData(pair.first, pair.second)),
        },
    }
}
