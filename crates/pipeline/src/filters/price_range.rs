//! Filter on fixed price brackets.
//!
//! Bracket boundaries are in minor currency units:
//! - `under-500k`: price < 500 000
//! - `500k-1m`:    500 000 <= price <= 1 000 000
//! - `over-1m`:    price > 1 000 000

use crate::traits::Filter;
use catalog::{Course, Price};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const LOWER_BOUND: Price = 500_000;
const UPPER_BOUND: Price = 1_000_000;

/// One of the three price brackets offered by the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "under-500k")]
    Under500k,
    #[serde(rename = "500k-1m")]
    From500kTo1m,
    #[serde(rename = "over-1m")]
    Over1m,
}

impl PriceRange {
    pub const ALL: [PriceRange; 3] = [
        PriceRange::Under500k,
        PriceRange::From500kTo1m,
        PriceRange::Over1m,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Under500k => "under-500k",
            PriceRange::From500kTo1m => "500k-1m",
            PriceRange::Over1m => "over-1m",
        }
    }

    /// Whether a price falls inside this bracket
    pub fn contains(&self, price: Price) -> bool {
        match self {
            PriceRange::Under500k => price < LOWER_BOUND,
            PriceRange::From500kTo1m => (LOWER_BOUND..=UPPER_BOUND).contains(&price),
            PriceRange::Over1m => price > UPPER_BOUND,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceRange::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown price range: {s}"))
    }
}

/// Keeps courses priced inside one bracket.
pub struct PriceRangeFilter {
    range: PriceRange,
}

impl PriceRangeFilter {
    pub fn new(range: PriceRange) -> Self {
        Self { range }
    }
}

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        self.range.contains(course.price)
    }
}
