//! Course price value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion factor between whole currency units and the smallest unit
/// expected by the payment provider. Fixed by the provider contract.
const MINOR_UNITS_PER_UNIT: u64 = 100;

/// Course price in whole currency units.
///
/// A price of zero marks the course as free: the access gate admits
/// everyone and checkout is never required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// Creates a price from whole currency units.
    pub fn new(units: u32) -> Self {
        Self(units)
    }

    /// A zero price.
    pub fn free() -> Self {
        Self(0)
    }

    /// Returns the price in whole currency units.
    pub fn units(&self) -> u32 {
        self.0
    }

    /// Returns the amount the payment provider expects: smallest currency
    /// units, i.e. `units * 100`.
    pub fn minor_units(&self) -> u64 {
        u64::from(self.0) * MINOR_UNITS_PER_UNIT
    }

    /// Returns true when the course costs nothing.
    pub fn is_free(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
