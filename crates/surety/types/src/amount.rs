//! Amounts in the smallest integer subunit

use serde::{Deserialize, Serialize};

/// Subunits per whole unit (18 decimal places)
pub const SUBUNITS_PER_UNIT: u128 = 1_000_000_000_000_000_000;

/// Financial amount in the smallest subunit
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Amount(pub u128);

impl Amount {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    /// Amount of `units` whole units
    pub fn whole_units(units: u64) -> Self {
        Self(u128::from(units).saturating_mul(SUBUNITS_PER_UNIT))
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
