//! Integer minor-unit money type
//!
//! All monetary amounts in the ledger are counts of a currency's minor unit
//! (cents, pence, ...). No floating-point arithmetic is used anywhere:
//! percentage shares are computed in basis points with integer half-up
//! rounding.

use serde::{Deserialize, Serialize};

/// A monetary amount in minor units of the agency's currency.
///
/// `Money` is a transparent wrapper over `i64`. Sums of rent over a calendar
/// month fit comfortably; intermediate basis-point products are widened to
/// `i128` before division.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Create from a minor-unit count (e.g. cents)
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Create from a major-unit figure (e.g. whole currency units).
    ///
    /// This is the legacy flat-rate conversion: a stored rate of `50` means
    /// 50 whole units, i.e. 5000 minor units.
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// The raw minor-unit count
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Whether this amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Take a basis-point share of this amount, rounding half-up.
    ///
    /// `10_000` basis points is 100%; larger values are a caller bug.
    /// Intended for non-negative amounts; rent and commission figures in the
    /// ledger are never negative. Within these bounds the result always fits
    /// `i64` and never exceeds the original amount.
    pub fn share(&self, basis_points: u32) -> Money {
        debug_assert!(basis_points <= 10_000, "basis points exceed 100%");
        let product = i128::from(self.0) * i128::from(basis_points);
        Money(((product + 5_000) / 10_000) as i64)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
