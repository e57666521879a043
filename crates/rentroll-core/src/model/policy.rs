use serde::{Deserialize, Serialize};

use rentroll_core_types::Money;

use crate::errors::{LedgerError, Result};

/// How a subject (agent or caretaker) earns commission.
///
/// The same policy type is shared by both subject kinds; the source system's
/// asymmetry (agents percentage-only, caretakers percentage or flat) was an
/// accident of its record layout, not a business rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionPolicy {
    /// Proportional to rent collected, in basis points (10% == 1000 bps).
    /// Zero basis points always yields zero commission.
    Percentage { basis_points: u32 },
    /// A fixed stipend per period, independent of rent collected
    FlatRate { amount: Money },
}

/// How to treat unrecognized commission types when decoding legacy records.
///
/// The source system silently paid zero commission for unknown types.
/// `Strict` (the default for new callers) fails loudly instead; `Lenient`
/// preserves the legacy behavior for byte-compatible replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegacyPolicyMode {
    #[default]
    Strict,
    Lenient,
}

impl CommissionPolicy {
    /// A percentage policy from a whole-percent rate (10 means 10%)
    pub fn percentage(percent: u32) -> Self {
        CommissionPolicy::Percentage {
            basis_points: percent * 100,
        }
    }

    /// A flat stipend from a major-unit figure (50 means 5000 minor units)
    pub fn flat_rate_major(major: i64) -> Self {
        CommissionPolicy::FlatRate {
            amount: Money::from_major(major),
        }
    }

    /// Decode a legacy `(commissionType, commissionRate)` pair.
    ///
    /// Percentage rates are whole percents in `0..=100`; flat rates are
    /// major currency units. Negative rates are never representable.
    ///
    /// # Errors
    /// * `InvalidCommissionRate` - rate is negative, or a percentage above 100
    /// * `UnknownCommissionType` - kind is unrecognized and mode is `Strict`
    pub fn from_legacy(kind: &str, rate: i64, mode: LegacyPolicyMode) -> Result<Self> {
        if rate < 0 {
            return Err(LedgerError::InvalidCommissionRate { rate });
        }
        match kind {
            "PERCENTAGE" if rate > 100 => Err(LedgerError::InvalidCommissionRate { rate }),
            "PERCENTAGE" => Ok(CommissionPolicy::Percentage {
                basis_points: (rate as u32) * 100,
            }),
            "FLAT_RATE" => Ok(CommissionPolicy::flat_rate_major(rate)),
            other => match mode {
                LegacyPolicyMode::Strict => Err(LedgerError::UnknownCommissionType {
                    kind: other.to_string(),
                }),
                // Legacy fallthrough: unknown types earn nothing
                LegacyPolicyMode::Lenient => Ok(CommissionPolicy::Percentage { basis_points: 0 }),
            },
        }
    }

    /// Commission earned on a given amount of rent collected.
    ///
    /// `Percentage` takes its basis-point share (half-up); `FlatRate` returns
    /// the stipend regardless of rent, including when no rent was collected.
    pub fn commission_on(&self, rent_collected: Money) -> Money {
        match self {
            CommissionPolicy::Percentage { basis_points } if *basis_points > 0 => {
                rent_collected.share(*basis_points)
            }
            CommissionPolicy::Percentage { .. } => Money::ZERO,
            CommissionPolicy::FlatRate { amount } => *amount,
        }
    }

    /// Whether commission accrues per lease (proportional policies only)
    pub fn is_proportional(&self) -> bool {
        matches!(self, CommissionPolicy::Percentage { .. })
    }
}
