use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core_types::{CaretakerId, Money, PropertyId};

use crate::model::{Caretaker, PropertyLedger};
use crate::period::PaymentPeriod;

/// Result of a caretaker commission calculation for one period.
///
/// Derived, never persisted; a [`crate::model::CaretakerPayout`] is built
/// from it when the caller commits the figure to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaretakerCommission {
    pub caretaker_id: CaretakerId,
    pub period: PaymentPeriod,
    pub total_rent_collected: Money,
    pub commission_amount: Money,
    pub salary_amount: Money,
    /// Salary plus commission
    pub total_amount: Money,
    pub properties: Vec<PropertyBreakdown>,
    pub calculated_at: DateTime<Utc>,
}

/// Rent collected for one property of the caretaker's portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyBreakdown {
    pub property_id: PropertyId,
    pub title: String,
    pub rent_collected: Money,
}

/// Compute a caretaker's commission for a period.
///
/// The portfolio is the caretaker's managed properties with their active
/// leases and the period's payments, already restricted to any property
/// filter by the repository. Commission follows the caretaker's policy:
/// a basis-point share of total rent collected, or a flat stipend
/// independent of rent. The total adds the base salary (zero when none).
pub fn caretaker_commission(
    caretaker: &Caretaker,
    period: PaymentPeriod,
    portfolio: &[PropertyLedger],
) -> CaretakerCommission {
    let properties: Vec<PropertyBreakdown> = portfolio
        .iter()
        .map(|ledger| PropertyBreakdown {
            property_id: ledger.property.id.clone(),
            title: ledger.property.title.clone(),
            rent_collected: ledger.rent_collected(),
        })
        .collect();

    let total_rent_collected: Money = properties.iter().map(|p| p.rent_collected).sum();
    let commission_amount = caretaker.policy.commission_on(total_rent_collected);
    let salary_amount = caretaker.salary_or_zero();

    CaretakerCommission {
        caretaker_id: caretaker.id.clone(),
        period,
        total_rent_collected,
        commission_amount,
        salary_amount,
        total_amount: salary_amount + commission_amount,
        properties,
        calculated_at: Utc::now(),
    }
}
