use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core_types::{AgentId, LeaseId, Money, PropertyId};

use crate::model::{Agent, CommissionPolicy, LeaseLedger};
use crate::period::PaymentPeriod;

/// Result of an agent commission calculation for one period.
///
/// Derived, never persisted; see [`crate::model::AgentPayout`] for the
/// committed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCommission {
    pub agent_id: AgentId,
    pub period: PaymentPeriod,
    pub total_rent_collected: Money,
    pub commission_amount: Money,
    pub leases: Vec<LeaseBreakdown>,
    pub calculated_at: DateTime<Utc>,
}

/// Rent and commission attributed to one lease assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseBreakdown {
    pub lease_id: LeaseId,
    pub property_id: PropertyId,
    pub rent_collected: Money,
    /// Zero for flat-rate policies; the stipend is subject-level
    pub commission: Money,
}

/// Compute an agent's commission for a period.
///
/// Proportional policies accrue per lease: each lease's commission is the
/// basis-point share of that lease's rent, and the subject total is the sum
/// of the per-lease figures (which can differ from a share of the grand
/// total by rounding). A flat-rate stipend is applied once at the subject
/// level, with per-lease commissions reported as zero.
pub fn agent_commission(
    agent: &Agent,
    period: PaymentPeriod,
    assignments: &[LeaseLedger],
) -> AgentCommission {
    let leases: Vec<LeaseBreakdown> = assignments
        .iter()
        .map(|ledger| {
            let rent_collected = ledger.rent_collected();
            let commission = match &agent.policy {
                CommissionPolicy::Percentage { basis_points } if *basis_points > 0 => {
                    rent_collected.share(*basis_points)
                }
                _ => Money::ZERO,
            };
            LeaseBreakdown {
                lease_id: ledger.lease.id.clone(),
                property_id: ledger.property.id.clone(),
                rent_collected,
                commission,
            }
        })
        .collect();

    let total_rent_collected: Money = leases.iter().map(|l| l.rent_collected).sum();
    let commission_amount = if agent.policy.is_proportional() {
        leases.iter().map(|l| l.commission).sum()
    } else {
        agent.policy.commission_on(total_rent_collected)
    };

    AgentCommission {
        agent_id: agent.id.clone(),
        period,
        total_rent_collected,
        commission_amount,
        leases,
        calculated_at: Utc::now(),
    }
}
