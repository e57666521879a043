use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core_types::{AgencyId, Money};

use crate::model::{AgentPayout, CaretakerPayout};
use crate::period::PaymentPeriod;

use super::agent::AgentCommission;
use super::caretaker::CaretakerCommission;

/// Agency-wide totals computed live from the current payment ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencySummary {
    pub agency_id: AgencyId,
    pub period: PaymentPeriod,
    pub agent_commission_total: Money,
    pub caretaker_commission_total: Money,
    pub caretaker_salary_total: Money,
    /// Sum of the three totals above
    pub grand_total: Money,
    pub agents_processed: usize,
    pub caretakers_processed: usize,
    pub calculated_at: DateTime<Utc>,
}

/// Agency-wide totals read back from committed payout records.
///
/// Same shape as [`AgencySummary`] so callers can reconcile what was
/// calculated against what was committed to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutReport {
    pub agency_id: AgencyId,
    pub period: PaymentPeriod,
    pub agent_commission_total: Money,
    pub caretaker_commission_total: Money,
    pub caretaker_salary_total: Money,
    pub grand_total: Money,
    pub agent_payouts: usize,
    pub caretaker_payouts: usize,
}

/// Reduce per-subject live calculations to agency totals
pub fn summarize_agency(
    agency_id: AgencyId,
    period: PaymentPeriod,
    agents: &[AgentCommission],
    caretakers: &[CaretakerCommission],
) -> AgencySummary {
    let agent_commission_total: Money = agents.iter().map(|a| a.commission_amount).sum();
    let caretaker_commission_total: Money = caretakers.iter().map(|c| c.commission_amount).sum();
    let caretaker_salary_total: Money = caretakers.iter().map(|c| c.salary_amount).sum();

    AgencySummary {
        agency_id,
        period,
        agent_commission_total,
        caretaker_commission_total,
        caretaker_salary_total,
        grand_total: agent_commission_total + caretaker_commission_total + caretaker_salary_total,
        agents_processed: agents.len(),
        caretakers_processed: caretakers.len(),
        calculated_at: Utc::now(),
    }
}

/// Reduce committed payout records to agency totals
pub fn summarize_payouts(
    agency_id: AgencyId,
    period: PaymentPeriod,
    agent_payouts: &[AgentPayout],
    caretaker_payouts: &[CaretakerPayout],
) -> PayoutReport {
    let agent_commission_total: Money = agent_payouts.iter().map(|p| p.amount).sum();
    let caretaker_commission_total: Money =
        caretaker_payouts.iter().map(|p| p.commission_amount).sum();
    let caretaker_salary_total: Money = caretaker_payouts.iter().map(|p| p.salary_amount).sum();

    PayoutReport {
        agency_id,
        period,
        agent_commission_total,
        caretaker_commission_total,
        caretaker_salary_total,
        grand_total: agent_commission_total + caretaker_commission_total + caretaker_salary_total,
        agent_payouts: agent_payouts.len(),
        caretaker_payouts: caretaker_payouts.len(),
    }
}
