use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core_types::{AgencyId, AgentId, CaretakerId, LeaseId, Money, PayoutId};

use crate::calc::{AgentCommission, CaretakerCommission};
use crate::period::PaymentPeriod;

use super::ledger::PropertyFilter;

/// Lifecycle of a persisted payout record.
///
/// The engine only ever writes `Pending`; approval and disbursement happen
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    Pending,
    Approved,
    Rejected,
}

/// A persisted commission payout for an agent.
///
/// At most one record exists per `(agent_id, period)`; the store enforces
/// this atomically on insert. The record embeds the lease ids that
/// contributed and the property filter in effect, so the figure can be
/// audited later even as the underlying payments change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPayout {
    pub id: PayoutId,
    pub agent_id: AgentId,
    pub agency_id: AgencyId,
    pub period: PaymentPeriod,
    pub rent_collected: Money,
    pub amount: Money,
    pub status: PayoutStatus,
    pub lease_ids: Vec<LeaseId>,
    pub property_filter: PropertyFilter,
    pub created_at: DateTime<Utc>,
}

impl AgentPayout {
    /// Build a pending payout from a live calculation
    pub fn from_calculation(
        calculation: &AgentCommission,
        agency_id: AgencyId,
        property_filter: PropertyFilter,
    ) -> Self {
        Self {
            id: PayoutId::new(),
            agent_id: calculation.agent_id.clone(),
            agency_id,
            period: calculation.period,
            rent_collected: calculation.total_rent_collected,
            amount: calculation.commission_amount,
            status: PayoutStatus::Pending,
            lease_ids: calculation
                .leases
                .iter()
                .map(|l| l.lease_id.clone())
                .collect(),
            property_filter,
            created_at: Utc::now(),
        }
    }
}

/// A persisted payout for a caretaker: base salary plus commission.
///
/// Same uniqueness and provenance rules as [`AgentPayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaretakerPayout {
    pub id: PayoutId,
    pub caretaker_id: CaretakerId,
    pub agency_id: AgencyId,
    pub period: PaymentPeriod,
    pub rent_collected: Money,
    pub salary_amount: Money,
    pub commission_amount: Money,
    pub total_amount: Money,
    pub status: PayoutStatus,
    pub property_filter: PropertyFilter,
    pub created_at: DateTime<Utc>,
}

impl CaretakerPayout {
    /// Build a pending payout from a live calculation
    pub fn from_calculation(
        calculation: &CaretakerCommission,
        agency_id: AgencyId,
        property_filter: PropertyFilter,
    ) -> Self {
        Self {
            id: PayoutId::new(),
            caretaker_id: calculation.caretaker_id.clone(),
            agency_id,
            period: calculation.period,
            rent_collected: calculation.total_rent_collected,
            salary_amount: calculation.salary_amount,
            commission_amount: calculation.commission_amount,
            total_amount: calculation.total_amount,
            status: PayoutStatus::Pending,
            property_filter,
            created_at: Utc::now(),
        }
    }
}
