//! Bounded-timeout decorator for ledger repositories
//!
//! The engine never defines its own timeouts; wrapping a repository in
//! [`TimeoutRepository`] bounds every persistence call and maps an elapsed
//! timer to `LedgerError::StoreTimeout`, which callers may retry. A hung
//! backend can then no longer hang a calculation indefinitely.

use std::time::Duration;

use async_trait::async_trait;

use rentroll_core::errors::{LedgerError, Result};
use rentroll_core::model::{
    Agent, AgentPayout, Caretaker, CaretakerPayout, LeaseLedger, PropertyFilter, PropertyLedger,
};
use rentroll_core::period::{PaymentPeriod, PeriodWindow};
use rentroll_core_types::{AgencyId, AgentId, CaretakerId};

use crate::repository::LedgerRepository;

/// Default per-call budget for persistence operations
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Decorates a repository with a per-call timeout
#[derive(Debug)]
pub struct TimeoutRepository<R> {
    inner: R,
    limit: Duration,
}

impl<R> TimeoutRepository<R> {
    /// Wrap `inner` with the default timeout
    pub fn new(inner: R) -> Self {
        Self::with_limit(inner, DEFAULT_STORE_TIMEOUT)
    }

    /// Wrap `inner` with an explicit per-call timeout
    pub fn with_limit(inner: R, limit: Duration) -> Self {
        Self { inner, limit }
    }

    /// The wrapped repository
    pub fn into_inner(self) -> R {
        self.inner
    }
}

macro_rules! bounded {
    ($self:ident, $op:literal, $fut:expr) => {
        match tokio::time::timeout($self.limit, $fut).await {
            Ok(result) => result,
            Err(_) => Err(LedgerError::StoreTimeout {
                op: $op.to_string(),
            }),
        }
    };
}

#[async_trait]
impl<R: LedgerRepository> LedgerRepository for TimeoutRepository<R> {
    async fn agent(&self, id: &AgentId) -> Result<Option<Agent>> {
        bounded!(self, "agent", self.inner.agent(id))
    }

    async fn caretaker(&self, id: &CaretakerId) -> Result<Option<Caretaker>> {
        bounded!(self, "caretaker", self.inner.caretaker(id))
    }

    async fn active_agents(&self, agency_id: &AgencyId) -> Result<Vec<Agent>> {
        bounded!(self, "active_agents", self.inner.active_agents(agency_id))
    }

    async fn caretakers(&self, agency_id: &AgencyId) -> Result<Vec<Caretaker>> {
        bounded!(self, "caretakers", self.inner.caretakers(agency_id))
    }

    async fn caretaker_portfolio(
        &self,
        id: &CaretakerId,
        window: &PeriodWindow,
        filter: &PropertyFilter,
    ) -> Result<Vec<PropertyLedger>> {
        bounded!(
            self,
            "caretaker_portfolio",
            self.inner.caretaker_portfolio(id, window, filter)
        )
    }

    async fn agent_assignments(
        &self,
        id: &AgentId,
        window: &PeriodWindow,
        filter: &PropertyFilter,
    ) -> Result<Vec<LeaseLedger>> {
        bounded!(
            self,
            "agent_assignments",
            self.inner.agent_assignments(id, window, filter)
        )
    }

    async fn agent_payout_exists(&self, id: &AgentId, period: &PaymentPeriod) -> Result<bool> {
        bounded!(
            self,
            "agent_payout_exists",
            self.inner.agent_payout_exists(id, period)
        )
    }

    async fn caretaker_payout_exists(
        &self,
        id: &CaretakerId,
        period: &PaymentPeriod,
    ) -> Result<bool> {
        bounded!(
            self,
            "caretaker_payout_exists",
            self.inner.caretaker_payout_exists(id, period)
        )
    }

    async fn insert_agent_payout(&self, payout: AgentPayout) -> Result<()> {
        bounded!(
            self,
            "insert_agent_payout",
            self.inner.insert_agent_payout(payout)
        )
    }

    async fn insert_caretaker_payout(&self, payout: CaretakerPayout) -> Result<()> {
        bounded!(
            self,
            "insert_caretaker_payout",
            self.inner.insert_caretaker_payout(payout)
        )
    }

    async fn agent_payouts(
        &self,
        agency_id: &AgencyId,
        period: &PaymentPeriod,
    ) -> Result<Vec<AgentPayout>> {
        bounded!(
            self,
            "agent_payouts",
            self.inner.agent_payouts(agency_id, period)
        )
    }

    async fn caretaker_payouts(
        &self,
        agency_id: &AgencyId,
        period: &PaymentPeriod,
    ) -> Result<Vec<CaretakerPayout>> {
        bounded!(
            self,
            "caretaker_payouts",
            self.inner.caretaker_payouts(agency_id, period)
        )
    }
}
