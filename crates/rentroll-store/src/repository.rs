//! The persistence contract consumed by the commission engine

use async_trait::async_trait;

use rentroll_core::errors::Result;
use rentroll_core::model::{
    Agent, AgentPayout, Caretaker, CaretakerPayout, LeaseLedger, PropertyFilter, PropertyLedger,
};
use rentroll_core::period::{PaymentPeriod, PeriodWindow};
use rentroll_core_types::{AgencyId, AgentId, CaretakerId};

/// Read and write operations the commission engine needs from the ledger.
///
/// Read graphs come back eagerly loaded and pre-filtered: leases restricted
/// to active ones where the contract says so, payments restricted to the
/// inclusive period window, properties restricted to the caller's filter.
///
/// Payout insertion is **atomic insert-if-absent** on the
/// `(subject, period)` key. Implementations must guarantee that of two
/// concurrent inserts for the same key exactly one succeeds and the other
/// fails with the corresponding duplicate error; callers' existence checks
/// are a fast path only.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Look up an agent by id (`None` when absent)
    async fn agent(&self, id: &AgentId) -> Result<Option<Agent>>;

    /// Look up a caretaker by id (`None` when absent)
    async fn caretaker(&self, id: &CaretakerId) -> Result<Option<Caretaker>>;

    /// All active agents of an agency
    async fn active_agents(&self, agency_id: &AgencyId) -> Result<Vec<Agent>>;

    /// All caretakers of an agency
    async fn caretakers(&self, agency_id: &AgencyId) -> Result<Vec<Caretaker>>;

    /// A caretaker's managed properties with active leases and in-window
    /// payments, restricted to `filter` when it is non-empty
    async fn caretaker_portfolio(
        &self,
        id: &CaretakerId,
        window: &PeriodWindow,
        filter: &PropertyFilter,
    ) -> Result<Vec<PropertyLedger>>;

    /// An agent's lease assignments with their properties and in-window
    /// payments, restricted to `filter` when it is non-empty
    async fn agent_assignments(
        &self,
        id: &AgentId,
        window: &PeriodWindow,
        filter: &PropertyFilter,
    ) -> Result<Vec<LeaseLedger>>;

    /// Fast-path check for an existing agent payout
    async fn agent_payout_exists(&self, id: &AgentId, period: &PaymentPeriod) -> Result<bool>;

    /// Fast-path check for an existing caretaker payout
    async fn caretaker_payout_exists(
        &self,
        id: &CaretakerId,
        period: &PaymentPeriod,
    ) -> Result<bool>;

    /// Insert an agent payout, failing with `DuplicateAgentPayout` when one
    /// already exists for the `(agent, period)` key
    async fn insert_agent_payout(&self, payout: AgentPayout) -> Result<()>;

    /// Insert a caretaker payout, failing with `DuplicateCaretakerPayout`
    /// when one already exists for the `(caretaker, period)` key
    async fn insert_caretaker_payout(&self, payout: CaretakerPayout) -> Result<()>;

    /// Committed agent payouts of an agency for a period
    async fn agent_payouts(
        &self,
        agency_id: &AgencyId,
        period: &PaymentPeriod,
    ) -> Result<Vec<AgentPayout>>;

    /// Committed caretaker payouts of an agency for a period
    async fn caretaker_payouts(
        &self,
        agency_id: &AgencyId,
        period: &PaymentPeriod,
    ) -> Result<Vec<CaretakerPayout>>;
}
