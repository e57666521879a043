//! In-memory reference implementation of the ledger repository
//!
//! Backed by plain maps behind a `tokio::sync::RwLock`. Payout insertion
//! holds the write lock across the check and the insert, so the
//! insert-if-absent contract is atomic even under concurrent callers.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use rentroll_core::errors::{LedgerError, Result};
use rentroll_core::model::{
    Agent, AgentPayout, Caretaker, CaretakerPayout, Lease, LeaseLedger, LeaseSlice, Payment,
    Property, PropertyFilter, PropertyLedger,
};
use rentroll_core::period::{PaymentPeriod, PeriodWindow};
use rentroll_core_types::{AgencyId, AgentId, CaretakerId, LeaseId, PropertyId};

use crate::repository::LedgerRepository;

#[derive(Debug, Default)]
struct Inner {
    agents: HashMap<AgentId, Agent>,
    caretakers: HashMap<CaretakerId, Caretaker>,
    properties: HashMap<PropertyId, Property>,
    leases: HashMap<LeaseId, Lease>,
    payments: Vec<Payment>,
    caretaker_properties: HashMap<CaretakerId, Vec<PropertyId>>,
    agent_leases: HashMap<AgentId, Vec<LeaseId>>,
    agent_payouts: HashMap<(AgentId, PaymentPeriod), AgentPayout>,
    caretaker_payouts: HashMap<(CaretakerId, PaymentPeriod), CaretakerPayout>,
}

/// In-memory ledger store
///
/// Seeding methods (`add_*`, `assign_*`) build up the graph; the
/// [`LedgerRepository`] implementation serves the engine's read and write
/// contracts over it.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    inner: tokio::sync::RwLock<Inner>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_agent(&self, agent: Agent) {
        self.inner.write().await.agents.insert(agent.id.clone(), agent);
    }

    pub async fn add_caretaker(&self, caretaker: Caretaker) {
        self.inner
            .write()
            .await
            .caretakers
            .insert(caretaker.id.clone(), caretaker);
    }

    pub async fn add_property(&self, property: Property) {
        self.inner
            .write()
            .await
            .properties
            .insert(property.id.clone(), property);
    }

    pub async fn add_lease(&self, lease: Lease) {
        self.inner.write().await.leases.insert(lease.id.clone(), lease);
    }

    pub async fn add_payment(&self, payment: Payment) {
        self.inner.write().await.payments.push(payment);
    }

    /// Put a property under a caretaker's management
    pub async fn assign_property(&self, caretaker_id: &CaretakerId, property_id: &PropertyId) {
        self.inner
            .write()
            .await
            .caretaker_properties
            .entry(caretaker_id.clone())
            .or_default()
            .push(property_id.clone());
    }

    /// Assign a lease to an agent
    pub async fn assign_lease(&self, agent_id: &AgentId, lease_id: &LeaseId) {
        self.inner
            .write()
            .await
            .agent_leases
            .entry(agent_id.clone())
            .or_default()
            .push(lease_id.clone());
    }

    fn property<'a>(inner: &'a Inner, id: &PropertyId) -> Result<&'a Property> {
        inner.properties.get(id).ok_or_else(|| LedgerError::Persistence {
            reason: format!("dangling property reference: {id}"),
        })
    }

    fn payments_for(inner: &Inner, lease_id: &LeaseId, window: &PeriodWindow) -> Vec<Payment> {
        inner
            .payments
            .iter()
            .filter(|p| &p.lease_id == lease_id && window.contains(p.paid_at))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl LedgerRepository for MemoryRepository {
    async fn agent(&self, id: &AgentId) -> Result<Option<Agent>> {
        Ok(self.inner.read().await.agents.get(id).cloned())
    }

    async fn caretaker(&self, id: &CaretakerId) -> Result<Option<Caretaker>> {
        Ok(self.inner.read().await.caretakers.get(id).cloned())
    }

    async fn active_agents(&self, agency_id: &AgencyId) -> Result<Vec<Agent>> {
        let inner = self.inner.read().await;
        let mut agents: Vec<Agent> = inner
            .agents
            .values()
            .filter(|a| &a.agency_id == agency_id && a.active)
            .cloned()
            .collect();
        agents.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(agents)
    }

    async fn caretakers(&self, agency_id: &AgencyId) -> Result<Vec<Caretaker>> {
        let inner = self.inner.read().await;
        let mut caretakers: Vec<Caretaker> = inner
            .caretakers
            .values()
            .filter(|c| &c.agency_id == agency_id)
            .cloned()
            .collect();
        caretakers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(caretakers)
    }

    async fn caretaker_portfolio(
        &self,
        id: &CaretakerId,
        window: &PeriodWindow,
        filter: &PropertyFilter,
    ) -> Result<Vec<PropertyLedger>> {
        let inner = self.inner.read().await;
        let assigned = inner
            .caretaker_properties
            .get(id)
            .cloned()
            .unwrap_or_default();

        let mut portfolio = Vec::new();
        for property_id in assigned {
            if !filter.admits(&property_id) {
                continue;
            }
            let property = Self::property(&inner, &property_id)?.clone();
            let leases: Vec<LeaseSlice> = inner
                .leases
                .values()
                .filter(|l| l.property_id == property_id && l.is_active())
                .map(|lease| LeaseSlice {
                    payments: Self::payments_for(&inner, &lease.id, window),
                    lease: lease.clone(),
                })
                .collect();
            portfolio.push(PropertyLedger { property, leases });
        }
        debug!(caretaker_id = %id, properties = portfolio.len(), "loaded caretaker portfolio");
        Ok(portfolio)
    }

    async fn agent_assignments(
        &self,
        id: &AgentId,
        window: &PeriodWindow,
        filter: &PropertyFilter,
    ) -> Result<Vec<LeaseLedger>> {
        let inner = self.inner.read().await;
        let assigned = inner.agent_leases.get(id).cloned().unwrap_or_default();

        let mut assignments = Vec::new();
        for lease_id in assigned {
            let lease = inner.leases.get(&lease_id).ok_or_else(|| {
                LedgerError::Persistence {
                    reason: format!("dangling lease reference: {lease_id}"),
                }
            })?;
            if !filter.admits(&lease.property_id) {
                continue;
            }
            let property = Self::property(&inner, &lease.property_id)?.clone();
            assignments.push(LeaseLedger {
                payments: Self::payments_for(&inner, &lease.id, window),
                property,
                lease: lease.clone(),
            });
        }
        debug!(agent_id = %id, leases = assignments.len(), "loaded agent assignments");
        Ok(assignments)
    }

    async fn agent_payout_exists(&self, id: &AgentId, period: &PaymentPeriod) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner.agent_payouts.contains_key(&(id.clone(), *period)))
    }

    async fn caretaker_payout_exists(
        &self,
        id: &CaretakerId,
        period: &PaymentPeriod,
    ) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner.caretaker_payouts.contains_key(&(id.clone(), *period)))
    }

    async fn insert_agent_payout(&self, payout: AgentPayout) -> Result<()> {
        let mut inner = self.inner.write().await;
        let key = (payout.agent_id.clone(), payout.period);
        if inner.agent_payouts.contains_key(&key) {
            return Err(LedgerError::DuplicateAgentPayout {
                agent_id: payout.agent_id.to_string(),
                period: payout.period.to_string(),
            });
        }
        inner.agent_payouts.insert(key, payout);
        Ok(())
    }

    async fn insert_caretaker_payout(&self, payout: CaretakerPayout) -> Result<()> {
        let mut inner = self.inner.write().await;
        let key = (payout.caretaker_id.clone(), payout.period);
        if inner.caretaker_payouts.contains_key(&key) {
            return Err(LedgerError::DuplicateCaretakerPayout {
                caretaker_id: payout.caretaker_id.to_string(),
                period: payout.period.to_string(),
            });
        }
        inner.caretaker_payouts.insert(key, payout);
        Ok(())
    }

    async fn agent_payouts(
        &self,
        agency_id: &AgencyId,
        period: &PaymentPeriod,
    ) -> Result<Vec<AgentPayout>> {
        let inner = self.inner.read().await;
        let mut payouts: Vec<AgentPayout> = inner
            .agent_payouts
            .values()
            .filter(|p| &p.agency_id == agency_id && &p.period == period)
            .cloned()
            .collect();
        payouts.sort_by(|a, b| a.agent_id.cmp(&b.agent_id));
        Ok(payouts)
    }

    async fn caretaker_payouts(
        &self,
        agency_id: &AgencyId,
        period: &PaymentPeriod,
    ) -> Result<Vec<CaretakerPayout>> {
        let inner = self.inner.read().await;
        let mut payouts: Vec<CaretakerPayout> = inner
            .caretaker_payouts
            .values()
            .filter(|p| &p.agency_id == agency_id && &p.period == period)
            .cloned()
            .collect();
        payouts.sort_by(|a, b| a.caretaker_id.cmp(&b.caretaker_id));
        Ok(payouts)
    }
}
