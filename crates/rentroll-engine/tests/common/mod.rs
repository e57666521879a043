//! Shared fixtures for engine integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use rentroll_core::model::{
    Agent, Caretaker, CommissionPolicy, Lease, Payment, Property, PropertyFilter,
};
use rentroll_core::period::PaymentPeriod;
use rentroll_core_types::{
    AgencyId, AgentId, CaretakerId, LeaseId, Money, PaymentId, PropertyId,
};
use rentroll_store::MemoryRepository;

pub fn period(s: &str) -> PaymentPeriod {
    s.parse().unwrap()
}

pub fn agency() -> AgencyId {
    AgencyId::from("agency-1")
}

pub fn unrestricted() -> PropertyFilter {
    PropertyFilter::all()
}

/// A timestamp safely inside the given period
pub fn mid_period(s: &str) -> DateTime<Utc> {
    let p = period(s);
    Utc.with_ymd_and_hms(p.year(), p.month(), 15, 12, 0, 0)
        .unwrap()
}

pub async fn seed_agent(repo: &MemoryRepository, id: &str, policy: CommissionPolicy) -> AgentId {
    let agent_id = AgentId::from(id);
    repo.add_agent(Agent::new(agent_id.clone(), agency(), id, policy))
        .await;
    agent_id
}

pub async fn seed_caretaker(
    repo: &MemoryRepository,
    id: &str,
    policy: CommissionPolicy,
    salary: Option<Money>,
) -> CaretakerId {
    let caretaker_id = CaretakerId::from(id);
    repo.add_caretaker(Caretaker::new(
        caretaker_id.clone(),
        agency(),
        id,
        policy,
        salary,
    ))
    .await;
    caretaker_id
}

/// Create a property with one active lease and return the lease id
pub async fn seed_property_with_lease(
    repo: &MemoryRepository,
    property: &str,
    lease: &str,
) -> LeaseId {
    repo.add_property(Property::new(PropertyId::from(property), property))
        .await;
    let lease_id = LeaseId::from(lease);
    repo.add_lease(Lease::new(
        lease_id.clone(),
        PropertyId::from(property),
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    ))
    .await;
    lease_id
}

pub async fn seed_payment(
    repo: &MemoryRepository,
    lease: &LeaseId,
    amount: i64,
    at: DateTime<Utc>,
) {
    repo.add_payment(Payment::new(
        PaymentId::new(),
        lease.clone(),
        Money::from_minor(amount),
        at,
    ))
    .await;
}

/// Wire an agent to a fresh property/lease pair with one in-period payment
pub async fn seed_agent_lease_with_rent(
    repo: &MemoryRepository,
    agent_id: &AgentId,
    property: &str,
    lease: &str,
    amount: i64,
    period_str: &str,
) -> LeaseId {
    let lease_id = seed_property_with_lease(repo, property, lease).await;
    repo.assign_lease(agent_id, &lease_id).await;
    seed_payment(repo, &lease_id, amount, mid_period(period_str)).await;
    lease_id
}

/// Wire a caretaker to a fresh property/lease pair with one in-period payment
pub async fn seed_caretaker_property_with_rent(
    repo: &MemoryRepository,
    caretaker_id: &CaretakerId,
    property: &str,
    lease: &str,
    amount: i64,
    period_str: &str,
) -> LeaseId {
    let lease_id = seed_property_with_lease(repo, property, lease).await;
    repo.assign_property(caretaker_id, &PropertyId::from(property))
        .await;
    seed_payment(repo, &lease_id, amount, mid_period(period_str)).await;
    lease_id
}
