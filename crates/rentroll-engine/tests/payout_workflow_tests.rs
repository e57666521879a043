// Integration tests for the auto-create payout workflows.

mod common;

use common::*;

use rentroll_core::errors::LedgerError;
use rentroll_core::model::{CommissionPolicy, PayoutStatus, PropertyFilter};
use rentroll_core_types::{LeaseId, Money, PropertyId};
use rentroll_engine::{auto_create_agent_payout, auto_create_caretaker_payout};
use rentroll_store::{LedgerRepository, MemoryRepository};

#[tokio::test]
async fn test_agent_payout_created_once() {
    let repo = MemoryRepository::new();
    let agent = seed_agent(&repo, "agent-1", CommissionPolicy::percentage(10)).await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-a", "lease-a", 100_000, "2024-02").await;

    let outcome = auto_create_agent_payout(&repo, &agent, period("2024-02"), &unrestricted())
        .await
        .unwrap();
    assert_eq!(outcome.payout.amount, Money::from_minor(10_000));

    let err = auto_create_agent_payout(&repo, &agent, period("2024-02"), &unrestricted())
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateAgentPayout { .. }));
    assert_eq!(err.code(), "ERR_DUPLICATE_AGENT_PAYOUT");
    assert!(!err.is_retryable());

    // Only the first record survives
    let persisted = repo
        .agent_payouts(&agency(), &period("2024-02"))
        .await
        .unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, outcome.payout.id);
}

#[tokio::test]
async fn test_agent_payout_records_provenance() {
    let repo = MemoryRepository::new();
    let agent = seed_agent(&repo, "agent-1", CommissionPolicy::percentage(10)).await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-a", "lease-a", 50_000, "2024-02").await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-b", "lease-b", 30_000, "2024-02").await;

    let filter = PropertyFilter::only([PropertyId::from("prop-a")]);
    let outcome = auto_create_agent_payout(&repo, &agent, period("2024-02"), &filter)
        .await
        .unwrap();

    assert_eq!(outcome.payout.status, PayoutStatus::Pending);
    assert_eq!(outcome.payout.agency_id, agency());
    assert_eq!(outcome.payout.rent_collected, Money::from_minor(50_000));
    assert_eq!(outcome.payout.lease_ids, vec![LeaseId::from("lease-a")]);
    assert_eq!(outcome.payout.property_filter, filter);
    assert_eq!(
        outcome.payout.amount,
        outcome.calculation.commission_amount
    );
}

#[tokio::test]
async fn test_agent_payout_same_agent_different_periods() {
    let repo = MemoryRepository::new();
    let agent = seed_agent(&repo, "agent-1", CommissionPolicy::percentage(10)).await;
    let lease = seed_agent_lease_with_rent(&repo, &agent, "prop-a", "lease-a", 40_000, "2024-02")
        .await;
    seed_payment(&repo, &lease, 60_000, mid_period("2024-03")).await;

    let feb = auto_create_agent_payout(&repo, &agent, period("2024-02"), &unrestricted())
        .await
        .unwrap();
    let mar = auto_create_agent_payout(&repo, &agent, period("2024-03"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(feb.payout.amount, Money::from_minor(4_000));
    assert_eq!(mar.payout.amount, Money::from_minor(6_000));
}

#[tokio::test]
async fn test_agent_payout_unknown_agent() {
    let repo = MemoryRepository::new();
    let err = auto_create_agent_payout(
        &repo,
        &rentroll_core_types::AgentId::from("ghost"),
        period("2024-02"),
        &unrestricted(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, LedgerError::AgentNotFound { .. }));
}

#[tokio::test]
async fn test_caretaker_payout_splits_salary_and_commission() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(
        &repo,
        "ct-1",
        CommissionPolicy::percentage(5),
        Some(Money::from_minor(90_000)),
    )
    .await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-a", "lease-a", 200_000, "2024-02").await;

    let outcome = auto_create_caretaker_payout(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(outcome.payout.salary_amount, Money::from_minor(90_000));
    assert_eq!(outcome.payout.commission_amount, Money::from_minor(10_000));
    assert_eq!(outcome.payout.total_amount, Money::from_minor(100_000));
    assert_eq!(outcome.payout.status, PayoutStatus::Pending);

    let persisted = repo
        .caretaker_payouts(&agency(), &period("2024-02"))
        .await
        .unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].total_amount, Money::from_minor(100_000));
}

#[tokio::test]
async fn test_caretaker_payout_duplicate_rejected() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(&repo, "ct-1", CommissionPolicy::percentage(10), None).await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-a", "lease-a", 10_000, "2024-02").await;

    auto_create_caretaker_payout(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();
    let err = auto_create_caretaker_payout(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateCaretakerPayout { .. }));
}

#[tokio::test]
async fn test_payout_with_no_activity_is_zero_but_recorded() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(&repo, "ct-1", CommissionPolicy::percentage(10), None).await;

    let outcome = auto_create_caretaker_payout(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(outcome.payout.total_amount, Money::ZERO);
    assert!(repo
        .caretaker_payout_exists(&ct, &period("2024-02"))
        .await
        .unwrap());
}
