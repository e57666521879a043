// Integration tests for single-subject commission calculations.

mod common;

use common::*;

use rentroll_core::errors::LedgerError;
use rentroll_core::model::{CommissionPolicy, PropertyFilter};
use rentroll_core_types::{AgentId, CaretakerId, Money, PropertyId};
use rentroll_engine::{calculate_agent_commission, calculate_caretaker_commission};
use rentroll_store::MemoryRepository;

// ---------------------------------------------------------------------------
// caretaker
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_caretaker_percentage_commission() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(&repo, "ct-1", CommissionPolicy::percentage(10), None).await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-a", "lease-a", 60_000, "2024-02").await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-b", "lease-b", 40_000, "2024-02").await;

    let result = calculate_caretaker_commission(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(result.total_rent_collected, Money::from_minor(100_000));
    assert_eq!(result.commission_amount, Money::from_minor(10_000));
    assert_eq!(result.total_amount, Money::from_minor(10_000));
    assert_eq!(result.properties.len(), 2);
}

#[tokio::test]
async fn test_caretaker_flat_rate_ignores_rent() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(
        &repo,
        "ct-1",
        CommissionPolicy::flat_rate_major(50),
        Some(Money::from_minor(80_000)),
    )
    .await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-a", "lease-a", 123_456, "2024-02").await;

    let result = calculate_caretaker_commission(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(result.commission_amount, Money::from_minor(5_000));
    assert_eq!(result.salary_amount, Money::from_minor(80_000));
    assert_eq!(result.total_amount, Money::from_minor(85_000));
}

#[tokio::test]
async fn test_caretaker_property_filter_excludes_other_properties() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(&repo, "ct-1", CommissionPolicy::percentage(10), None).await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-a", "lease-a", 60_000, "2024-02").await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-b", "lease-b", 40_000, "2024-02").await;

    let filter = PropertyFilter::only([PropertyId::from("prop-a")]);
    let result = calculate_caretaker_commission(&repo, &ct, period("2024-02"), &filter)
        .await
        .unwrap();

    assert_eq!(result.total_rent_collected, Money::from_minor(60_000));
    assert_eq!(result.commission_amount, Money::from_minor(6_000));
    assert_eq!(result.properties.len(), 1);
}

#[tokio::test]
async fn test_caretaker_payments_outside_period_excluded() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(&repo, "ct-1", CommissionPolicy::percentage(10), None).await;
    let lease =
        seed_caretaker_property_with_rent(&repo, &ct, "prop-a", "lease-a", 50_000, "2024-02")
            .await;
    // Payments in neighboring months must not leak in
    seed_payment(&repo, &lease, 70_000, mid_period("2024-01")).await;
    seed_payment(&repo, &lease, 90_000, mid_period("2024-03")).await;

    let result = calculate_caretaker_commission(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(result.total_rent_collected, Money::from_minor(50_000));
}

#[tokio::test]
async fn test_caretaker_not_found() {
    let repo = MemoryRepository::new();

    let err = calculate_caretaker_commission(
        &repo,
        &CaretakerId::from("missing"),
        period("2024-02"),
        &unrestricted(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LedgerError::CaretakerNotFound { .. }));
    assert_eq!(err.code(), "ERR_CARETAKER_NOT_FOUND");
}

#[tokio::test]
async fn test_caretaker_calculation_is_idempotent() {
    let repo = MemoryRepository::new();
    let ct = seed_caretaker(
        &repo,
        "ct-1",
        CommissionPolicy::percentage(7),
        Some(Money::from_minor(1_000)),
    )
    .await;
    seed_caretaker_property_with_rent(&repo, &ct, "prop-a", "lease-a", 33_333, "2024-02").await;

    let first = calculate_caretaker_commission(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();
    let second = calculate_caretaker_commission(&repo, &ct, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(first.total_rent_collected, second.total_rent_collected);
    assert_eq!(first.commission_amount, second.commission_amount);
    assert_eq!(first.total_amount, second.total_amount);
    assert_eq!(first.properties, second.properties);
}

// ---------------------------------------------------------------------------
// agent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_agent_percentage_per_lease() {
    let repo = MemoryRepository::new();
    let agent = seed_agent(&repo, "agent-1", CommissionPolicy::percentage(10)).await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-a", "lease-a", 50_000, "2024-02").await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-b", "lease-b", 30_000, "2024-02").await;

    let result = calculate_agent_commission(&repo, &agent, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(result.total_rent_collected, Money::from_minor(80_000));
    assert_eq!(result.commission_amount, Money::from_minor(8_000));
    assert_eq!(result.leases.len(), 2);
    assert_eq!(result.leases[0].commission + result.leases[1].commission,
        result.commission_amount);
}

#[tokio::test]
async fn test_agent_zero_rate_earns_nothing() {
    let repo = MemoryRepository::new();
    let agent = seed_agent(&repo, "agent-1", CommissionPolicy::percentage(0)).await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-a", "lease-a", 100_000, "2024-02").await;

    let result = calculate_agent_commission(&repo, &agent, period("2024-02"), &unrestricted())
        .await
        .unwrap();

    assert_eq!(result.total_rent_collected, Money::from_minor(100_000));
    assert_eq!(result.commission_amount, Money::ZERO);
    assert!(result.leases.iter().all(|l| l.commission.is_zero()));
}

#[tokio::test]
async fn test_agent_property_filter() {
    let repo = MemoryRepository::new();
    let agent = seed_agent(&repo, "agent-1", CommissionPolicy::percentage(10)).await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-a", "lease-a", 50_000, "2024-02").await;
    seed_agent_lease_with_rent(&repo, &agent, "prop-b", "lease-b", 30_000, "2024-02").await;

    let filter = PropertyFilter::only([PropertyId::from("prop-b")]);
    let result = calculate_agent_commission(&repo, &agent, period("2024-02"), &filter)
        .await
        .unwrap();

    assert_eq!(result.total_rent_collected, Money::from_minor(30_000));
    assert_eq!(result.leases.len(), 1);
}

#[tokio::test]
async fn test_agent_not_found() {
    let repo = MemoryRepository::new();

    let err = calculate_agent_commission(
        &repo,
        &AgentId::from("missing"),
        period("2024-02"),
        &unrestricted(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LedgerError::AgentNotFound { .. }));
}
