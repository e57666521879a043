//! Auto-create payout workflows
//!
//! Calculation plus commitment: compute the period's commission, then write
//! a `Pending` payout record carrying the contributing lease ids and the
//! property filter in effect.
//!
//! Uniqueness on the `(subject, period)` key is owned by the store: the
//! insert is atomic insert-if-absent. The existence check beforehand is a
//! fast path that turns the common duplicate case into an early, cheap
//! error; a racer that slips past it still loses at insert time.

use std::time::Instant;

use serde::Serialize;

use rentroll_core::calc::{self, AgentCommission, CaretakerCommission};
use rentroll_core::errors::{LedgerError, Result};
use rentroll_core::model::{AgentPayout, CaretakerPayout, PropertyFilter};
use rentroll_core::period::PaymentPeriod;
use rentroll_core::{log_op_end, log_op_error, log_op_start};
use rentroll_core_types::{AgentId, CaretakerId};
use rentroll_store::LedgerRepository;

use super::calculate::{fetch_agent, fetch_caretaker};

/// A committed agent payout together with the calculation that produced it
#[derive(Debug, Clone, Serialize)]
pub struct AgentPayoutOutcome {
    pub payout: AgentPayout,
    pub calculation: AgentCommission,
}

/// A committed caretaker payout together with the calculation that produced it
#[derive(Debug, Clone, Serialize)]
pub struct CaretakerPayoutOutcome {
    pub payout: CaretakerPayout,
    pub calculation: CaretakerCommission,
}

/// Calculate and persist a pending agent payout for the period
///
/// ## Errors
///
/// - `AgentNotFound`: the id does not resolve
/// - `DuplicateAgentPayout`: a payout for `(agent, period)` already exists
/// - `StoreTimeout` / `Persistence`: propagated from the repository
pub async fn auto_create_agent_payout(
    repo: &dyn LedgerRepository,
    agent_id: &AgentId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<AgentPayoutOutcome> {
    log_op_start!(
        "auto_create_agent_payout",
        agent_id = %agent_id,
        payment_period = %period
    );
    let start = Instant::now();

    let result = auto_create_agent_payout_impl(repo, agent_id, period, filter)
        .await
        .map_err(|e| {
            log_op_error!(
                "auto_create_agent_payout",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "auto_create_agent_payout",
        duration_ms = start.elapsed().as_millis() as u64,
        payout_id = %result.payout.id,
        amount_minor = result.payout.amount.minor_units()
    );
    Ok(result)
}

async fn auto_create_agent_payout_impl(
    repo: &dyn LedgerRepository,
    agent_id: &AgentId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<AgentPayoutOutcome> {
    let agent = fetch_agent(repo, agent_id).await?;

    // Fast path; the authoritative check is the atomic insert below
    if repo.agent_payout_exists(agent_id, &period).await? {
        return Err(LedgerError::DuplicateAgentPayout {
            agent_id: agent_id.to_string(),
            period: period.to_string(),
        });
    }

    let assignments = repo
        .agent_assignments(agent_id, &period.window(), filter)
        .await?;
    let calculation = calc::agent_commission(&agent, period, &assignments);

    let payout = AgentPayout::from_calculation(&calculation, agent.agency_id, filter.clone());
    repo.insert_agent_payout(payout.clone()).await?;

    Ok(AgentPayoutOutcome {
        payout,
        calculation,
    })
}

/// Calculate and persist a pending caretaker payout for the period
///
/// ## Errors
///
/// - `CaretakerNotFound`: the id does not resolve
/// - `DuplicateCaretakerPayout`: a payout for `(caretaker, period)` already exists
/// - `StoreTimeout` / `Persistence`: propagated from the repository
pub async fn auto_create_caretaker_payout(
    repo: &dyn LedgerRepository,
    caretaker_id: &CaretakerId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<CaretakerPayoutOutcome> {
    log_op_start!(
        "auto_create_caretaker_payout",
        caretaker_id = %caretaker_id,
        payment_period = %period
    );
    let start = Instant::now();

    let result = auto_create_caretaker_payout_impl(repo, caretaker_id, period, filter)
        .await
        .map_err(|e| {
            log_op_error!(
                "auto_create_caretaker_payout",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "auto_create_caretaker_payout",
        duration_ms = start.elapsed().as_millis() as u64,
        payout_id = %result.payout.id,
        total_minor = result.payout.total_amount.minor_units()
    );
    Ok(result)
}

async fn auto_create_caretaker_payout_impl(
    repo: &dyn LedgerRepository,
    caretaker_id: &CaretakerId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<CaretakerPayoutOutcome> {
    let caretaker = fetch_caretaker(repo, caretaker_id).await?;

    if repo.caretaker_payout_exists(caretaker_id, &period).await? {
        return Err(LedgerError::DuplicateCaretakerPayout {
            caretaker_id: caretaker_id.to_string(),
            period: period.to_string(),
        });
    }

    let portfolio = repo
        .caretaker_portfolio(caretaker_id, &period.window(), filter)
        .await?;
    let calculation = calc::caretaker_commission(&caretaker, period, &portfolio);

    let payout =
        CaretakerPayout::from_calculation(&calculation, caretaker.agency_id, filter.clone());
    repo.insert_caretaker_payout(payout.clone()).await?;

    Ok(CaretakerPayoutOutcome {
        payout,
        calculation,
    })
}
