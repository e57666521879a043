//! Single-subject commission calculations
//!
//! These commands are pure reads: fetch the subject and its period ledger,
//! fold it through the core calculators, return the result. No side effects.

use std::time::Instant;

use rentroll_core::calc::{self, AgentCommission, CaretakerCommission};
use rentroll_core::errors::{LedgerError, Result};
use rentroll_core::model::{Agent, Caretaker, PropertyFilter};
use rentroll_core::period::PaymentPeriod;
use rentroll_core::{log_op_end, log_op_error, log_op_start};
use rentroll_core_types::{AgentId, CaretakerId};
use rentroll_store::LedgerRepository;

/// Resolve an agent or fail with `AgentNotFound`
pub(crate) async fn fetch_agent(repo: &dyn LedgerRepository, id: &AgentId) -> Result<Agent> {
    repo.agent(id)
        .await?
        .ok_or_else(|| LedgerError::AgentNotFound {
            agent_id: id.to_string(),
        })
}

/// Resolve a caretaker or fail with `CaretakerNotFound`
pub(crate) async fn fetch_caretaker(
    repo: &dyn LedgerRepository,
    id: &CaretakerId,
) -> Result<Caretaker> {
    repo.caretaker(id)
        .await?
        .ok_or_else(|| LedgerError::CaretakerNotFound {
            caretaker_id: id.to_string(),
        })
}

/// Calculate an agent's commission for a period
///
/// ## Errors
///
/// - `AgentNotFound`: the id does not resolve
/// - `StoreTimeout` / `Persistence`: propagated from the repository
pub async fn calculate_agent_commission(
    repo: &dyn LedgerRepository,
    agent_id: &AgentId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<AgentCommission> {
    log_op_start!(
        "calculate_agent_commission",
        agent_id = %agent_id,
        payment_period = %period
    );
    let start = Instant::now();

    let result = calculate_agent_commission_impl(repo, agent_id, period, filter)
        .await
        .map_err(|e| {
            log_op_error!(
                "calculate_agent_commission",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "calculate_agent_commission",
        duration_ms = start.elapsed().as_millis() as u64,
        commission_minor = result.commission_amount.minor_units()
    );
    Ok(result)
}

async fn calculate_agent_commission_impl(
    repo: &dyn LedgerRepository,
    agent_id: &AgentId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<AgentCommission> {
    let agent = fetch_agent(repo, agent_id).await?;
    let assignments = repo
        .agent_assignments(agent_id, &period.window(), filter)
        .await?;
    Ok(calc::agent_commission(&agent, period, &assignments))
}

/// Calculate a caretaker's commission for a period
///
/// ## Errors
///
/// - `CaretakerNotFound`: the id does not resolve
/// - `StoreTimeout` / `Persistence`: propagated from the repository
pub async fn calculate_caretaker_commission(
    repo: &dyn LedgerRepository,
    caretaker_id: &CaretakerId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<CaretakerCommission> {
    log_op_start!(
        "calculate_caretaker_commission",
        caretaker_id = %caretaker_id,
        payment_period = %period
    );
    let start = Instant::now();

    let result = calculate_caretaker_commission_impl(repo, caretaker_id, period, filter)
        .await
        .map_err(|e| {
            log_op_error!(
                "calculate_caretaker_commission",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "calculate_caretaker_commission",
        duration_ms = start.elapsed().as_millis() as u64,
        total_minor = result.total_amount.minor_units()
    );
    Ok(result)
}

async fn calculate_caretaker_commission_impl(
    repo: &dyn LedgerRepository,
    caretaker_id: &CaretakerId,
    period: PaymentPeriod,
    filter: &PropertyFilter,
) -> Result<CaretakerCommission> {
    let caretaker = fetch_caretaker(repo, caretaker_id).await?;
    let portfolio = repo
        .caretaker_portfolio(caretaker_id, &period.window(), filter)
        .await?;
    Ok(calc::caretaker_commission(&caretaker, period, &portfolio))
}
