//! Live agency-wide commission summary
//!
//! Fans out one calculation per subject with bounded concurrency. The cap
//! bounds outstanding repository queries for large agencies; the source
//! system's unlimited fan-out is deliberately not reproduced. The fan-out is
//! fail-fast: the first failing subject aborts the summary.

use std::time::Instant;

use futures::stream::{self, StreamExt, TryStreamExt};

use rentroll_core::calc::{self, AgencySummary, AgentCommission, CaretakerCommission};
use rentroll_core::errors::Result;
use rentroll_core::model::PropertyFilter;
use rentroll_core::period::PaymentPeriod;
use rentroll_core::{log_op_end, log_op_error, log_op_start};
use rentroll_core_types::AgencyId;
use rentroll_store::LedgerRepository;

use super::calculate::{calculate_agent_commission, calculate_caretaker_commission};

/// Default cap on concurrent per-subject calculations
pub const DEFAULT_FANOUT_LIMIT: usize = 8;

/// Compute live commission totals for a whole agency
///
/// Runs the agent and caretaker calculators for every subject of the agency
/// with at most `fanout_limit` calculations in flight, then reduces to
/// agency totals. Pure aggregation; nothing is persisted.
///
/// ## Errors
///
/// Propagates the first per-subject or roster-fetch failure.
pub async fn agency_commission_summary(
    repo: &dyn LedgerRepository,
    agency_id: &AgencyId,
    period: PaymentPeriod,
    fanout_limit: usize,
) -> Result<AgencySummary> {
    log_op_start!(
        "agency_commission_summary",
        agency_id = %agency_id,
        payment_period = %period
    );
    let start = Instant::now();

    let result = agency_commission_summary_impl(repo, agency_id, period, fanout_limit)
        .await
        .map_err(|e| {
            log_op_error!(
                "agency_commission_summary",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "agency_commission_summary",
        duration_ms = start.elapsed().as_millis() as u64,
        grand_total_minor = result.grand_total.minor_units()
    );
    Ok(result)
}

async fn agency_commission_summary_impl(
    repo: &dyn LedgerRepository,
    agency_id: &AgencyId,
    period: PaymentPeriod,
    fanout_limit: usize,
) -> Result<AgencySummary> {
    let limit = fanout_limit.max(1);
    let (agents, caretakers) =
        tokio::try_join!(repo.active_agents(agency_id), repo.caretakers(agency_id))?;

    let filter = PropertyFilter::all();

    let agent_calcs: Vec<AgentCommission> = stream::iter(agents.iter())
        .map(|agent| {
            let filter = &filter;
            async move { calculate_agent_commission(repo, &agent.id, period, filter).await }
        })
        .buffer_unordered(limit)
        .try_collect()
        .await?;

    let caretaker_calcs: Vec<CaretakerCommission> = stream::iter(caretakers.iter())
        .map(|caretaker| {
            let filter = &filter;
            async move {
                calculate_caretaker_commission(repo, &caretaker.id, period, filter).await
            }
        })
        .buffer_unordered(limit)
        .try_collect()
        .await?;

    Ok(calc::summarize_agency(
        agency_id.clone(),
        period,
        &agent_calcs,
        &caretaker_calcs,
    ))
}
