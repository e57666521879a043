//! Agency-wide bulk payout processing
//!
//! Subjects are processed **sequentially**, one insert-or-fail at a time.
//! A per-subject failure (typically a duplicate payout from an earlier run)
//! is recorded and the batch continues; callers always receive a complete
//! report with separate success and failure lists.

use std::time::Instant;

use serde::Serialize;

use rentroll_core::errors::Result;
use rentroll_core::model::PropertyFilter;
use rentroll_core::period::PaymentPeriod;
use rentroll_core::{log_op_end, log_op_error, log_op_start};
use rentroll_core_types::{AgencyId, Money};
use rentroll_store::LedgerRepository;

use super::payout::{
    auto_create_agent_payout, auto_create_caretaker_payout, AgentPayoutOutcome,
    CaretakerPayoutOutcome,
};

/// One subject the batch could not process
#[derive(Debug, Clone, Serialize)]
pub struct BulkFailure {
    pub subject_id: String,
    /// Stable error code (`ERR_DUPLICATE_AGENT_PAYOUT`, ...)
    pub code: String,
    pub error: String,
}

/// Result of a bulk run: every subject lands in exactly one list
#[derive(Debug, Clone, Serialize)]
pub struct BulkOutcome<T> {
    pub successful: Vec<T>,
    pub failed: Vec<BulkFailure>,
    pub total_processed: usize,
    /// Sum of the committed payouts only
    pub total_amount: Money,
}

impl<T> BulkOutcome<T> {
    fn empty() -> Self {
        Self {
            successful: Vec::new(),
            failed: Vec::new(),
            total_processed: 0,
            total_amount: Money::ZERO,
        }
    }
}

/// Create pending payouts for every active agent of an agency
///
/// ## Errors
///
/// Fails only when the agent roster itself cannot be fetched; per-agent
/// failures are reported in the outcome's `failed` list.
pub async fn bulk_process_agent_payouts(
    repo: &dyn LedgerRepository,
    agency_id: &AgencyId,
    period: PaymentPeriod,
) -> Result<BulkOutcome<AgentPayoutOutcome>> {
    log_op_start!(
        "bulk_process_agent_payouts",
        agency_id = %agency_id,
        payment_period = %period
    );
    let start = Instant::now();

    let agents = match repo.active_agents(agency_id).await {
        Ok(agents) => agents,
        Err(e) => {
            log_op_error!(
                "bulk_process_agent_payouts",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(e);
        }
    };

    let filter = PropertyFilter::all();
    let mut outcome = BulkOutcome::empty();
    outcome.total_processed = agents.len();

    for agent in &agents {
        match auto_create_agent_payout(repo, &agent.id, period, &filter).await {
            Ok(item) => {
                outcome.total_amount += item.payout.amount;
                outcome.successful.push(item);
            }
            Err(e) => outcome.failed.push(BulkFailure {
                subject_id: agent.id.to_string(),
                code: e.code().to_string(),
                error: e.to_string(),
            }),
        }
    }

    log_op_end!(
        "bulk_process_agent_payouts",
        duration_ms = start.elapsed().as_millis() as u64,
        succeeded = outcome.successful.len(),
        failed = outcome.failed.len()
    );
    Ok(outcome)
}

/// Create pending payouts for every caretaker of an agency
///
/// ## Errors
///
/// Fails only when the caretaker roster itself cannot be fetched; per-item
/// failures are reported in the outcome's `failed` list.
pub async fn bulk_process_caretaker_payouts(
    repo: &dyn LedgerRepository,
    agency_id: &AgencyId,
    period: PaymentPeriod,
) -> Result<BulkOutcome<CaretakerPayoutOutcome>> {
    log_op_start!(
        "bulk_process_caretaker_payouts",
        agency_id = %agency_id,
        payment_period = %period
    );
    let start = Instant::now();

    let caretakers = match repo.caretakers(agency_id).await {
        Ok(caretakers) => caretakers,
        Err(e) => {
            log_op_error!(
                "bulk_process_caretaker_payouts",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(e);
        }
    };

    let filter = PropertyFilter::all();
    let mut outcome = BulkOutcome::empty();
    outcome.total_processed = caretakers.len();

    for caretaker in &caretakers {
        match auto_create_caretaker_payout(repo, &caretaker.id, period, &filter).await {
            Ok(item) => {
                outcome.total_amount += item.payout.total_amount;
                outcome.successful.push(item);
            }
            Err(e) => outcome.failed.push(BulkFailure {
                subject_id: caretaker.id.to_string(),
                code: e.code().to_string(),
                error: e.to_string(),
            }),
        }
    }

    log_op_end!(
        "bulk_process_caretaker_payouts",
        duration_ms = start.elapsed().as_millis() as u64,
        succeeded = outcome.successful.len(),
        failed = outcome.failed.len()
    );
    Ok(outcome)
}
