//! Post-hoc payout report from committed ledger records
//!
//! Unlike the live summary, this reads what the auto-create and bulk
//! workflows actually committed, so callers can reconcile calculated figures
//! against the ledger.

use std::time::Instant;

use rentroll_core::calc::{self, PayoutReport};
use rentroll_core::errors::Result;
use rentroll_core::period::PaymentPeriod;
use rentroll_core::{log_op_end, log_op_error, log_op_start};
use rentroll_core_types::AgencyId;
use rentroll_store::LedgerRepository;

/// Reduce an agency's committed payouts for a period to totals
///
/// ## Errors
///
/// Propagates repository failures unchanged.
pub async fn agency_payout_report(
    repo: &dyn LedgerRepository,
    agency_id: &AgencyId,
    period: PaymentPeriod,
) -> Result<PayoutReport> {
    log_op_start!(
        "agency_payout_report",
        agency_id = %agency_id,
        payment_period = %period
    );
    let start = Instant::now();

    let fetched = tokio::try_join!(
        repo.agent_payouts(agency_id, &period),
        repo.caretaker_payouts(agency_id, &period)
    );
    let (agent_payouts, caretaker_payouts) = match fetched {
        Ok(pair) => pair,
        Err(e) => {
            log_op_error!(
                "agency_payout_report",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(e);
        }
    };

    let report = calc::summarize_payouts(
        agency_id.clone(),
        period,
        &agent_payouts,
        &caretaker_payouts,
    );

    log_op_end!(
        "agency_payout_report",
        duration_ms = start.elapsed().as_millis() as u64,
        grand_total_minor = report.grand_total.minor_units()
    );
    Ok(report)
}
