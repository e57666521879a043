//! RentRoll Engine - Orchestration layer
//!
//! Provides high-level command orchestration that coordinates between the
//! pure calculation kernel and the persistence seam: single-subject
//! calculations, payout creation, bounded-concurrency agency summaries, and
//! sequential bulk processing with partial-failure reporting.

pub mod commands;

pub use commands::bulk::{
    bulk_process_agent_payouts, bulk_process_caretaker_payouts, BulkFailure, BulkOutcome,
};
pub use commands::calculate::{calculate_agent_commission, calculate_caretaker_commission};
pub use commands::payout::{
    auto_create_agent_payout, auto_create_caretaker_payout, AgentPayoutOutcome,
    CaretakerPayoutOutcome,
};
pub use commands::report::agency_payout_report;
pub use commands::summary::{agency_commission_summary, DEFAULT_FANOUT_LIMIT};
