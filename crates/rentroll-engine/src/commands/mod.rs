//! Engine command handlers with boundary logging
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for commission operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal
//! details.

pub mod bulk;
pub mod calculate;
pub mod payout;
pub mod report;
pub mod summary;
