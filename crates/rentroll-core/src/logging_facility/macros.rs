//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! The engine layer owns lifecycle logging (start/end/error per command);
//! lower layers use only `tracing::debug!()` for internal details.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use rentroll_core::log_op_start;
/// log_op_start!("calculate_agent_commission");
/// log_op_start!("calculate_agent_commission", agent_id = "agent-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rentroll_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rentroll_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use rentroll_core::log_op_end;
/// log_op_end!("calculate_agent_commission", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rentroll_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rentroll_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use rentroll_core::{log_op_error, errors::LedgerError};
/// let err = LedgerError::AgentNotFound { agent_id: "agent-1".to_string() };
/// log_op_error!("calculate_agent_commission", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = rentroll_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            error = %$err,
            err.code = $err.code(),
        );
    };
}
