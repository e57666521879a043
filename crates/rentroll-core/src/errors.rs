use thiserror::Error;

/// Result type alias using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Canonical error taxonomy for commission operations
///
/// Each variant carries the identifiers needed to report the failure without
/// further lookups, and maps to a stable error code via [`LedgerError::code`].
/// An HTTP boundary translates these to status codes (not-found to 404,
/// duplicates to 409, validation to 400); that mapping lives outside this
/// crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // ===== Validation Errors =====
    /// Payment period string is malformed or out of the supported range
    #[error("Invalid payment period '{period}': {reason}")]
    InvalidPaymentPeriod { period: String, reason: String },

    /// Legacy commission record carries an unrecognized commission type
    #[error("Unknown commission type: {kind}")]
    UnknownCommissionType { kind: String },

    /// Legacy commission record carries a rate outside the representable range
    #[error("Invalid commission rate: {rate}")]
    InvalidCommissionRate { rate: i64 },

    // ===== Lookup Errors =====
    /// Agent not found in the store
    #[error("Agent not found: {agent_id}")]
    AgentNotFound { agent_id: String },

    /// Caretaker not found in the store
    #[error("Caretaker not found: {caretaker_id}")]
    CaretakerNotFound { caretaker_id: String },

    // ===== Payout Errors =====
    /// A payout for this agent and period already exists in the ledger
    #[error("Payout already exists for agent {agent_id} in period {period}")]
    DuplicateAgentPayout { agent_id: String, period: String },

    /// A payout for this caretaker and period already exists in the ledger
    #[error("Payout already exists for caretaker {caretaker_id} in period {period}")]
    DuplicateCaretakerPayout { caretaker_id: String, period: String },

    // ===== Persistence Errors =====
    /// A persistence call exceeded its bounded timeout; safe to retry
    #[error("Store operation timed out: {op}")]
    StoreTimeout { op: String },

    /// Unclassified persistence failure, propagated unchanged
    #[error("Persistence failure: {reason}")]
    Persistence { reason: String },
}

impl LedgerError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidPaymentPeriod { .. } => "ERR_INVALID_PAYMENT_PERIOD",
            LedgerError::UnknownCommissionType { .. } => "ERR_UNKNOWN_COMMISSION_TYPE",
            LedgerError::InvalidCommissionRate { .. } => "ERR_INVALID_COMMISSION_RATE",
            LedgerError::AgentNotFound { .. } => "ERR_AGENT_NOT_FOUND",
            LedgerError::CaretakerNotFound { .. } => "ERR_CARETAKER_NOT_FOUND",
            LedgerError::DuplicateAgentPayout { .. } => "ERR_DUPLICATE_AGENT_PAYOUT",
            LedgerError::DuplicateCaretakerPayout { .. } => "ERR_DUPLICATE_CARETAKER_PAYOUT",
            LedgerError::StoreTimeout { .. } => "ERR_STORE_TIMEOUT",
            LedgerError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }

    /// Whether a caller may retry the failed operation unchanged
    ///
    /// Only bounded-timeout failures are retryable; every other variant is
    /// deterministic for the same inputs and store state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::StoreTimeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = LedgerError::AgentNotFound {
            agent_id: "agent-1".to_string(),
        };
        assert_eq!(err.code(), "ERR_AGENT_NOT_FOUND");

        let err = LedgerError::DuplicateCaretakerPayout {
            caretaker_id: "ct-1".to_string(),
            period: "2024-02".to_string(),
        };
        assert_eq!(err.code(), "ERR_DUPLICATE_CARETAKER_PAYOUT");
    }

    #[test]
    fn test_display_includes_context() {
        let err = LedgerError::DuplicateAgentPayout {
            agent_id: "agent-9".to_string(),
            period: "2025-01".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("agent-9"));
        assert!(msg.contains("2025-01"));
    }

    #[test]
    fn test_only_timeout_is_retryable() {
        assert!(LedgerError::StoreTimeout {
            op: "agent".to_string()
        }
        .is_retryable());
        assert!(!LedgerError::Persistence {
            reason: "disk".to_string()
        }
        .is_retryable());
    }
}
