//! RentRoll Core - Commission calculation kernel
//!
//! This crate provides the foundational data structures and pure operations
//! for the RentRoll commission engine, including:
//! - Agent, caretaker, property, lease, and payment models
//! - The shared `CommissionPolicy` variant type (percentage or flat stipend)
//! - Payment-period parsing and calendar-month window resolution
//! - Pure commission calculators and agency-level reducers
//! - The canonical error taxonomy with stable error codes
//!
//! Everything here is synchronous and side-effect free; fetching and
//! persistence live behind the repository seam in `rentroll-store`, and
//! orchestration in `rentroll-engine`.

pub mod calc;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod period;

// Re-export commonly used types
pub use errors::{LedgerError, Result};
pub use model::{
    Agent, AgentPayout, Caretaker, CaretakerPayout, CommissionPolicy, Lease, LeaseLedger,
    LeaseSlice, LegacyPolicyMode, Payment, PayoutStatus, Property, PropertyFilter, PropertyLedger,
};
pub use period::{PaymentPeriod, PeriodWindow};
