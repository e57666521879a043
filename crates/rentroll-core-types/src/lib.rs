//! Core types shared across RentRoll facilities
//!
//! This crate provides foundational types used by the domain model,
//! persistence seam, and logging facility:
//!
//! - **Entity identifiers**: AgencyId, AgentId, CaretakerId, PropertyId,
//!   LeaseId, PaymentId, PayoutId
//! - **Money**: integer minor-unit currency amounts
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod money;
pub mod schema;

pub use ids::{AgencyId, AgentId, CaretakerId, LeaseId, PaymentId, PayoutId, PropertyId};
pub use money::Money;
