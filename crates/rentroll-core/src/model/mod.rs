//! Domain models for the commission ledger

mod agent;
mod caretaker;
mod ledger;
mod payout;
mod policy;
mod property;

pub use agent::Agent;
pub use caretaker::Caretaker;
pub use ledger::{LeaseLedger, LeaseSlice, PropertyFilter, PropertyLedger};
pub use payout::{AgentPayout, CaretakerPayout, PayoutStatus};
pub use policy::{CommissionPolicy, LegacyPolicyMode};
pub use property::{Lease, Payment, Property};
