//! Pure commission calculators and agency-level reducers
//!
//! Every function in this module is a pure function of its inputs (plus a
//! `calculated_at` timestamp): the repository hands over a read graph and
//! the calculator folds it into a result. Recomputing with the same inputs
//! yields identical monetary figures.

mod agent;
mod caretaker;
mod summary;

pub use agent::{agent_commission, AgentCommission, LeaseBreakdown};
pub use caretaker::{caretaker_commission, CaretakerCommission, PropertyBreakdown};
pub use summary::{summarize_agency, summarize_payouts, AgencySummary, PayoutReport};
