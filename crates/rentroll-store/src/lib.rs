//! RentRoll Store - Persistence seam for the commission engine
//!
//! The engine consumes the ledger through the [`LedgerRepository`] trait:
//! nested read graphs (caretaker portfolios, agent lease assignments) and
//! atomic payout insertion. This crate ships two implementations:
//!
//! - [`MemoryRepository`]: the reference implementation backed by in-process
//!   maps, used by tests and embeddings
//! - [`TimeoutRepository`]: a decorator that bounds every call with a
//!   timeout, mapping elapsed timers to a retryable `StoreTimeout` error

pub mod memory;
pub mod repository;
pub mod timeout;

pub use memory::MemoryRepository;
pub use repository::LedgerRepository;
pub use timeout::TimeoutRepository;
