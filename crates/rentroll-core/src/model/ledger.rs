//! Read graphs handed from the repository to the pure calculators
//!
//! The repository eager-loads the slice of the ledger a calculation needs:
//! active leases only, payments already restricted to the period window,
//! properties restricted to the caller's filter. The calculators never touch
//! the store.

use serde::{Deserialize, Serialize};

use rentroll_core_types::{Money, PropertyId};

use super::property::{Lease, Payment, Property};

/// Optional restriction of a calculation to a subset of properties.
///
/// An empty filter admits every property. A non-empty filter restricts both
/// aggregation and the provenance recorded on payout records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilter(Vec<PropertyId>);

impl PropertyFilter {
    /// The unrestricted filter (admits all properties)
    pub fn all() -> Self {
        Self(Vec::new())
    }

    /// Restrict to the given property ids
    pub fn only(ids: impl IntoIterator<Item = PropertyId>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Whether this filter admits every property
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a property passes this filter
    pub fn admits(&self, id: &PropertyId) -> bool {
        self.0.is_empty() || self.0.contains(id)
    }

    /// The restricted property ids (empty when unrestricted)
    pub fn ids(&self) -> &[PropertyId] {
        &self.0
    }
}

/// One property of a caretaker's portfolio, with its active leases and the
/// period's payments under each
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyLedger {
    pub property: Property,
    pub leases: Vec<LeaseSlice>,
}

/// One lease assignment of an agent, with its property and the period's
/// payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseLedger {
    pub lease: Lease,
    pub property: Property,
    pub payments: Vec<Payment>,
}

/// A lease and its in-window payments inside a [`PropertyLedger`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseSlice {
    pub lease: Lease,
    pub payments: Vec<Payment>,
}

impl PropertyLedger {
    /// Total rent collected across this property's leases
    pub fn rent_collected(&self) -> Money {
        self.leases
            .iter()
            .flat_map(|slice| slice.payments.iter())
            .map(|p| p.amount)
            .sum()
    }
}

impl LeaseLedger {
    /// Total rent collected under this lease
    pub fn rent_collected(&self) -> Money {
        self.payments.iter().map(|p| p.amount).sum()
    }
}
