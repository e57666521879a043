use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core_types::{LeaseId, Money, PaymentId, PropertyId};

/// A rentable property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
}

impl Property {
    pub fn new(id: PropertyId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// A tenancy agreement on a property.
///
/// A lease with no recorded end date is active; only active leases
/// contribute to caretaker commission aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: LeaseId,
    pub property_id: PropertyId,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Lease {
    pub fn new(id: LeaseId, property_id: PropertyId, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            property_id,
            started_at,
            ended_at: None,
        }
    }

    /// Whether this lease is still running (no end date recorded)
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// A rent payment made by a tenant against a lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub lease_id: LeaseId,
    pub amount: Money,
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(id: PaymentId, lease_id: LeaseId, amount: Money, paid_at: DateTime<Utc>) -> Self {
        Self {
            id,
            lease_id,
            amount,
            paid_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lease_active_until_ended() {
        let mut lease = Lease::new(
            LeaseId::from("lease-1"),
            PropertyId::from("prop-1"),
            Utc::now(),
        );
        assert!(lease.is_active());

        lease.ended_at = Some(Utc::now());
        assert!(!lease.is_active());
    }
}
