//! Entity identifier newtypes
//!
//! Every entity in the ledger is addressed by its own id type so that an
//! agent id can never be passed where a caretaker id is expected. Ids are
//! opaque strings (UUIDv7 when generated here, arbitrary when imported from
//! an upstream system).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Generate a new random id using UUIDv7
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Get the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Create from an existing string (imported records keep their ids)
            pub fn from_string(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

entity_id!(
    /// Identifier for an agency (tenant of the platform)
    AgencyId
);
entity_id!(
    /// Identifier for an agent (manages leases)
    AgentId
);
entity_id!(
    /// Identifier for a caretaker (manages properties)
    CaretakerId
);
entity_id!(
    /// Identifier for a property
    PropertyId
);
entity_id!(
    /// Identifier for a lease
    LeaseId
);
entity_id!(
    /// Identifier for a tenant rent payment
    PaymentId
);
entity_id!(
    /// Identifier for a persisted payout record
    PayoutId
);
