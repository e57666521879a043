use serde::{Deserialize, Serialize};

use rentroll_core_types::{AgencyId, AgentId};

use super::policy::CommissionPolicy;

/// An agent manages leases on behalf of an agency and earns commission on
/// the rent collected under them.
///
/// Agents are created and edited by agency administration; the commission
/// engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier for this agent
    pub id: AgentId,

    /// Owning agency
    pub agency_id: AgencyId,

    /// Display name
    pub name: String,

    /// How this agent earns commission
    pub policy: CommissionPolicy,

    /// Inactive agents are skipped by agency-wide operations
    pub active: bool,
}

impl Agent {
    /// Create an active agent with the given policy
    pub fn new(
        id: AgentId,
        agency_id: AgencyId,
        name: impl Into<String>,
        policy: CommissionPolicy,
    ) -> Self {
        Self {
            id,
            agency_id,
            name: name.into(),
            policy,
            active: true,
        }
    }
}
