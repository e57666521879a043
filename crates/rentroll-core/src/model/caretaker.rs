use serde::{Deserialize, Serialize};

use rentroll_core_types::{AgencyId, CaretakerId, Money};

use super::policy::CommissionPolicy;

/// A caretaker maintains properties for an agency and is paid a base salary
/// plus commission under their policy.
///
/// Read-only from the engine's perspective, like [`super::Agent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caretaker {
    /// Unique identifier for this caretaker
    pub id: CaretakerId,

    /// Owning agency
    pub agency_id: AgencyId,

    /// Display name
    pub name: String,

    /// How this caretaker earns commission
    pub policy: CommissionPolicy,

    /// Monthly base salary, if any
    pub salary: Option<Money>,
}

impl Caretaker {
    pub fn new(
        id: CaretakerId,
        agency_id: AgencyId,
        name: impl Into<String>,
        policy: CommissionPolicy,
        salary: Option<Money>,
    ) -> Self {
        Self {
            id,
            agency_id,
            name: name.into(),
            policy,
            salary,
        }
    }

    /// Base salary, defaulting to zero when none is recorded
    pub fn salary_or_zero(&self) -> Money {
        self.salary.unwrap_or(Money::ZERO)
    }
}
