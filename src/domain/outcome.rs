//! Event Outcomes
//!
//! Typed results of applying an event: one variant per result shape rather
//! than a struct of optional fields, so the encoded output carries exactly
//! the accounts the event touched.

use serde::{Deserialize, Serialize};

/// Post-event snapshot of a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: String,
    pub balance: i64,
}

/// Result of a successfully applied event.
///
/// Serialized untagged, so each variant emits only its own keys. Field order
/// is load-bearing for `Transferred`: `origin` precedes `destination` in the
/// encoded output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventOutcome {
    /// A deposit credited `destination`
    Deposited { destination: AccountView },

    /// A withdrawal debited `origin`
    Withdrawn { origin: AccountView },

    /// A transfer debited `origin` and credited `destination`
    Transferred {
        origin: AccountView,
        destination: AccountView,
    },
}

impl EventOutcome {
    /// The account view the event debited, if any
    pub fn origin(&self) -> Option<&AccountView> {
        match self {
            EventOutcome::Deposited { .. } => None,
            EventOutcome::Withdrawn { origin } => Some(origin),
            EventOutcome::Transferred { origin, .. } => Some(origin),
        }
    }

    /// The account view the event credited, if any
    pub fn destination(&self) -> Option<&AccountView> {
        match self {
            EventOutcome::Deposited { destination } => Some(destination),
            EventOutcome::Withdrawn { .. } => None,
            EventOutcome::Transferred { destination, .. } => Some(destination),
        }
    }
}
