//! Ledger Events
//!
//! Events are requested mutations to apply to the ledger.
//! They are transient: decoded, applied, never stored.

use serde::{Deserialize, Serialize};

/// A mutation request against the ledger.
///
/// The wire shape is internally tagged: `{"type": "deposit", ...}` with only
/// the fields the event kind requires. `amount` is modeled as `u64` so a
/// negative amount is rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// Credit `amount` to `destination`, creating the account if unseen
    Deposit { destination: String, amount: u64 },

    /// Debit `amount` from an existing `origin`
    Withdraw { origin: String, amount: u64 },

    /// Move `amount` from an existing `origin` to `destination`,
    /// creating the destination if unseen
    Transfer {
        origin: String,
        destination: String,
        amount: u64,
    },
}

impl Event {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Deposit { .. } => "deposit",
            Event::Withdraw { .. } => "withdraw",
            Event::Transfer { .. } => "transfer",
        }
    }

    /// The amount this event moves
    pub fn amount(&self) -> u64 {
        match self {
            Event::Deposit { amount, .. } => *amount,
            Event::Withdraw { amount, .. } => *amount,
            Event::Transfer { amount, .. } => *amount,
        }
    }
}
