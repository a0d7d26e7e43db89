//! Domain module
//!
//! Core domain types: events, outcomes, and errors.

pub mod error;
pub mod events;
pub mod outcome;

pub use error::LedgerError;
pub use events::Event;
pub use outcome::{AccountView, EventOutcome};
