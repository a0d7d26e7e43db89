//! bank_ledger Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod domain;
pub mod ledger;

// Private modules (used only by main.rs binary)
pub mod config;
mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use domain::{AccountView, Event, EventOutcome, LedgerError};
pub use ledger::{Ledger, SharedLedger};
