//! Ledger
//!
//! The authoritative in-memory store of account balances. Owns the mapping
//! from account id to [`Account`] and applies events against it: each event
//! either fully succeeds or fully fails with the ledger untouched. Transfer
//! checks origin existence strictly before any mutation, so a failed
//! transfer can never leave a debited origin without a credited destination.

pub mod account;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{AccountView, Event, EventOutcome, LedgerError};

pub use account::Account;

/// In-memory account store.
///
/// Created empty at process start, cleared entirely by [`Ledger::reset`],
/// mutated only through [`Ledger::apply`].
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the ledger in the process-wide shared handle
    pub fn into_shared(self) -> SharedLedger {
        SharedLedger(Arc::new(Mutex::new(self)))
    }

    /// Drop all accounts. Subsequent balance lookups on any id report
    /// not-found.
    pub fn reset(&mut self) {
        self.accounts.clear();
    }

    /// Current balance of `id`, or `None` if the id has never been
    /// deposited into. Pure read.
    pub fn balance(&self, id: &str) -> Option<i64> {
        self.accounts.get(id).map(Account::balance)
    }

    /// Apply an event, returning the post-event view of the touched
    /// account(s).
    ///
    /// # Errors
    /// `LedgerError::AccountNotFound` when a withdraw or transfer references
    /// an origin that does not exist. The check happens before any balance
    /// changes, so a failed event has no side effects.
    pub fn apply(&mut self, event: Event) -> Result<EventOutcome, LedgerError> {
        match event {
            Event::Deposit {
                destination,
                amount,
            } => {
                let destination = self.credit(destination, amount);
                Ok(EventOutcome::Deposited { destination })
            }

            Event::Withdraw { origin, amount } => {
                let account = self
                    .accounts
                    .get_mut(&origin)
                    .ok_or(LedgerError::AccountNotFound(origin))?;
                account.debit(amount);
                Ok(EventOutcome::Withdrawn {
                    origin: account.view(),
                })
            }

            Event::Transfer {
                origin,
                destination,
                amount,
            } => {
                let origin = {
                    let account = self
                        .accounts
                        .get_mut(&origin)
                        .ok_or(LedgerError::AccountNotFound(origin))?;
                    account.debit(amount);
                    account.view()
                };
                let destination = self.credit(destination, amount);
                Ok(EventOutcome::Transferred {
                    origin,
                    destination,
                })
            }
        }
    }

    /// Credit `amount` to `id`, creating the account at balance 0 first if
    /// it is unseen.
    fn credit(&mut self, id: String, amount: u64) -> AccountView {
        let account = self
            .accounts
            .entry(id)
            .or_insert_with_key(|id| Account::new(id.clone()));
        account.credit(amount);
        account.view()
    }
}

/// Process-wide handle to the single ledger instance.
///
/// All event applications and balance reads serialize through the one mutex;
/// no caller observes a partially applied transfer or a read racing a write.
/// Operations are in-memory and O(1), and the guard is never held across an
/// await point.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger(Arc<Mutex<Ledger>>);

impl SharedLedger {
    /// Create a handle to a fresh, empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the ledger. A poisoned mutex is recovered rather than
    /// propagated: the ledger holds no intermediate state that a panicking
    /// writer could have left behind.
    pub fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
