//! Account
//!
//! A single ledger entry: an opaque string id and its integer balance.
//! Accounts are created implicitly by the first deposit referencing an
//! unseen id and are never deleted except by a ledger reset.

use crate::domain::AccountView;

/// An account held by the ledger.
///
/// The balance is signed: debits apply unchecked, and an overdrawn
/// account holds a negative balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: String,
    balance: i64,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: String) -> Self {
        Self { id, balance: 0 }
    }

    /// The account id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The current balance
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `amount` to the balance
    pub fn credit(&mut self, amount: u64) {
        self.balance += amount as i64;
    }

    /// Subtract `amount` from the balance
    pub fn debit(&mut self, amount: u64) {
        self.balance -= amount as i64;
    }

    /// Snapshot the account for an event outcome
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id.clone(),
            balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_starts_at_zero() {
        let account = Account::new("100".to_string());
        assert_eq!(account.id(), "100");
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn test_credit_debit() {
        let mut account = Account::new("100".to_string());
        account.credit(100);
        assert_eq!(account.balance(), 100);

        account.debit(30);
        assert_eq!(account.balance(), 70);
    }

    #[test]
    fn test_view_snapshots_current_state() {
        let mut account = Account::new("100".to_string());
        account.credit(10);

        let view = account.view();
        assert_eq!(view.id, "100");
        assert_eq!(view.balance, 10);

        account.credit(10);
        // Earlier snapshot is unaffected
        assert_eq!(view.balance, 10);
    }
}
