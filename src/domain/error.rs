//! Ledger Error Types
//!
//! Pure domain errors that don't depend on the web layer.

use thiserror::Error;

/// The single ledger-level error.
///
/// Raised by withdraw/transfer when the referenced origin account does not
/// exist. It is a normal, recoverable outcome of operating on an unknown
/// account, surfaced verbatim to the boundary layer. Deposit never errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Origin account does not exist
    #[error("account not found: {0}")]
    AccountNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_not_found_display() {
        let err = LedgerError::AccountNotFound("200".to_string());
        assert_eq!(err.to_string(), "account not found: 200");
    }
}
