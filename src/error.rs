//! # Error
//!
//! `error` is a module defining the failures the ledger can report.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AccountNumber, CustomerId};

/// Ledger operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Amount must be strictly positive
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Amount must not be negative
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// Not enough funds for the requested debit
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Crediting the amount would exceed the largest representable balance
    #[error("balance overflow: balance {balance}, amount {amount}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },

    /// No registered customer with this id
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// No open account with this number
    #[error("account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// A customer with this id is already registered
    #[error("customer already exists: {0}")]
    DuplicateCustomer(CustomerId),
}

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, BankError>;

impl BankError {
    /// Whether the input amount was rejected
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BankError::NonPositiveAmount(_) | BankError::NegativeAmount(_)
        )
    }

    /// Whether a customer or account lookup failed
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BankError::CustomerNotFound(_) | BankError::AccountNotFound(_)
        )
    }

    /// Whether a debit exceeded the available balance
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, BankError::InsufficientFunds { .. })
    }

    /// Whether a credit would push a balance past its upper bound
    pub fn is_balance_overflow(&self) -> bool {
        matches!(self, BankError::BalanceOverflow { .. })
    }
}
