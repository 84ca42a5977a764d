//! # Transaction Log
//!
//! `transaction_log` is a module describing the record left by a completed deposit or
//! withdrawal.

use std::fmt;

use rust_decimal::Decimal;

use crate::{AccountNumber, TransactionId};

/// Kind of a logged transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Deposit => write!(f, "DEPOSIT"),
            TransactionType::Withdraw => write!(f, "WITHDRAW"),
        }
    }
}

/// Immutable record of one completed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLog {
    /// Transaction's ID
    id: TransactionId,
    /// Account the transaction was made on
    account: AccountNumber,
    /// Transaction amount
    amount: Decimal,
    /// Transaction type
    tx_type: TransactionType,
}

impl TransactionLog {
    pub(crate) fn new(
        id: TransactionId,
        account: AccountNumber,
        amount: Decimal,
        tx_type: TransactionType,
    ) -> Self {
        Self {
            id,
            account,
            amount,
            tx_type,
        }
    }

    /// Bank-wide transaction id
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Account the transaction was applied to
    pub fn account(&self) -> AccountNumber {
        self.account
    }

    /// Amount moved, always as given by the caller
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Deposit or withdrawal
    pub fn transaction_type(&self) -> TransactionType {
        self.tx_type
    }

    /// Render the report block printed for this transaction
    ///
    /// The owner's name is not stored on the log, so the caller supplies it.
    pub fn report(&self, owner_name: &str) -> String {
        format!(
            "Generating report...\n\
             Transaction Id: {}\n\
             Name: {}\n\
             Account Number: {}\n\
             Amount: {}\n\
             Transaction type: {}\n\
             Report complete.\n",
            self.id, owner_name, self.account, self.amount, self.tx_type
        )
    }
}
