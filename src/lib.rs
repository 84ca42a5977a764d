//! # Bank Ledger
//!
//! `bank_ledger` is a library for managing customers, their accounts and the
//! transactions made on them through a single in-memory [`CentralBank`].

use std::fmt;

use serde::Serialize;

mod account;
mod central_bank;
mod customer;
mod error;
mod ids;
mod transaction_log;

pub use account::{Account, AccountSnapshot, AccountType};
pub use central_bank::CentralBank;
pub use customer::Customer;
pub use error::{BankError, Result};
pub use ids::Ids;
pub use transaction_log::{TransactionLog, TransactionType};

/// Customer's ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

/// Account's number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(pub u32);

/// Transaction's ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TransactionId(pub u32);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
