//! # Ids
//!
//! `ids` is a module providing the monotonic id sequences owned by a bank.

use crate::{AccountNumber, CustomerId, TransactionId};

/// Monotonic counter, never reset and never reused
#[derive(Debug, Default, Clone)]
pub(crate) struct Sequence(u32);

impl Sequence {
    /// Take the next value
    pub(crate) fn advance(&mut self) -> u32 {
        let value = self.0;
        self.0 += 1;
        value
    }
}

/// Id sequences for customers, accounts and transactions
#[derive(Debug, Default, Clone)]
pub struct Ids {
    customers: Sequence,
    accounts: Sequence,
    transactions: Sequence,
}

impl Ids {
    /// Create sequences starting from zero
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_customer(&mut self) -> CustomerId {
        CustomerId(self.customers.advance())
    }

    pub(crate) fn next_account(&mut self) -> AccountNumber {
        AccountNumber(self.accounts.advance())
    }

    /// Transaction ids are drawn by accounts only after validation passes
    pub(crate) fn transactions(&mut self) -> &mut Sequence {
        &mut self.transactions
    }
}
