//! # Account
//!
//! `account` is a module providing functionality for operating on a single account.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{BankError, Result},
    ids::Sequence,
    AccountNumber, CustomerId, TransactionId, TransactionLog, TransactionType,
};

/// Kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Current,
    Savings,
    /// Valid, but never offered by the console menu
    Credit,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Current => write!(f, "CURRENT"),
            AccountType::Savings => write!(f, "SAVINGS"),
            AccountType::Credit => write!(f, "CREDIT"),
        }
    }
}

/// Serializable snapshot of an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AccountSnapshot {
    /// Account's number
    #[serde(rename = "account")]
    pub number: AccountNumber,
    /// Owner's ID
    pub owner: CustomerId,
    /// Account type
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Current balance
    pub balance: Decimal,
}

/// Customer's account
#[derive(Debug, Clone)]
pub struct Account {
    /// Account's number
    number: AccountNumber,
    /// Owning customer's ID
    owner: CustomerId,
    /// Current balance, never negative
    balance: Decimal,
    /// Account type
    account_type: AccountType,
    /// Completed deposits and withdrawals in chronological order
    transaction_log: Vec<TransactionLog>,
}

impl Account {
    /// Create a new empty account
    pub(crate) fn new(
        number: AccountNumber,
        owner: CustomerId,
        account_type: AccountType,
    ) -> Self {
        Self {
            number,
            owner,
            balance: Decimal::ZERO,
            account_type,
            transaction_log: Vec::new(),
        }
    }

    /// Account's number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// Owning customer's ID
    pub fn owner(&self) -> CustomerId {
        self.owner
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Account type
    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Completed deposits and withdrawals in chronological order
    pub fn transaction_log(&self) -> &[TransactionLog] {
        &self.transaction_log
    }

    /// Deposit funds into the account
    pub(crate) fn deposit(
        &mut self,
        txids: &mut Sequence,
        amount: Decimal,
    ) -> Result<TransactionId> {
        // only strictly positive deposits
        if amount <= Decimal::ZERO {
            return Err(BankError::NonPositiveAmount(amount));
        }
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        self.balance = new_balance;
        Ok(self.record(txids, amount, TransactionType::Deposit))
    }

    /// Withdraw funds from the account
    ///
    /// A zero withdrawal is accepted and logged.
    pub(crate) fn withdraw(
        &mut self,
        txids: &mut Sequence,
        amount: Decimal,
    ) -> Result<TransactionId> {
        if amount < Decimal::ZERO {
            return Err(BankError::NegativeAmount(amount));
        }
        // if insufficient funds, reject
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.record(txids, amount, TransactionType::Withdraw))
    }

    /// Override the balance without logging
    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    fn record(
        &mut self,
        txids: &mut Sequence,
        amount: Decimal,
        tx_type: TransactionType,
    ) -> TransactionId {
        let id = TransactionId(txids.advance());
        self.transaction_log
            .push(TransactionLog::new(id, self.number, amount, tx_type));
        id
    }

    /// Get a snapshot of the account
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            number: self.number,
            owner: self.owner,
            account_type: self.account_type,
            balance: self.balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account details:")?;
        writeln!(f, "Account No: {}", self.number)?;
        writeln!(f, "Owner: {}", self.owner)?;
        writeln!(f, "Balance: {}", self.balance)?;
        writeln!(f, "Account Type: {}", self.account_type)
    }
}
