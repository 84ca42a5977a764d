//! # Central Bank
//!
//! `central_bank` is a module providing functionality for managing multiple accounts for
//! multiple customers.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    error::{BankError, Result},
    Account, AccountNumber, AccountSnapshot, AccountType, Customer, CustomerId, Ids,
    TransactionId, TransactionLog,
};

/// Registry owning every customer and account
#[derive(Debug, Default)]
pub struct CentralBank {
    /// Registered customers by id
    customers: BTreeMap<CustomerId, Customer>,
    /// Open accounts by number
    accounts: BTreeMap<AccountNumber, Account>,
    /// Account numbers held by each customer, in creation order
    holdings: HashMap<CustomerId, Vec<AccountNumber>>,
    /// Id sequences, never reset
    ids: Ids,
}

impl CentralBank {
    /// Create a new empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty bank drawing ids from `ids`
    pub fn with_ids(ids: Ids) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// Build a customer with the next id without registering it
    pub fn new_customer(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Customer {
        Customer::new(self.ids.next_customer(), name, address, date_of_birth)
    }

    /// Register a customer
    pub fn add_customer(&mut self, customer: Customer) -> Result<CustomerId> {
        let id = customer.id();
        // ensure customer id is unique
        if self.customers.contains_key(&id) {
            warn!(customer = %id, "duplicate customer rejected");
            return Err(BankError::DuplicateCustomer(id));
        }
        self.customers.insert(id, customer);
        debug!(customer = %id, "customer added");
        Ok(id)
    }

    /// Deregister a customer, returning the registered record
    ///
    /// The customer's accounts stay open.
    pub fn remove_customer(&mut self, id: CustomerId) -> Result<Customer> {
        let customer = self.customers.remove(&id).ok_or_else(|| {
            warn!(customer = %id, "removal of unknown customer rejected");
            BankError::CustomerNotFound(id)
        })?;
        debug!(customer = %id, "customer removed");
        Ok(customer)
    }

    /// Registered customer by id
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Registered customer by id, for updating details
    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.get_mut(&id)
    }

    /// All registered customers, by id
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.values()
    }

    /// Open account by number
    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// All open accounts, by number
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.values()
    }

    /// Open accounts held by a customer, in creation order
    pub fn customer_accounts(
        &self,
        id: CustomerId,
    ) -> impl Iterator<Item = &Account> + '_ {
        self.holdings
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(move |number| self.accounts.get(number))
    }

    /// Open a new empty account for a customer
    ///
    /// The customer does not have to be registered.
    pub fn create_account(
        &mut self,
        customer: &Customer,
        account_type: AccountType,
    ) -> AccountNumber {
        let number = self.ids.next_account();
        self.accounts
            .insert(number, Account::new(number, customer.id(), account_type));
        self.holdings.entry(customer.id()).or_default().push(number);
        debug!(
            customer = %customer.id(),
            account = %number,
            %account_type,
            "account created"
        );
        number
    }

    /// Close an account on behalf of a registered customer
    ///
    /// Neither ownership nor existence of the account is checked; closing an
    /// unknown number succeeds without effect.
    pub fn close_account(
        &mut self,
        customer: &Customer,
        number: AccountNumber,
    ) -> Result<()> {
        if !self.customers.contains_key(&customer.id()) {
            warn!(
                customer = %customer.id(),
                account = %number,
                "close by unknown customer rejected"
            );
            return Err(BankError::CustomerNotFound(customer.id()));
        }
        let owner = self
            .accounts
            .remove(&number)
            .map_or(customer.id(), |account| account.owner());
        if let Some(numbers) = self.holdings.get_mut(&owner) {
            numbers.retain(|held| *held != number);
        }
        debug!(customer = %customer.id(), account = %number, "account closed");
        Ok(())
    }

    /// Deposit funds into an account
    pub fn deposit(&mut self, number: AccountNumber, amount: Decimal) -> Result<TransactionId> {
        if amount <= Decimal::ZERO {
            warn!(account = %number, %amount, "deposit rejected: non-positive amount");
            return Err(BankError::NonPositiveAmount(amount));
        }
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::AccountNotFound(number))
            .inspect_err(|err| warn!(%err, "deposit rejected"))?;
        let txid = account
            .deposit(self.ids.transactions(), amount)
            .inspect_err(|err| warn!(account = %number, %err, "deposit rejected"))?;
        debug!(account = %number, %amount, tx = %txid, "deposit");
        Ok(txid)
    }

    /// Withdraw funds from an account
    pub fn withdraw(&mut self, number: AccountNumber, amount: Decimal) -> Result<TransactionId> {
        if amount <= Decimal::ZERO {
            warn!(account = %number, %amount, "withdrawal rejected: non-positive amount");
            return Err(BankError::NonPositiveAmount(amount));
        }
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::AccountNotFound(number))
            .inspect_err(|err| warn!(%err, "withdrawal rejected"))?;
        let txid = account
            .withdraw(self.ids.transactions(), amount)
            .inspect_err(|err| warn!(account = %number, %err, "withdrawal rejected"))?;
        debug!(account = %number, %amount, tx = %txid, "withdrawal");
        Ok(txid)
    }

    /// Move funds between two accounts
    ///
    /// Both balances change together or not at all. Transfers are not written to
    /// the accounts' transaction logs.
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
    ) -> Result<()> {
        self.prepare_transfer(from, to, amount)
            .inspect_err(|err| warn!(%from, %to, %amount, %err, "transfer rejected"))
            .map(|(debited, credited)| {
                if let Some(account) = self.accounts.get_mut(&from) {
                    account.set_balance(debited);
                }
                if let Some(account) = self.accounts.get_mut(&to) {
                    account.set_balance(credited);
                }
                debug!(%from, %to, %amount, "transfer");
            })
    }

    /// Validate a transfer and compute the resulting balances
    fn prepare_transfer(
        &self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
    ) -> Result<(Decimal, Decimal)> {
        if amount <= Decimal::ZERO {
            return Err(BankError::NonPositiveAmount(amount));
        }
        let source = self
            .accounts
            .get(&from)
            .ok_or(BankError::AccountNotFound(from))?;
        let destination = self
            .accounts
            .get(&to)
            .ok_or(BankError::AccountNotFound(to))?;
        // full-balance transfers are allowed
        if source.balance() < amount {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: source.balance(),
            });
        }
        // a self-transfer nets out and cannot overflow
        if from == to {
            return Ok((source.balance(), source.balance()));
        }
        let credited = destination
            .balance()
            .checked_add(amount)
            .ok_or(BankError::BalanceOverflow {
                balance: destination.balance(),
                amount,
            })?;
        Ok((source.balance() - amount, credited))
    }

    /// Transaction logs of every account the customer holds
    ///
    /// Accounts come in creation order, each account's entries in chronological order.
    pub fn transaction_history(&self, customer: &Customer) -> Vec<&TransactionLog> {
        self.customer_accounts(customer.id())
            .flat_map(|account| account.transaction_log())
            .collect()
    }

    /// Render the customer's details and accounts
    pub fn customer_summary(&self, customer: &Customer) -> String {
        let mut summary = format!(
            "Customer Summary for {}\n{}\n",
            customer.name(),
            customer.address()
        );
        let mut count = 0;
        for account in self.customer_accounts(customer.id()) {
            summary += &format!(
                "Account No: {}\nAccount type: {}\nBalance: {}\n",
                account.number(),
                account.account_type(),
                account.balance()
            );
            count += 1;
        }
        summary += &format!("Total Accounts: {}", count);
        summary
    }

    /// Get snapshots of all accounts
    pub fn snapshot_accounts(&self) -> Vec<AccountSnapshot> {
        self.accounts.values().map(|a| a.snapshot()).collect()
    }
}
