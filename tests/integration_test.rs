use chrono::NaiveDate;
use rust_decimal_macros::dec;

use bank_ledger::{
    AccountNumber, AccountType, BankError, CentralBank, Customer, CustomerId, TransactionType,
};

fn dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(1980, 6, 15).unwrap()
}

fn register(bank: &mut CentralBank, name: &str, address: &str) -> Customer {
    let customer = bank.new_customer(name, address, dob());
    bank.add_customer(customer.clone()).unwrap();
    customer
}

#[test]
fn deposit_scenario_passes() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    assert_eq!(customer.id(), CustomerId(0));

    let account = bank.create_account(&customer, AccountType::Savings);
    assert_eq!(account, AccountNumber(0));

    assert!(bank.deposit(account, dec!(500)).is_ok());
    assert_eq!(bank.account(account).unwrap().balance(), dec!(500));

    assert_eq!(
        bank.deposit(account, dec!(-500)),
        Err(BankError::NonPositiveAmount(dec!(-500)))
    );
    assert_eq!(bank.account(account).unwrap().balance(), dec!(500));
    assert_eq!(bank.account(account).unwrap().transaction_log().len(), 1);
}

#[test]
fn withdraw_from_fresh_account_fails() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    let account = bank.create_account(&customer, AccountType::Savings);

    let err = bank.withdraw(account, dec!(600)).unwrap_err();
    assert!(err.is_insufficient_funds());
    assert_eq!(bank.account(account).unwrap().balance(), dec!(0));
    assert!(bank.account(account).unwrap().transaction_log().is_empty());
}

#[test]
fn registry_rejects_zero_withdrawal() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    let account = bank.create_account(&customer, AccountType::Savings);

    assert!(bank.withdraw(account, dec!(0)).unwrap_err().is_validation());
    assert!(bank.deposit(account, dec!(0)).unwrap_err().is_validation());
}

#[test]
fn transfer_scenario_passes() {
    let mut bank = CentralBank::new();
    let john = register(&mut bank, "John Doe", "123 Main St");
    let jane = register(&mut bank, "Jane Doe", "456 Elm St");
    let from = bank.create_account(&john, AccountType::Savings);
    let to = bank.create_account(&jane, AccountType::Savings);

    bank.deposit(from, dec!(1000)).unwrap();
    assert!(bank.transfer(from, to, dec!(500)).is_ok());
    assert_eq!(bank.account(from).unwrap().balance(), dec!(500));
    assert_eq!(bank.account(to).unwrap().balance(), dec!(500));

    assert!(bank
        .transfer(from, to, dec!(1500))
        .unwrap_err()
        .is_insufficient_funds());
    assert_eq!(bank.account(from).unwrap().balance(), dec!(500));
    assert_eq!(bank.account(to).unwrap().balance(), dec!(500));
}

#[test]
fn full_balance_transfer_empties_source() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    let from = bank.create_account(&customer, AccountType::Current);
    let to = bank.create_account(&customer, AccountType::Savings);

    bank.deposit(from, dec!(250)).unwrap();
    bank.transfer(from, to, dec!(250)).unwrap();
    assert_eq!(bank.account(from).unwrap().balance(), dec!(0));
    assert_eq!(bank.account(to).unwrap().balance(), dec!(250));
}

#[test]
fn transfers_are_not_logged() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    let from = bank.create_account(&customer, AccountType::Current);
    let to = bank.create_account(&customer, AccountType::Savings);

    bank.deposit(from, dec!(100)).unwrap();
    bank.transfer(from, to, dec!(40)).unwrap();
    let history = bank.transaction_history(&customer);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].transaction_type(), TransactionType::Deposit);
    assert!(bank.account(to).unwrap().transaction_log().is_empty());
}

#[test]
fn transfer_rejects_non_positive_amount() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    let from = bank.create_account(&customer, AccountType::Current);
    let to = bank.create_account(&customer, AccountType::Savings);
    bank.deposit(from, dec!(100)).unwrap();

    assert!(bank.transfer(from, to, dec!(0)).unwrap_err().is_validation());
    assert!(bank.transfer(from, to, dec!(-5)).unwrap_err().is_validation());
    assert_eq!(bank.account(from).unwrap().balance(), dec!(100));
}

#[test]
fn duplicate_customer_leaves_registry_unchanged() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");

    assert_eq!(
        bank.add_customer(customer.clone()),
        Err(BankError::DuplicateCustomer(customer.id()))
    );
    assert_eq!(bank.customers().count(), 1);
}

#[test]
fn remove_customer_twice_fails() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");

    assert_eq!(bank.remove_customer(customer.id()), Ok(customer.clone()));
    assert_eq!(
        bank.remove_customer(customer.id()),
        Err(BankError::CustomerNotFound(customer.id()))
    );
    assert!(bank.remove_customer(CustomerId(99)).is_err());
}

#[test]
fn transaction_history_spans_accounts() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    let savings = bank.create_account(&customer, AccountType::Savings);
    let current = bank.create_account(&customer, AccountType::Current);

    bank.deposit(current, dec!(30)).unwrap();
    bank.deposit(savings, dec!(10)).unwrap();
    bank.withdraw(savings, dec!(5)).unwrap();

    let history: Vec<_> = bank
        .transaction_history(&customer)
        .into_iter()
        .map(|log| (log.account(), log.amount(), log.transaction_type()))
        .collect();
    // account creation order first, then chronological order
    assert_eq!(
        history,
        vec![
            (savings, dec!(10), TransactionType::Deposit),
            (savings, dec!(5), TransactionType::Withdraw),
            (current, dec!(30), TransactionType::Deposit),
        ]
    );
}

#[test]
fn transaction_history_empty_without_accounts() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    assert!(bank.transaction_history(&customer).is_empty());
}

#[test]
fn create_account_for_unregistered_customer_is_permitted() {
    let mut bank = CentralBank::new();
    let stranger = bank.new_customer("Walk In", "Nowhere", dob());

    let account = bank.create_account(&stranger, AccountType::Current);
    bank.deposit(account, dec!(20)).unwrap();
    assert!(bank.customer(stranger.id()).is_none());
    assert_eq!(bank.transaction_history(&stranger).len(), 1);
}

#[test]
fn close_account_requires_registered_customer() {
    let mut bank = CentralBank::new();
    let stranger = bank.new_customer("Walk In", "Nowhere", dob());
    let account = bank.create_account(&stranger, AccountType::Current);

    assert_eq!(
        bank.close_account(&stranger, account),
        Err(BankError::CustomerNotFound(stranger.id()))
    );
    assert!(bank.account(account).is_some());
}

#[test]
fn close_account_does_not_check_ownership() {
    let mut bank = CentralBank::new();
    let john = register(&mut bank, "John Doe", "123 Main St");
    let jane = register(&mut bank, "Jane Doe", "456 Elm St");
    let janes = bank.create_account(&jane, AccountType::Savings);

    bank.close_account(&john, janes).unwrap();
    assert!(bank.account(janes).is_none());
    // no orphan left in the owner's view
    assert_eq!(bank.customer_accounts(jane.id()).count(), 0);
}

#[test]
fn close_unknown_account_is_a_no_op() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");
    let account = bank.create_account(&customer, AccountType::Savings);

    assert!(bank.close_account(&customer, AccountNumber(42)).is_ok());
    assert_eq!(bank.customer_accounts(customer.id()).count(), 1);
    assert!(bank.account(account).is_some());
}

#[test]
fn customer_details_can_be_updated() {
    let mut bank = CentralBank::new();
    let customer = register(&mut bank, "John Doe", "123 Main St");

    bank.customer_mut(customer.id())
        .unwrap()
        .set_address("789 Oak Ave");
    assert!(bank
        .customer_summary(bank.customer(customer.id()).unwrap())
        .starts_with("Customer Summary for John Doe\n789 Oak Ave\n"));
}

#[test]
fn banks_have_independent_sequences() {
    let mut first = CentralBank::new();
    let mut second = CentralBank::new();
    register(&mut first, "John Doe", "123 Main St");
    let customer = register(&mut second, "Jane Doe", "456 Elm St");
    assert_eq!(customer.id(), CustomerId(0));
}
