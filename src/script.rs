//! # Script
//!
//! `script` is a module applying a CSV file of ledger operations to a bank.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv_async::{AsyncReaderBuilder, AsyncSerializer, Trim};
use futures::TryStreamExt;
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::warn;

use bank_ledger::{AccountNumber, AccountType, CentralBank, CustomerId};

/// An operation represented by the CSV field `op`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Op {
    AddCustomer,
    RemoveCustomer,
    CreateAccount,
    CloseAccount,
    Deposit,
    Withdraw,
    Transfer,
}

/// An operation represented by a CSV row
#[derive(Debug, Deserialize)]
struct ScriptRecord {
    op: Op,
    customer: Option<u32>,
    account: Option<u32>,
    to: Option<u32>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    amount: Option<Decimal>,
    name: Option<String>,
    address: Option<String>,
    dob: Option<String>,
    #[serde(rename = "type")]
    account_type: Option<AccountType>,
}

/// Counts of applied and rejected operations
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub applied: usize,
    pub rejected: usize,
}

/// Stream the script and apply each row in order
///
/// Rejected operations are logged and skipped. Malformed rows abort the run.
pub async fn run<R>(bank: &mut CentralBank, reader: R) -> Result<Outcome>
where
    R: AsyncRead + Unpin + Send,
{
    let mut deserializer = AsyncReaderBuilder::new()
        .trim(Trim::All)
        .create_deserializer(reader);
    let records = deserializer.deserialize::<ScriptRecord>();
    futures::pin_mut!(records);

    let mut outcome = Outcome::default();
    let mut row = 1;
    while let Some(record) = records
        .try_next()
        .await
        .with_context(|| format!("Malformed script row {}", row))?
    {
        match apply(bank, record).with_context(|| format!("Malformed script row {}", row))? {
            Ok(()) => outcome.applied += 1,
            Err(err) => {
                warn!(row, %err, "operation rejected");
                outcome.rejected += 1;
            }
        }
        row += 1;
    }
    Ok(outcome)
}

/// Apply one row, separating malformed rows from rejected operations
fn apply(bank: &mut CentralBank, record: ScriptRecord) -> Result<bank_ledger::Result<()>> {
    use Op::*;
    let outcome = match record.op {
        AddCustomer => {
            let dob = required(record.dob, "dob")?;
            let date_of_birth = NaiveDate::parse_from_str(&dob, "%d/%m/%Y")
                .with_context(|| format!("Invalid date of birth {:?}, expected dd/mm/yyyy", dob))?;
            let customer = bank.new_customer(
                required(record.name, "name")?,
                required(record.address, "address")?,
                date_of_birth,
            );
            bank.add_customer(customer).map(drop)
        }
        RemoveCustomer => bank
            .remove_customer(CustomerId(required(record.customer, "customer")?))
            .map(drop),
        CreateAccount => {
            let id = CustomerId(required(record.customer, "customer")?);
            let account_type = required(record.account_type, "type")?;
            match bank.customer(id).cloned() {
                Some(customer) => {
                    bank.create_account(&customer, account_type);
                    Ok(())
                }
                None => Err(bank_ledger::BankError::CustomerNotFound(id)),
            }
        }
        CloseAccount => {
            let id = CustomerId(required(record.customer, "customer")?);
            let number = AccountNumber(required(record.account, "account")?);
            match bank.customer(id).cloned() {
                Some(customer) => bank.close_account(&customer, number),
                None => Err(bank_ledger::BankError::CustomerNotFound(id)),
            }
        }
        Deposit => bank
            .deposit(
                AccountNumber(required(record.account, "account")?),
                required(record.amount, "amount")?,
            )
            .map(drop),
        Withdraw => bank
            .withdraw(
                AccountNumber(required(record.account, "account")?),
                required(record.amount, "amount")?,
            )
            .map(drop),
        Transfer => bank.transfer(
            AccountNumber(required(record.account, "account")?),
            AccountNumber(required(record.to, "to")?),
            required(record.amount, "amount")?,
        ),
    };
    Ok(outcome)
}

fn required<T>(field: Option<T>, name: &str) -> Result<T> {
    field.ok_or_else(|| anyhow!("missing field `{}`", name))
}

/// Write account snapshots as CSV
pub async fn write_snapshots<W>(bank: &CentralBank, writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut serializer = AsyncSerializer::from_writer(writer);
    for snapshot in bank.snapshot_accounts() {
        serializer
            .serialize(&snapshot)
            .await
            .context("Failed to write account snapshot")?;
    }
    serializer.flush().await?;
    Ok(())
}
