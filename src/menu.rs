//! # Menu
//!
//! `menu` is a module driving the interactive console session.

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_stream::{wrappers::LinesStream, StreamExt};

use bank_ledger::{AccountNumber, AccountType, CentralBank, Customer, CustomerId};

const GREETING: &str =
    "Welcome to HSBC banking, glad you're banking with us! Please select one of our options below.";

const OPTIONS: [&str; 10] = [
    "Add Customer",
    "Remove Customer",
    "Deposit",
    "Withdraw",
    "Create Account",
    "Close Account",
    "Transfer",
    "Get Transaction History",
    "Get Customer Summary",
    "Exit",
];

const EXIT: u32 = 10;

/// Interactive session over a line-based input and an output sink
pub struct Session<R, W> {
    title: String,
    lines: LinesStream<R>,
    out: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(title: &str, input: R, out: W) -> Self {
        Self {
            title: title.to_string(),
            lines: LinesStream::new(input.lines()),
            out,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu until the user exits or the input ends
    pub async fn run(&mut self, bank: &mut CentralBank) -> Result<()> {
        loop {
            self.display().await?;
            self.out.write_all(b"Enter Selection: ").await?;
            let Some(choice) = self.read_number::<u32>().await? else {
                break;
            };
            if choice == EXIT {
                self.say("Thank you for using our bank").await?;
                break;
            }
            // input ended halfway through an operation
            if self.process(choice, bank).await?.is_none() {
                break;
            }
        }
        self.out.flush().await?;
        Ok(())
    }

    async fn display(&mut self) -> Result<()> {
        let mut menu = format!(
            "{}\n{}\n{}\n",
            self.title,
            "+".repeat(self.title.chars().count()),
            GREETING
        );
        for (index, option) in OPTIONS.iter().enumerate() {
            menu += &format!("{}. {}\n", index + 1, option);
        }
        menu.push('\n');
        self.out.write_all(menu.as_bytes()).await?;
        Ok(())
    }

    async fn process(&mut self, choice: u32, bank: &mut CentralBank) -> Result<Option<()>> {
        match choice {
            1 => self.add_customer(bank).await,
            2 => self.remove_customer(bank).await,
            3 => self.deposit(bank).await,
            4 => self.withdraw(bank).await,
            5 => self.create_account(bank).await,
            6 => self.close_account(bank).await,
            7 => self.transfer(bank).await,
            8 => self.transaction_history(bank).await,
            9 => self.customer_summary(bank).await,
            _ => {
                self.say("Invalid choice.").await?;
                Ok(Some(()))
            }
        }
    }

    async fn add_customer(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("Please enter your name").await?;
        let Some(name) = self.read_line().await? else {
            return Ok(None);
        };
        self.say("Please enter your address").await?;
        let Some(address) = self.read_line().await? else {
            return Ok(None);
        };
        self.say("Please enter your date of birth - (Use format dd/MM/yyyy)").await?;
        let Some(date_of_birth) = self.read_date().await? else {
            return Ok(None);
        };

        let customer = bank.new_customer(name, address, date_of_birth);
        match bank.add_customer(customer) {
            Ok(id) => self.say(&format!("Success! Your customer ID is {}", id)).await?,
            Err(_) => self.say("Failed to add customer.").await?,
        }
        Ok(Some(()))
    }

    async fn remove_customer(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say(
            "Leaving? If so, please enter your customer ID number \
             so we can delete you from existence",
        )
        .await?;
        let Some(id) = self.read_number().await? else {
            return Ok(None);
        };
        match bank.remove_customer(CustomerId(id)) {
            Ok(_) => self.say("You've been removed").await?,
            Err(_) => self.say("Removal unsuccessful").await?,
        }
        Ok(Some(()))
    }

    async fn deposit(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("What is your account number?").await?;
        let Some(number) = self.read_number().await? else {
            return Ok(None);
        };
        self.say("How much would you like to deposit?").await?;
        let Some(amount) = self.read_number::<Decimal>().await? else {
            return Ok(None);
        };
        match bank.deposit(AccountNumber(number), amount) {
            Ok(_) => self.say(&format!("You have deposited {}", amount)).await?,
            Err(_) => self.say(&format!("Deposit of {} failed", amount)).await?,
        }
        Ok(Some(()))
    }

    async fn withdraw(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("What is your account number?").await?;
        let Some(number) = self.read_number().await? else {
            return Ok(None);
        };
        let number = AccountNumber(number);
        if bank.account(number).is_none() {
            self.say("Account not found.").await?;
            return Ok(Some(()));
        }
        self.say("How much would you like to withdraw?").await?;
        let Some(amount) = self.read_number::<Decimal>().await? else {
            return Ok(None);
        };
        match bank.withdraw(number, amount) {
            Ok(_) => self.say(&format!("You have withdrawn {}.", amount)).await?,
            Err(_) => self.say(&format!("Withdrawal of {} failed.", amount)).await?,
        }
        Ok(Some(()))
    }

    async fn create_account(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("Please enter your customer ID to create an account:").await?;
        let Some(customer) = self.read_customer(bank).await? else {
            return Ok(None);
        };
        let Some(customer) = customer else {
            return Ok(Some(()));
        };
        self.say("Choose an account type: (1 for SAVINGS, 2 for CURRENT)").await?;
        let Some(choice) = self.read_number::<u32>().await? else {
            return Ok(None);
        };
        let account_type = if choice == 1 {
            AccountType::Savings
        } else {
            AccountType::Current
        };
        let number = bank.create_account(&customer, account_type);
        self.say(&format!("Account created successfully! Your account number is {}", number))
            .await?;
        Ok(Some(()))
    }

    async fn close_account(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("Enter your customer ID to close an account:").await?;
        let Some(customer) = self.read_customer(bank).await? else {
            return Ok(None);
        };
        let Some(customer) = customer else {
            return Ok(Some(()));
        };
        self.say("Enter the account number of the account you wish to close:").await?;
        let Some(number) = self.read_number().await? else {
            return Ok(None);
        };
        let number = AccountNumber(number);
        if bank.account(number).is_none() {
            self.say("Account not found.").await?;
            return Ok(Some(()));
        }
        match bank.close_account(&customer, number) {
            Ok(()) => self.say("Account closed successfully!").await?,
            Err(_) => self.say("Failed to close the account.").await?,
        }
        Ok(Some(()))
    }

    async fn transfer(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("Enter your source account number:").await?;
        let Some(from) = self.read_number().await? else {
            return Ok(None);
        };
        self.say("Enter the destination account number:").await?;
        let Some(to) = self.read_number().await? else {
            return Ok(None);
        };
        let (from, to) = (AccountNumber(from), AccountNumber(to));
        if bank.account(from).is_none() || bank.account(to).is_none() {
            self.say("One or both accounts not found.").await?;
            return Ok(Some(()));
        }
        self.say("How much would you like to transfer?").await?;
        let Some(amount) = self.read_number::<Decimal>().await? else {
            return Ok(None);
        };
        match bank.transfer(from, to, amount) {
            Ok(()) => self.say(&format!("Transferred {} successfully.", amount)).await?,
            Err(_) => self.say(&format!("Transfer of {} failed.", amount)).await?,
        }
        Ok(Some(()))
    }

    async fn transaction_history(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("Enter your customer ID to view transaction history:").await?;
        let Some(customer) = self.read_customer(bank).await? else {
            return Ok(None);
        };
        let Some(customer) = customer else {
            return Ok(Some(()));
        };
        let reports: Vec<String> = bank
            .transaction_history(&customer)
            .into_iter()
            .map(|log| log.report(customer.name()))
            .collect();
        if reports.is_empty() {
            self.say("No transactions found.").await?;
        }
        for report in reports {
            self.say(&report).await?;
        }
        Ok(Some(()))
    }

    async fn customer_summary(&mut self, bank: &mut CentralBank) -> Result<Option<()>> {
        self.say("Enter your customer ID to get a summary:").await?;
        let Some(customer) = self.read_customer(bank).await? else {
            return Ok(None);
        };
        if let Some(customer) = customer {
            let summary = bank.customer_summary(&customer);
            self.say(&summary).await?;
        }
        Ok(Some(()))
    }

    /// Read a customer id and resolve it, reporting unknown customers
    ///
    /// The outer `Option` is `None` when the input has ended.
    async fn read_customer(&mut self, bank: &CentralBank) -> Result<Option<Option<Customer>>> {
        let Some(id) = self.read_number().await? else {
            return Ok(None);
        };
        let customer = bank.customer(CustomerId(id)).cloned();
        if customer.is_none() {
            self.say("Customer not found.").await?;
        }
        Ok(Some(customer))
    }

    async fn say(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        self.out.flush().await?;
        let line = self.lines.next().await.transpose()?;
        Ok(line.map(|line| line.trim().to_string()))
    }

    /// Read until a line parses, re-prompting on bad input
    async fn read_number<T: FromStr>(&mut self) -> Result<Option<T>> {
        while let Some(line) = self.read_line().await? {
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Invalid input.").await?,
            }
        }
        Ok(None)
    }

    async fn read_date(&mut self) -> Result<Option<NaiveDate>> {
        while let Some(line) = self.read_line().await? {
            match NaiveDate::parse_from_str(&line, "%d/%m/%Y") {
                Ok(date) => return Ok(Some(date)),
                Err(_) => self.say("Invalid, please enter correct format.").await?,
            }
        }
        Ok(None)
    }
}
