//! # Customer
//!
//! `customer` is a module describing a bank customer's identity and personal details.

use std::fmt;

use chrono::NaiveDate;

use crate::CustomerId;

/// Bank customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Customer's ID, fixed at construction
    id: CustomerId,
    name: String,
    address: String,
    date_of_birth: NaiveDate,
}

impl Customer {
    /// Create a customer with an already allocated id
    ///
    /// Ids normally come from [`crate::CentralBank::new_customer`].
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        address: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            date_of_birth,
        }
    }

    /// Registry id, assigned at construction
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Postal address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Date of birth
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Replace the name; the id stays the same
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the address
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Replace the date of birth
    pub fn set_date_of_birth(&mut self, date_of_birth: NaiveDate) {
        self.date_of_birth = date_of_birth;
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Date of birth: {}", self.date_of_birth.format("%d/%m/%Y"))
    }
}
