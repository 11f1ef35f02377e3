//! Contact details: name, phone, email and address

use crate::validation::input::{validate_address, validate_email, validate_name, validate_phone};
use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};

/// A person's name
///
/// # Example
///
/// ```rust
/// use casebook::models::Name;
///
/// let name = Name::new("Amy Bee").unwrap();
/// assert_eq!(name.as_str(), "Amy Bee");
/// assert!(Name::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> ValidationResult<Self> {
        validate_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn is_valid(name: &str) -> bool {
        validate_name(name).is_ok()
    }
}

string_value_type!(Name);

/// A phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: &str) -> ValidationResult<Self> {
        validate_phone(phone)?;
        Ok(Self(phone.to_string()))
    }

    pub fn is_valid(phone: &str) -> bool {
        validate_phone(phone).is_ok()
    }
}

string_value_type!(Phone);

/// An email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> ValidationResult<Self> {
        validate_email(email)?;
        Ok(Self(email.to_string()))
    }

    pub fn is_valid(email: &str) -> bool {
        validate_email(email).is_ok()
    }

    /// Part before the `@`
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or(&self.0)
    }

    /// Part after the `@`
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

string_value_type!(Email);

/// A postal address. Used for home, work, quarantine and next-of-kin addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(address: &str) -> ValidationResult<Self> {
        validate_address(address)?;
        Ok(Self(address.to_string()))
    }

    pub fn is_valid(address: &str) -> bool {
        validate_address(address).is_ok()
    }
}

string_value_type!(Address);
