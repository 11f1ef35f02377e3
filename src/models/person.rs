//! Person model
//!
//! A person tracked by the address book: contact details, case metadata,
//! next-of-kin details and tags. Required fields are always present; each
//! optional field is present or absent independently of the others.

use super::case::{CaseNumber, ShnPeriod};
use super::contact::{Address, Email, Name, Phone};
use super::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Immutable person record
///
/// Fields are only reachable through borrowing getters, so a `Person` never
/// changes after construction. Derive a modified copy with
/// [`crate::testutil::PersonBuilder::from_person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    case_number: CaseNumber,
    home_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    work_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quarantine_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shn_period: Option<ShnPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_of_kin_name: Option<Name>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_of_kin_phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_of_kin_address: Option<Address>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Create a person from already validated fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        case_number: CaseNumber,
        home_address: Address,
        work_address: Option<Address>,
        quarantine_address: Option<Address>,
        shn_period: Option<ShnPeriod>,
        next_of_kin_name: Option<Name>,
        next_of_kin_phone: Option<Phone>,
        next_of_kin_address: Option<Address>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            case_number,
            home_address,
            work_address,
            quarantine_address,
            shn_period,
            next_of_kin_name,
            next_of_kin_phone,
            next_of_kin_address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn case_number(&self) -> &CaseNumber {
        &self.case_number
    }

    pub fn home_address(&self) -> &Address {
        &self.home_address
    }

    pub fn work_address(&self) -> Option<&Address> {
        self.work_address.as_ref()
    }

    pub fn quarantine_address(&self) -> Option<&Address> {
        self.quarantine_address.as_ref()
    }

    pub fn shn_period(&self) -> Option<&ShnPeriod> {
        self.shn_period.as_ref()
    }

    pub fn next_of_kin_name(&self) -> Option<&Name> {
        self.next_of_kin_name.as_ref()
    }

    pub fn next_of_kin_phone(&self) -> Option<&Phone> {
        self.next_of_kin_phone.as_ref()
    }

    pub fn next_of_kin_address(&self) -> Option<&Address> {
        self.next_of_kin_address.as_ref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Whether both records describe the same person.
    ///
    /// This is weaker than equality: two records with the same name are the
    /// same person even if every other field differs. Used to detect
    /// duplicates when adding to an address book.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Case Number: {}; Home Address: {}",
            self.name, self.phone, self.email, self.case_number, self.home_address
        )?;
        if let Some(address) = &self.work_address {
            write!(f, "; Work Address: {}", address)?;
        }
        if let Some(address) = &self.quarantine_address {
            write!(f, "; Quarantine Address: {}", address)?;
        }
        if let Some(period) = &self.shn_period {
            write!(f, "; SHN Period: {}", period)?;
        }
        if let Some(name) = &self.next_of_kin_name {
            write!(f, "; Next-of-Kin Name: {}", name)?;
        }
        if let Some(phone) = &self.next_of_kin_phone {
            write!(f, "; Next-of-Kin Phone: {}", phone)?;
        }
        if let Some(address) = &self.next_of_kin_address {
            write!(f, "; Next-of-Kin Address: {}", address)?;
        }
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }
        Ok(())
    }
}
