//! Fluent builder for [`Person`] fixtures

use super::defaults::FixtureDefaults;
use super::sample_data::tag_set;
use crate::models::{Address, CaseNumber, Email, Name, Person, Phone, ShnPeriod, Tag};
use crate::validation::ValidationResult;
use std::collections::BTreeSet;
use tracing::debug;

/// Stages person fields and produces [`Person`] records
///
/// Starts fully populated (every optional field present) so a test only
/// overrides the fields it cares about. Each setter validates its raw input
/// through the field's value type and assigns only on success; a rejected
/// value leaves the builder unchanged.
///
/// Setters take `&mut self`. Sharing one builder between threads requires
/// external synchronization.
///
/// # Example
///
/// ```rust
/// use casebook::testutil::PersonBuilder;
///
/// # fn main() -> Result<(), casebook::validation::ValidationError> {
/// let zoe = PersonBuilder::new()
///     .with_name("Zoe Tan")?
///     .with_next_of_kin_address(None)?
///     .build();
///
/// assert_eq!(zoe.name().as_str(), "Zoe Tan");
/// assert!(zoe.next_of_kin_address().is_none());
/// assert_eq!(zoe.phone().as_str(), "85355255");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBuilder {
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
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::with_defaults(&FixtureDefaults::default())
            .expect("built-in fixture defaults are valid")
    }
}

impl From<&Person> for PersonBuilder {
    fn from(person: &Person) -> Self {
        Self::from_person(person)
    }
}

impl PersonBuilder {
    /// Create a builder holding the built-in default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from caller-provided defaults
    pub fn with_defaults(defaults: &FixtureDefaults) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(&defaults.name)?,
            phone: Phone::new(&defaults.phone)?,
            email: Email::new(&defaults.email)?,
            case_number: CaseNumber::new(&defaults.case_number)?,
            home_address: Address::new(&defaults.home_address)?,
            work_address: defaults.work_address.as_deref().map(Address::new).transpose()?,
            quarantine_address: defaults
                .quarantine_address
                .as_deref()
                .map(Address::new)
                .transpose()?,
            shn_period: defaults.shn_period.as_deref().map(ShnPeriod::new).transpose()?,
            next_of_kin_name: defaults.next_of_kin_name.as_deref().map(Name::new).transpose()?,
            next_of_kin_phone: defaults
                .next_of_kin_phone
                .as_deref()
                .map(Phone::new)
                .transpose()?,
            next_of_kin_address: defaults
                .next_of_kin_address
                .as_deref()
                .map(Address::new)
                .transpose()?,
            tags: tag_set(&defaults.tags)?,
        })
    }

    /// Create a builder seeded with every field of `person`
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name().clone(),
            phone: person.phone().clone(),
            email: person.email().clone(),
            case_number: person.case_number().clone(),
            home_address: person.home_address().clone(),
            work_address: person.work_address().cloned(),
            quarantine_address: person.quarantine_address().cloned(),
            shn_period: person.shn_period().copied(),
            next_of_kin_name: person.next_of_kin_name().cloned(),
            next_of_kin_phone: person.next_of_kin_phone().cloned(),
            next_of_kin_address: person.next_of_kin_address().cloned(),
            tags: person.tags().clone(),
        }
    }

    pub fn with_name(&mut self, name: &str) -> ValidationResult<&mut Self> {
        self.name = Name::new(name)?;
        Ok(self)
    }

    pub fn with_phone(&mut self, phone: &str) -> ValidationResult<&mut Self> {
        self.phone = Phone::new(phone)?;
        Ok(self)
    }

    pub fn with_email(&mut self, email: &str) -> ValidationResult<&mut Self> {
        self.email = Email::new(email)?;
        Ok(self)
    }

    pub fn with_case_number(&mut self, case_number: &str) -> ValidationResult<&mut Self> {
        self.case_number = CaseNumber::new(case_number)?;
        Ok(self)
    }

    pub fn with_home_address(&mut self, home_address: &str) -> ValidationResult<&mut Self> {
        self.home_address = Address::new(home_address)?;
        Ok(self)
    }

    /// Set the work address; `None` clears it
    pub fn with_work_address(&mut self, work_address: Option<&str>) -> ValidationResult<&mut Self> {
        self.work_address = work_address.map(Address::new).transpose()?;
        Ok(self)
    }

    /// Set the quarantine address; `None` clears it
    pub fn with_quarantine_address(
        &mut self,
        quarantine_address: Option<&str>,
    ) -> ValidationResult<&mut Self> {
        self.quarantine_address = quarantine_address.map(Address::new).transpose()?;
        Ok(self)
    }

    /// Set the SHN period (`YYYY-MM-DD => YYYY-MM-DD`); `None` clears it
    pub fn with_shn_period(&mut self, shn_period: Option<&str>) -> ValidationResult<&mut Self> {
        self.shn_period = shn_period.map(ShnPeriod::new).transpose()?;
        Ok(self)
    }

    pub fn with_next_of_kin_name(
        &mut self,
        next_of_kin_name: Option<&str>,
    ) -> ValidationResult<&mut Self> {
        self.next_of_kin_name = next_of_kin_name.map(Name::new).transpose()?;
        Ok(self)
    }

    pub fn with_next_of_kin_phone(
        &mut self,
        next_of_kin_phone: Option<&str>,
    ) -> ValidationResult<&mut Self> {
        self.next_of_kin_phone = next_of_kin_phone.map(Phone::new).transpose()?;
        Ok(self)
    }

    pub fn with_next_of_kin_address(
        &mut self,
        next_of_kin_address: Option<&str>,
    ) -> ValidationResult<&mut Self> {
        self.next_of_kin_address = next_of_kin_address.map(Address::new).transpose()?;
        Ok(self)
    }

    /// Replace the staged tags with `tags`.
    ///
    /// Repeated calls do not accumulate: only the tags from the last call
    /// survive. Duplicates collapse into one tag.
    pub fn with_tags(&mut self, tags: &[&str]) -> ValidationResult<&mut Self> {
        self.tags = tag_set(tags)?;
        Ok(self)
    }

    /// Build a person from the staged fields.
    ///
    /// The result owns copies of every field; later setter calls do not
    /// affect it.
    pub fn build(&self) -> Person {
        debug!(name = %self.name, tags = self.tags.len(), "Built person fixture");
        Person::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.case_number.clone(),
            self.home_address.clone(),
            self.work_address.clone(),
            self.quarantine_address.clone(),
            self.shn_period,
            self.next_of_kin_name.clone(),
            self.next_of_kin_phone.clone(),
            self.next_of_kin_address.clone(),
            self.tags.clone(),
        )
    }
}
