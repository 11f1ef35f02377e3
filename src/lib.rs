//! Casebook - person records for a case-tracking address book
//!
//! Provides:
//! - Validated value types (name, phone, email, address, case number, SHN period, tag)
//! - The immutable `Person` record
//! - Fluent fixture builders and sample data for tests

pub mod models;
pub mod testutil;
pub mod validation;

// Re-export commonly used types
pub use models::{Address, CaseNumber, Email, Name, Person, Phone, ShnPeriod, Tag};
pub use testutil::{FixtureDefaults, PersonBuilder};
pub use validation::{ValidationError, ValidationResult};
