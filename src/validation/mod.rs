//! Validation functionality
//!
//! Provides the format rules behind every person field:
//! - names, phones, emails, addresses and case numbers
//! - tags
//! - SHN periods (date ranges)

pub mod input;

pub use input::{ValidationError, ValidationResult};
