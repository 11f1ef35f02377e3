//! Fixture utilities
//!
//! Builders and ready-made records for tests:
//! - `PersonBuilder` for deriving persons field by field
//! - `FixtureDefaults` for the values a builder starts from
//! - sample data and typical persons

pub mod defaults;
pub mod person_builder;
pub mod sample_data;
pub mod typical_persons;

pub use defaults::FixtureDefaults;
pub use person_builder::PersonBuilder;
pub use sample_data::{sample_persons, tag_set};
