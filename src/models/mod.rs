//! Models module
//!
//! Defines the person record and the validated value types it is built from.
//! Value types can only be constructed from input that passes the matching
//! rule in [`crate::validation::input`].

/// Shared conversions for value types wrapping a single validated `String`.
///
/// The type must provide `fn new(&str) -> ValidationResult<Self>` and a
/// `String` as its only field.
macro_rules! string_value_type {
    ($name:ident) => {
        impl $name {
            /// Borrow the raw validated string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::validation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::validation::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub mod case;
pub mod contact;
pub mod person;
pub mod tag;

pub use case::{CaseNumber, ShnPeriod};
pub use contact::{Address, Email, Name, Phone};
pub use person::Person;
pub use tag::Tag;
