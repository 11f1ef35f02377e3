//! Tag model

use crate::validation::ValidationResult;
use crate::validation::input::validate_tag;
use serde::{Deserialize, Serialize};

/// A free-form alphanumeric label attached to a person
///
/// Tags compare by their exact text, so `Friends` and `friends` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(tag_name: &str) -> ValidationResult<Self> {
        validate_tag(tag_name)?;
        Ok(Self(tag_name.to_string()))
    }

    pub fn is_valid(tag_name: &str) -> bool {
        validate_tag(tag_name).is_ok()
    }
}

string_value_type!(Tag);
