//! Default field values for person fixtures

use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_CASE_NUMBER: &str = "456";
pub const DEFAULT_HOME_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";
pub const DEFAULT_WORK_ADDRESS: &str = "580 Orchard Road, #02-15";
pub const DEFAULT_QUARANTINE_ADDRESS: &str = "456, North Bridge Road, #01-505";
pub const DEFAULT_SHN_PERIOD: &str = "2021-04-01 => 2021-04-15";
pub const DEFAULT_NEXT_OF_KIN_NAME: &str = "Cecil Don";
pub const DEFAULT_NEXT_OF_KIN_PHONE: &str = "95241523";
pub const DEFAULT_NEXT_OF_KIN_ADDRESS: &str = "48 Craig Rd";

/// Raw values a [`super::PersonBuilder`] starts from
///
/// Every key is optional when deserializing; missing keys keep the built-in
/// default. An optional field set to `null` starts the builder with that
/// field absent.
///
/// # Example
///
/// ```rust
/// use casebook::testutil::FixtureDefaults;
///
/// let defaults = FixtureDefaults::from_yaml("name: Zoe Tan\nworkAddress: null\n").unwrap();
/// assert_eq!(defaults.name, "Zoe Tan");
/// assert_eq!(defaults.phone, "85355255");
/// assert!(defaults.work_address.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixtureDefaults {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub case_number: String,
    pub home_address: String,
    pub work_address: Option<String>,
    pub quarantine_address: Option<String>,
    pub shn_period: Option<String>,
    pub next_of_kin_name: Option<String>,
    pub next_of_kin_phone: Option<String>,
    pub next_of_kin_address: Option<String>,
    pub tags: Vec<String>,
}

impl Default for FixtureDefaults {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            case_number: DEFAULT_CASE_NUMBER.to_string(),
            home_address: DEFAULT_HOME_ADDRESS.to_string(),
            work_address: Some(DEFAULT_WORK_ADDRESS.to_string()),
            quarantine_address: Some(DEFAULT_QUARANTINE_ADDRESS.to_string()),
            shn_period: Some(DEFAULT_SHN_PERIOD.to_string()),
            next_of_kin_name: Some(DEFAULT_NEXT_OF_KIN_NAME.to_string()),
            next_of_kin_phone: Some(DEFAULT_NEXT_OF_KIN_PHONE.to_string()),
            next_of_kin_address: Some(DEFAULT_NEXT_OF_KIN_ADDRESS.to_string()),
            tags: Vec::new(),
        }
    }
}

impl FixtureDefaults {
    /// Load defaults from YAML, falling back to built-in values for missing keys
    pub fn from_yaml(yaml_content: &str) -> Result<Self, serde_yaml::Error> {
        let defaults: Self = serde_yaml::from_str(yaml_content)?;
        info!(name = %defaults.name, "Loaded fixture defaults from YAML");
        Ok(defaults)
    }

    /// Load defaults from JSON, falling back to built-in values for missing keys
    pub fn from_json(json_content: &str) -> Result<Self, serde_json::Error> {
        let defaults: Self = serde_json::from_str(json_content)?;
        info!(name = %defaults.name, "Loaded fixture defaults from JSON");
        Ok(defaults)
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
