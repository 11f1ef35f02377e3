//! Field format rules for person records.
//!
//! Every value type in [`crate::models`] delegates to one of the functions
//! here. They only inspect the raw string; they never trim or normalize it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Raw input does not satisfy the field's format rule
    #[error("invalid {field} '{value}': {constraint}")]
    InvalidFieldFormat {
        field: &'static str,
        value: String,
        constraint: &'static str,
    },
}

impl ValidationError {
    /// Name of the field that rejected its input
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidFieldFormat { field, .. } => field,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const NAME_CONSTRAINTS: &str =
    "names should only contain alphanumeric characters and spaces, and it should not be blank";

pub const PHONE_CONSTRAINTS: &str =
    "phone numbers should only contain digits, and it should be at least 3 digits long";

pub const EMAIL_CONSTRAINTS: &str = "emails should be of the format local-part@domain; \
     the local part holds alphanumerics separated by one of +_.- and the domain is \
     dot-separated labels, the last of which has at least 2 characters";

pub const ADDRESS_CONSTRAINTS: &str = "addresses can take any values, and it should not be blank";

pub const CASE_NUMBER_CONSTRAINTS: &str =
    "case numbers should only contain digits, and it should not be blank";

pub const TAG_CONSTRAINTS: &str = "tag names should be alphanumeric";

pub const SHN_PERIOD_CONSTRAINTS: &str =
    "SHN periods should be of the format YYYY-MM-DD => YYYY-MM-DD, with valid dates";

pub const SHN_PERIOD_ORDER_CONSTRAINTS: &str = "SHN period end date cannot be before its start date";

/// Date format used on both sides of an SHN period
pub const SHN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the start and end of an SHN period
pub const SHN_PERIOD_SEPARATOR: &str = " => ";

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(?:-[A-Za-z0-9]+)*$",
    )
    .unwrap()
});

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s].*$").unwrap());

static CASE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static SHN_PERIOD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2}) => ([0-9]{4}-[0-9]{2}-[0-9]{2})$").unwrap());

fn check(
    regex: &Regex,
    field: &'static str,
    value: &str,
    constraint: &'static str,
) -> ValidationResult<()> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(invalid(field, value, constraint))
    }
}

fn invalid(field: &'static str, value: &str, constraint: &'static str) -> ValidationError {
    tracing::debug!(field, value, "rejected field value");
    ValidationError::InvalidFieldFormat {
        field,
        value: value.to_string(),
        constraint,
    }
}

/// Validate a person's name.
///
/// # Examples
///
/// ```
/// use casebook::validation::input::validate_name;
///
/// assert!(validate_name("Amy Bee").is_ok());
/// assert!(validate_name(" Amy").is_err());
/// assert!(validate_name("Amy*").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    check(&NAME_REGEX, "name", name, NAME_CONSTRAINTS)
}

/// Validate a phone number (digits only, at least 3 of them).
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    check(&PHONE_REGEX, "phone", phone, PHONE_CONSTRAINTS)
}

/// Validate an email address.
///
/// # Examples
///
/// ```
/// use casebook::validation::input::validate_email;
///
/// assert!(validate_email("amy@gmail.com").is_ok());
/// assert!(validate_email("a+b.c@mail-server.example.sg").is_ok());
/// assert!(validate_email("amy@g").is_err());
/// assert!(validate_email(".amy@gmail.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    check(&EMAIL_REGEX, "email", email, EMAIL_CONSTRAINTS)
}

pub fn validate_address(address: &str) -> ValidationResult<()> {
    check(&ADDRESS_REGEX, "address", address, ADDRESS_CONSTRAINTS)
}

pub fn validate_case_number(case_number: &str) -> ValidationResult<()> {
    check(
        &CASE_NUMBER_REGEX,
        "case number",
        case_number,
        CASE_NUMBER_CONSTRAINTS,
    )
}

pub fn validate_tag(tag: &str) -> ValidationResult<()> {
    check(&TAG_REGEX, "tag", tag, TAG_CONSTRAINTS)
}

/// Parse and validate an SHN period of the form `YYYY-MM-DD => YYYY-MM-DD`.
///
/// Returns the start and end dates. Both dates must exist on the calendar
/// and the end must not precede the start; a single-day period is allowed.
///
/// # Examples
///
/// ```
/// use casebook::validation::input::parse_shn_period;
///
/// let (start, end) = parse_shn_period("2021-04-01 => 2021-04-15").unwrap();
/// assert!(start < end);
/// assert!(parse_shn_period("2021-02-30 => 2021-03-01").is_err());
/// assert!(parse_shn_period("2021-04-15 => 2021-04-01").is_err());
/// ```
pub fn parse_shn_period(period: &str) -> ValidationResult<(NaiveDate, NaiveDate)> {
    let captures = SHN_PERIOD_REGEX
        .captures(period)
        .ok_or_else(|| invalid("SHN period", period, SHN_PERIOD_CONSTRAINTS))?;

    let parse_date = |raw: &str| {
        NaiveDate::parse_from_str(raw, SHN_DATE_FORMAT)
            .map_err(|_| invalid("SHN period", period, SHN_PERIOD_CONSTRAINTS))
    };
    let start = parse_date(&captures[1])?;
    let end = parse_date(&captures[2])?;

    if end < start {
        return Err(invalid("SHN period", period, SHN_PERIOD_ORDER_CONSTRAINTS));
    }

    Ok((start, end))
}
