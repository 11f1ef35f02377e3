//! Typical persons used across tests
//!
//! Each fixture leaves a different mix of optional fields absent.

use super::person_builder::PersonBuilder;
use crate::models::Person;
use crate::validation::ValidationResult;

fn fixture(
    configure: impl FnOnce(&mut PersonBuilder) -> ValidationResult<&mut PersonBuilder>,
) -> Person {
    let mut builder = PersonBuilder::new();
    configure(&mut builder).expect("typical person fixture values are valid");
    builder.build()
}

/// Every optional field present
pub fn alice() -> Person {
    fixture(|person| {
        person
            .with_name("Alice Pauline")?
            .with_phone("94351253")?
            .with_email("alice@example.com")?
            .with_case_number("1")?
            .with_home_address("123, Jurong West Ave 6, #08-111")?
            .with_work_address(Some("3 Temasek Boulevard, #12-01"))?
            .with_quarantine_address(Some("123, Jurong West Ave 6, #08-111"))?
            .with_shn_period(Some("2021-04-01 => 2021-04-14"))?
            .with_next_of_kin_name(Some("Paul Pauline"))?
            .with_next_of_kin_phone(Some("94351254"))?
            .with_next_of_kin_address(Some("123, Jurong West Ave 6, #08-111"))?
            .with_tags(&["friends"])
    })
}

/// No work address
pub fn benson() -> Person {
    fixture(|person| {
        person
            .with_name("Benson Meier")?
            .with_phone("98765432")?
            .with_email("johnd@example.com")?
            .with_case_number("2")?
            .with_home_address("311, Clementi Ave 2, #02-25")?
            .with_work_address(None)?
            .with_quarantine_address(Some("311, Clementi Ave 2, #02-25"))?
            .with_shn_period(Some("2021-04-03 => 2021-04-17"))?
            .with_next_of_kin_name(Some("Anna Meier"))?
            .with_next_of_kin_phone(Some("98765433"))?
            .with_next_of_kin_address(Some("311, Clementi Ave 2, #02-25"))?
            .with_tags(&["owesMoney", "friends"])
    })
}

/// Only the SHN period among the optional fields
pub fn carl() -> Person {
    fixture(|person| {
        person
            .with_name("Carl Kurz")?
            .with_phone("95352563")?
            .with_email("heinz@example.com")?
            .with_case_number("3")?
            .with_home_address("wall street")?
            .with_work_address(None)?
            .with_quarantine_address(None)?
            .with_shn_period(Some("2021-04-05 => 2021-04-19"))?
            .with_next_of_kin_name(None)?
            .with_next_of_kin_phone(None)?
            .with_next_of_kin_address(None)?
            .with_tags(&[])
    })
}

/// No optional fields at all
pub fn daniel() -> Person {
    fixture(|person| {
        person
            .with_name("Daniel Meier")?
            .with_phone("87652533")?
            .with_email("cornelia@example.com")?
            .with_case_number("4")?
            .with_home_address("10th street")?
            .with_work_address(None)?
            .with_quarantine_address(None)?
            .with_shn_period(None)?
            .with_next_of_kin_name(None)?
            .with_next_of_kin_phone(None)?
            .with_next_of_kin_address(None)?
            .with_tags(&["friends"])
    })
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel()]
}
