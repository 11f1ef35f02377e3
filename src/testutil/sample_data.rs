//! Sample data for seeding an address book

use super::person_builder::PersonBuilder;
use crate::models::{Person, Tag};
use crate::validation::ValidationResult;
use std::collections::BTreeSet;

/// Parse raw tag names into a tag set.
///
/// Duplicates collapse; the first invalid name fails the whole call.
///
/// # Example
///
/// ```rust
/// use casebook::testutil::tag_set;
///
/// let tags = tag_set(["friends", "colleagues", "friends"]).unwrap();
/// assert_eq!(tags.len(), 2);
/// assert!(tag_set(["best friends"]).is_err());
/// ```
pub fn tag_set<I, S>(tags: I) -> ValidationResult<BTreeSet<Tag>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().map(|tag| Tag::new(tag.as_ref())).collect()
}

/// A small address book's worth of people
pub fn sample_persons() -> ValidationResult<Vec<Person>> {
    let mut persons = Vec::new();

    persons.push(
        PersonBuilder::new()
            .with_name("Alex Yeoh")?
            .with_phone("87438807")?
            .with_email("alexyeoh@example.com")?
            .with_case_number("101")?
            .with_home_address("Blk 30 Geylang Street 29, #06-40")?
            .with_work_address(None)?
            .with_quarantine_address(Some("Blk 30 Geylang Street 29, #06-40"))?
            .with_shn_period(Some("2021-03-20 => 2021-04-03"))?
            .with_next_of_kin_name(Some("Brenda Yeoh"))?
            .with_next_of_kin_phone(Some("87438808"))?
            .with_next_of_kin_address(Some("Blk 30 Geylang Street 29, #06-40"))?
            .with_tags(&["friends"])?
            .build(),
    );

    persons.push(
        PersonBuilder::new()
            .with_name("Bernice Yu")?
            .with_phone("99272758")?
            .with_email("berniceyu@example.com")?
            .with_case_number("102")?
            .with_home_address("Blk 30 Lorong 3 Serangoon Gardens, #07-18")?
            .with_work_address(Some("1 Raffles Place, #20-61"))?
            .with_quarantine_address(Some("Blk 30 Lorong 3 Serangoon Gardens, #07-18"))?
            .with_shn_period(Some("2021-03-25 => 2021-04-08"))?
            .with_next_of_kin_name(None)?
            .with_next_of_kin_phone(None)?
            .with_next_of_kin_address(None)?
            .with_tags(&["colleagues", "friends"])?
            .build(),
    );

    persons.push(
        PersonBuilder::new()
            .with_name("Charlotte Oliveiro")?
            .with_phone("93210283")?
            .with_email("charlotte@example.com")?
            .with_case_number("103")?
            .with_home_address("Blk 11 Ang Mo Kio Street 74, #11-04")?
            .with_work_address(None)?
            .with_quarantine_address(None)?
            .with_shn_period(None)?
            .with_next_of_kin_name(Some("Oliver Oliveiro"))?
            .with_next_of_kin_phone(Some("93210284"))?
            .with_next_of_kin_address(None)?
            .with_tags(&["neighbours"])?
            .build(),
    );

    persons.push(
        PersonBuilder::new()
            .with_name("David Li")?
            .with_phone("91031282")?
            .with_email("lidavid@example.com")?
            .with_case_number("104")?
            .with_home_address("Blk 436 Serangoon Gardens Street 26, #16-43")?
            .with_work_address(Some("10 Anson Road, #05-01"))?
            .with_quarantine_address(Some("Hotel Quarantine Facility, 1 Nanson Road"))?
            .with_shn_period(Some("2021-04-02 => 2021-04-16"))?
            .with_next_of_kin_name(None)?
            .with_next_of_kin_phone(None)?
            .with_next_of_kin_address(None)?
            .with_tags(&["family"])?
            .build(),
    );

    Ok(persons)
}
