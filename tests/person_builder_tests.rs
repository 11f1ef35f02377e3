//! Comprehensive tests for the person builder

use casebook::models::{Address, CaseNumber, Email, Name, Phone, ShnPeriod, Tag};
use casebook::testutil::defaults::*;
use casebook::testutil::typical_persons::{alice, benson, carl, daniel, typical_persons};
use casebook::testutil::{FixtureDefaults, PersonBuilder};
use casebook::validation::ValidationError;

mod default_builder_tests {
    use super::*;

    #[test]
    fn test_every_field_has_its_default() -> anyhow::Result<()> {
        let person = PersonBuilder::new().build();

        assert_eq!(person.name(), &Name::new(DEFAULT_NAME)?);
        assert_eq!(person.phone(), &Phone::new(DEFAULT_PHONE)?);
        assert_eq!(person.email(), &Email::new(DEFAULT_EMAIL)?);
        assert_eq!(person.case_number(), &CaseNumber::new(DEFAULT_CASE_NUMBER)?);
        assert_eq!(person.home_address(), &Address::new(DEFAULT_HOME_ADDRESS)?);
        assert_eq!(person.work_address(), Some(&Address::new(DEFAULT_WORK_ADDRESS)?));
        assert_eq!(
            person.quarantine_address(),
            Some(&Address::new(DEFAULT_QUARANTINE_ADDRESS)?)
        );
        assert_eq!(person.shn_period(), Some(&ShnPeriod::new(DEFAULT_SHN_PERIOD)?));
        assert_eq!(person.next_of_kin_name(), Some(&Name::new(DEFAULT_NEXT_OF_KIN_NAME)?));
        assert_eq!(
            person.next_of_kin_phone(),
            Some(&Phone::new(DEFAULT_NEXT_OF_KIN_PHONE)?)
        );
        assert_eq!(
            person.next_of_kin_address(),
            Some(&Address::new(DEFAULT_NEXT_OF_KIN_ADDRESS)?)
        );
        assert!(person.tags().is_empty());
        Ok(())
    }

    #[test]
    fn test_new_matches_default_and_config() -> anyhow::Result<()> {
        assert_eq!(PersonBuilder::new(), PersonBuilder::default());
        assert_eq!(
            PersonBuilder::new(),
            PersonBuilder::with_defaults(&FixtureDefaults::default())?
        );
        Ok(())
    }

    #[test]
    fn test_defaults_from_yaml() -> anyhow::Result<()> {
        let defaults = FixtureDefaults::from_yaml(
            "name: Zoe Tan\ncaseNumber: '900'\nshnPeriod: null\ntags: [covid]\n",
        )?;
        let person = PersonBuilder::with_defaults(&defaults)?.build();

        assert_eq!(person.name().as_str(), "Zoe Tan");
        assert_eq!(person.case_number().as_str(), "900");
        assert!(person.shn_period().is_none());
        assert!(person.tags().contains(&Tag::new("covid")?));
        assert_eq!(person.email().as_str(), DEFAULT_EMAIL);
        Ok(())
    }
}

mod setter_tests {
    use super::*;

    #[test]
    fn test_required_setters() -> anyhow::Result<()> {
        let person = PersonBuilder::new()
            .with_name("Zoe Tan")?
            .with_phone("91234567")?
            .with_email("zoe@example.com")?
            .with_case_number("789")?
            .with_home_address("1 Kent Ridge Road")?
            .build();

        assert_eq!(person.name(), &Name::new("Zoe Tan")?);
        assert_eq!(person.phone(), &Phone::new("91234567")?);
        assert_eq!(person.email(), &Email::new("zoe@example.com")?);
        assert_eq!(person.case_number(), &CaseNumber::new("789")?);
        assert_eq!(person.home_address(), &Address::new("1 Kent Ridge Road")?);
        Ok(())
    }

    #[test]
    fn test_optional_setters_with_values() -> anyhow::Result<()> {
        let person = PersonBuilder::new()
            .with_work_address(Some("2 Science Drive"))?
            .with_quarantine_address(Some("3 Hotel Lane"))?
            .with_shn_period(Some("2021-05-01 => 2021-05-14"))?
            .with_next_of_kin_name(Some("Yan Tan"))?
            .with_next_of_kin_phone(Some("81234567"))?
            .with_next_of_kin_address(Some("4 Home Street"))?
            .build();

        assert_eq!(person.work_address(), Some(&Address::new("2 Science Drive")?));
        assert_eq!(person.quarantine_address(), Some(&Address::new("3 Hotel Lane")?));
        assert_eq!(
            person.shn_period(),
            Some(&ShnPeriod::new("2021-05-01 => 2021-05-14")?)
        );
        assert_eq!(person.next_of_kin_name(), Some(&Name::new("Yan Tan")?));
        assert_eq!(person.next_of_kin_phone(), Some(&Phone::new("81234567")?));
        assert_eq!(person.next_of_kin_address(), Some(&Address::new("4 Home Street")?));
        Ok(())
    }

    #[test]
    fn test_none_clears_optional_fields() -> anyhow::Result<()> {
        let mut builder = PersonBuilder::new();
        builder.with_work_address(Some("2 Science Drive"))?;
        builder
            .with_work_address(None)?
            .with_quarantine_address(None)?
            .with_shn_period(None)?
            .with_next_of_kin_name(None)?
            .with_next_of_kin_phone(None)?
            .with_next_of_kin_address(None)?;

        let person = builder.build();
        assert!(person.work_address().is_none());
        assert!(person.quarantine_address().is_none());
        assert!(person.shn_period().is_none());
        assert!(person.next_of_kin_name().is_none());
        assert!(person.next_of_kin_phone().is_none());
        assert!(person.next_of_kin_address().is_none());
        Ok(())
    }

    #[test]
    fn test_zoe_without_next_of_kin_address() -> anyhow::Result<()> {
        let zoe = PersonBuilder::new()
            .with_name("Zoe Tan")?
            .with_next_of_kin_address(None)?
            .build();

        let expected_defaults = PersonBuilder::new().build();
        assert_eq!(zoe.name().as_str(), "Zoe Tan");
        assert!(zoe.next_of_kin_address().is_none());
        assert_eq!(zoe.phone(), expected_defaults.phone());
        assert_eq!(zoe.shn_period(), expected_defaults.shn_period());
        assert_eq!(zoe.next_of_kin_name(), expected_defaults.next_of_kin_name());
        assert_eq!(zoe.tags(), expected_defaults.tags());
        Ok(())
    }

    #[test]
    fn test_invalid_inputs_report_field() {
        let mut builder = PersonBuilder::new();
        let cases = [
            builder.with_name("").map(|_| ()),
            builder.with_phone("abc").map(|_| ()),
            builder.with_email("abc").map(|_| ()),
            builder.with_case_number("x1").map(|_| ()),
            builder.with_home_address(" ").map(|_| ()),
            builder.with_work_address(Some("")).map(|_| ()),
            builder.with_shn_period(Some("soon")).map(|_| ()),
            builder.with_next_of_kin_phone(Some("1")).map(|_| ()),
        ];
        let fields: Vec<&str> = cases
            .iter()
            .map(|result| match result {
                Err(ValidationError::InvalidFieldFormat { field, .. }) => *field,
                Ok(()) => panic!("Expected an InvalidFieldFormat error"),
            })
            .collect();

        assert_eq!(
            fields,
            vec![
                "name",
                "phone",
                "email",
                "case number",
                "address",
                "address",
                "SHN period",
                "phone"
            ]
        );
        assert_eq!(builder, PersonBuilder::new());
    }
}

mod tag_tests {
    use super::*;

    #[test]
    fn test_with_tags_replaces_instead_of_merging() -> anyhow::Result<()> {
        let person = PersonBuilder::new()
            .with_tags(&["a", "b"])?
            .with_tags(&["c"])?
            .build();

        let tags: Vec<&str> = person.tags().iter().map(Tag::as_str).collect();
        assert_eq!(tags, vec!["c"]);
        Ok(())
    }

    #[test]
    fn test_with_no_tags_clears() -> anyhow::Result<()> {
        let person = PersonBuilder::from_person(&benson()).with_tags(&[])?.build();
        assert!(person.tags().is_empty());
        Ok(())
    }

    #[test]
    fn test_duplicate_tags_collapse() -> anyhow::Result<()> {
        let person = PersonBuilder::new()
            .with_tags(&["friends", "friends", "covid"])?
            .build();
        assert_eq!(person.tags().len(), 2);
        Ok(())
    }
}

mod copy_tests {
    use super::*;

    #[test]
    fn test_round_trip_through_builder() {
        for person in typical_persons() {
            assert_eq!(PersonBuilder::from_person(&person).build(), person);
            assert_eq!(PersonBuilder::from(&person).build(), person);
        }
    }

    #[test]
    fn test_copy_preserves_absent_fields() {
        let copy = PersonBuilder::from_person(&daniel()).build();
        assert!(copy.work_address().is_none());
        assert!(copy.shn_period().is_none());
        assert!(copy.next_of_kin_phone().is_none());
    }

    #[test]
    fn test_derived_copy_leaves_source_untouched() -> anyhow::Result<()> {
        let original = alice();
        let edited = PersonBuilder::from_person(&original)
            .with_phone("90000000")?
            .with_tags(&["quarantined"])?
            .build();

        assert_eq!(original, alice());
        assert_eq!(edited.phone().as_str(), "90000000");
        assert!(edited.is_same_person(&original));
        assert_ne!(edited, original);
        Ok(())
    }

    #[test]
    fn test_carl_copy_changes_only_name() -> anyhow::Result<()> {
        let carl = carl();
        let renamed = PersonBuilder::from_person(&carl)
            .with_name("Carl Kurz Junior")?
            .build();
        assert!(!renamed.is_same_person(&carl));
        assert_eq!(renamed.shn_period(), carl.shn_period());
        assert_eq!(renamed.email(), carl.email());
        Ok(())
    }
}

mod independence_tests {
    use super::*;

    #[test]
    fn test_mutation_after_build_does_not_leak() -> anyhow::Result<()> {
        let mut builder = PersonBuilder::new();
        builder.with_tags(&["first"])?;
        let first = builder.build();

        builder
            .with_name("Someone Else")?
            .with_work_address(None)?
            .with_tags(&["second", "third"])?;
        let second = builder.build();

        assert_eq!(first.name().as_str(), DEFAULT_NAME);
        assert!(first.work_address().is_some());
        let first_tags: Vec<&str> = first.tags().iter().map(Tag::as_str).collect();
        assert_eq!(first_tags, vec!["first"]);

        assert_eq!(second.name().as_str(), "Someone Else");
        assert_eq!(second.tags().len(), 2);
        Ok(())
    }

    #[test]
    fn test_repeated_builds_are_equal() {
        let builder = PersonBuilder::from_person(&alice());
        assert_eq!(builder.build(), builder.build());
    }
}
