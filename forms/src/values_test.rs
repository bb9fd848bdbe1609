use super::*;

#[test]
fn field_names_match_record_keys() {
    let json = serde_json::to_value(FormValues::new("a", "b", "c", "d")).expect("serialize");
    for field in Field::ALL {
        assert!(json.get(field.name()).is_some(), "missing key {}", field.name());
    }
}

#[test]
fn field_from_name_round_trips_every_field() {
    for field in Field::ALL {
        assert_eq!(Field::from_name(field.name()), Some(field));
    }
    assert_eq!(Field::from_name("phone"), None);
}

#[test]
fn gender_parse_accepts_lowercase_constants_only() {
    assert_eq!(Gender::parse("male"), Some(Gender::Male));
    assert_eq!(Gender::parse("female"), Some(Gender::Female));
    assert_eq!(Gender::parse("other"), Some(Gender::Other));
    assert_eq!(Gender::parse("Other"), None);
    assert_eq!(Gender::parse(""), None);
}

#[test]
fn gender_names_follow_as_str() {
    let names: Vec<&str> = [Gender::Male, Gender::Female, Gender::Other]
        .into_iter()
        .map(Gender::as_str)
        .collect();
    assert_eq!(names, Gender::NAMES);
}

#[test]
fn gender_options_start_with_empty_sentinel() {
    assert_eq!(GENDER_OPTIONS[0], SelectOption { value: "", label: "Select" });
    assert_eq!(GENDER_OPTIONS[3].value, "Other");
}

#[test]
fn default_values_are_empty() {
    let values = FormValues::default();
    assert!(values.is_empty());
}

#[test]
fn set_then_get_targets_single_field() {
    let mut values = FormValues::default();
    values.set(Field::Email, "ada@example.com");
    assert_eq!(values.get(Field::Email), "ada@example.com");
    assert_eq!(values.get(Field::FirstName), "");
    assert!(!values.is_empty());
}

#[test]
fn watched_falls_back_to_placeholder() {
    let mut values = FormValues::default();
    assert_eq!(values.watched(Field::FirstName), "Not entered");
    assert_eq!(values.watched(Field::Gender), "Not selected");
    values.set(Field::Gender, "female");
    assert_eq!(values.watched(Field::Gender), "female");
}

#[test]
fn record_serializes_with_camel_case_keys() {
    let values = FormValues::new("Ada", "Lovelace", "ada@example.com", "female");
    let json = serde_json::to_string(&values).expect("serialize");
    assert_eq!(
        json,
        r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","gender":"female"}"#
    );
}
