use super::*;

#[test]
fn contact_form_reports_every_empty_field() {
    let errors = ManualRules::contact_form().validate(&FormValues::default());
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.message(Field::FirstName), Some("First Name is required"));
    assert_eq!(errors.message(Field::LastName), Some("Last Name is required"));
    assert_eq!(errors.message(Field::Email), Some("Email is required"));
    assert_eq!(errors.message(Field::Gender), Some("Please select your gender"));
}

#[test]
fn contact_form_accepts_capitalized_other_option() {
    let values = FormValues::new("Ada", "Lovelace", "ada@example.com", "Other");
    assert!(ManualRules::contact_form().validate(&values).is_empty());
}

#[test]
fn contact_form_only_checks_presence_of_email() {
    let values = FormValues::new("Ada", "Lovelace", "not-an-email", "female");
    assert!(ManualRules::contact_form().validate(&values).is_empty());
}

#[test]
fn required_treats_whitespace_as_present() {
    assert!(Rule::required("x").check("  ").is_none());
    assert_eq!(
        Rule::required("x").check("").map(|e| e.code),
        Some(IssueCode::Required)
    );
}

#[test]
fn length_rules_skip_empty_values() {
    assert!(Rule::min_length(3, "short").check("").is_none());
    assert!(Rule::max_length(0, "long").check("").is_none());
}

#[test]
fn length_rules_count_characters() {
    let min = Rule::min_length(3, "short");
    assert_eq!(min.check("ab").map(|e| e.code), Some(IssueCode::TooShort));
    assert!(min.check("åbç").is_none());

    let max = Rule::max_length(2, "long");
    assert_eq!(max.check("abc").map(|e| e.message), Some("long".to_owned()));
}

#[test]
fn pattern_rule_reports_invalid_format() {
    let rule = Rule::pattern(Regex::new("^[0-9]+$").expect("regex"), "digits only");
    assert!(rule.check("123").is_none());
    assert_eq!(rule.check("12a").map(|e| e.code), Some(IssueCode::InvalidFormat));
}

#[test]
fn first_failing_rule_wins() {
    let rules = ManualRules::new().register(
        Field::FirstName,
        [Rule::min_length(3, "too short"), Rule::max_length(1, "too long")],
    );
    let values = FormValues::new("Al", "", "", "");
    assert_eq!(rules.validate(&values).message(Field::FirstName), Some("too short"));
}

#[test]
fn unregistered_fields_always_pass() {
    let rules = ManualRules::new().register(Field::Email, [Rule::required("Email is required")]);
    let errors = rules.validate(&FormValues::default());
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
    assert!(rules.rules(Field::Gender).is_empty());
}
