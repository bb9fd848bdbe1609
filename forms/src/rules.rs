//! Manual per-field rules, declared inline where each field is registered.
//!
//! DESIGN
//! ======
//! Every field carries its own ordered rule list and is checked on its own;
//! no rule sees any other field. Length and pattern rules skip empty values
//! so that only `Required` decides whether a blank field is acceptable.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::collections::BTreeMap;

use regex_lite::Regex;

use crate::errors::{FieldError, IssueCode, ValidationErrors};
use crate::validator::Validator;
use crate::values::{Field, FormValues};

/// A single predicate + message pair attached to one field.
#[derive(Clone, Debug)]
pub enum Rule {
    /// Value must be non-empty.
    Required { message: String },
    /// Value must have at least `min` characters.
    MinLength { min: usize, message: String },
    /// Value must have at most `max` characters.
    MaxLength { max: usize, message: String },
    /// Value must match `regex`.
    Pattern { regex: Regex, message: String },
}

impl Rule {
    #[must_use]
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required { message: message.into() }
    }

    #[must_use]
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength { min, message: message.into() }
    }

    #[must_use]
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength { max, message: message.into() }
    }

    #[must_use]
    pub fn pattern(regex: Regex, message: impl Into<String>) -> Self {
        Self::Pattern { regex, message: message.into() }
    }

    /// Evaluate the rule against one raw value.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<FieldError> {
        let empty = value.is_empty();
        match self {
            Self::Required { message } if empty => {
                Some(FieldError::new(IssueCode::Required, message.clone()))
            }
            Self::MinLength { min, message } if !empty && value.chars().count() < *min => {
                Some(FieldError::new(IssueCode::TooShort, message.clone()))
            }
            Self::MaxLength { max, message } if !empty && value.chars().count() > *max => {
                Some(FieldError::new(IssueCode::TooLong, message.clone()))
            }
            Self::Pattern { regex, message } if !empty && !regex.is_match(value) => {
                Some(FieldError::new(IssueCode::InvalidFormat, message.clone()))
            }
            _ => None,
        }
    }
}

/// Field-by-field validation, each field with its own rule list.
#[derive(Clone, Debug, Default)]
pub struct ManualRules {
    fields: BTreeMap<Field, Vec<Rule>>,
}

impl ManualRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for the contact form: every control is required.
    #[must_use]
    pub fn contact_form() -> Self {
        Self::new()
            .register(Field::FirstName, [Rule::required("First Name is required")])
            .register(Field::LastName, [Rule::required("Last Name is required")])
            .register(Field::Email, [Rule::required("Email is required")])
            .register(Field::Gender, [Rule::required("Please select your gender")])
    }

    /// Append `rules` to `field`'s list.
    #[must_use]
    pub fn register(mut self, field: Field, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.entry(field).or_default().extend(rules);
        self
    }

    #[must_use]
    pub fn rules(&self, field: Field) -> &[Rule] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl Validator for ManualRules {
    fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in Field::ALL {
            if let Some(error) = self.validate_field(values, field) {
                errors.add(field, error);
            }
        }
        errors
    }

    fn validate_field(&self, values: &FormValues, field: Field) -> Option<FieldError> {
        let value = values.get(field);
        self.rules(field).iter().find_map(|rule| rule.check(value))
    }
}
