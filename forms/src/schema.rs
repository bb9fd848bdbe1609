//! Declarative object schema evaluated over the whole record at once.
//!
//! DESIGN
//! ======
//! A [`Schema`] maps each field to an ordered list of checks, each carrying
//! its own message. Evaluation is atomic: every field is checked, the first
//! failing check per field is kept, and cross-field refinements only run
//! once all field checks have passed.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::errors::{FieldError, IssueCode, ValidationErrors};
use crate::validator::Validator;
use crate::values::{Field, FormValues, Gender};

// Leading dots and ".." are rejected separately; regex-lite has no lookaround.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+.-]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Whether `value` has the shape of an email address.
#[must_use]
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Check {
    MinLength(usize),
    Email,
    NonEmpty,
    OneOf(&'static [&'static str]),
}

impl Check {
    fn passes(self, value: &str) -> bool {
        match self {
            Self::MinLength(min) => value.chars().count() >= min,
            Self::Email => is_email(value),
            Self::NonEmpty => !value.is_empty(),
            Self::OneOf(allowed) => allowed.iter().any(|candidate| *candidate == value),
        }
    }

    fn code(self) -> IssueCode {
        match self {
            Self::MinLength(_) => IssueCode::TooShort,
            Self::Email => IssueCode::InvalidFormat,
            Self::NonEmpty => IssueCode::Required,
            Self::OneOf(_) => IssueCode::InvalidEnum,
        }
    }
}

#[derive(Clone, Debug)]
struct FieldCheck {
    check: Check,
    message: String,
}

/// Ordered checks for one string field.
#[derive(Clone, Debug, Default)]
pub struct FieldSchema {
    checks: Vec<FieldCheck>,
}

impl FieldSchema {
    /// A string field with no checks yet.
    #[must_use]
    pub fn string() -> Self {
        Self::default()
    }

    /// At least `len` characters.
    #[must_use]
    pub fn min(self, len: usize, message: impl Into<String>) -> Self {
        self.push(Check::MinLength(len), message)
    }

    /// Well-formed email address.
    #[must_use]
    pub fn email(self, message: impl Into<String>) -> Self {
        self.push(Check::Email, message)
    }

    /// Anything but the empty string.
    #[must_use]
    pub fn non_empty(self, message: impl Into<String>) -> Self {
        self.push(Check::NonEmpty, message)
    }

    /// Exact membership in `allowed`.
    #[must_use]
    pub fn one_of(self, allowed: &'static [&'static str], message: impl Into<String>) -> Self {
        self.push(Check::OneOf(allowed), message)
    }

    fn push(mut self, check: Check, message: impl Into<String>) -> Self {
        self.checks.push(FieldCheck { check, message: message.into() });
        self
    }

    /// First failing check for `value`.
    #[must_use]
    pub fn evaluate(&self, value: &str) -> Option<FieldError> {
        self.checks
            .iter()
            .find(|entry| !entry.check.passes(value))
            .map(|entry| FieldError::new(entry.check.code(), entry.message.clone()))
    }
}

/// Cross-field constraint attached to the schema as a whole.
#[derive(Clone, Debug)]
struct Refinement {
    field: Field,
    message: String,
    accept: fn(&FormValues) -> bool,
}

/// Whole-record schema: per-field checks plus cross-field refinements.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: BTreeMap<Field, FieldSchema>,
    refinements: Vec<Refinement>,
}

impl Schema {
    /// An empty object schema. Fields without an entry always pass.
    #[must_use]
    pub fn object() -> Self {
        Self::default()
    }

    /// Schema for the contact form.
    #[must_use]
    pub fn contact_form() -> Self {
        const GENDER_MESSAGE: &str = "Select any one of these options";
        Self::object()
            .field(Field::FirstName, FieldSchema::string().min(1, "First Name is required"))
            .field(Field::LastName, FieldSchema::string().min(1, "Last Name is required"))
            .field(
                Field::Email,
                FieldSchema::string()
                    .min(1, "Email is required")
                    .email("Enter a valid email address"),
            )
            .field(
                Field::Gender,
                FieldSchema::string()
                    .non_empty(GENDER_MESSAGE)
                    .one_of(Gender::NAMES, GENDER_MESSAGE),
            )
    }

    /// Set the checks for `field`, replacing any earlier entry.
    #[must_use]
    pub fn field(mut self, field: Field, schema: FieldSchema) -> Self {
        self.fields.insert(field, schema);
        self
    }

    /// Add a cross-field constraint. When `accept` returns false the error is
    /// reported on `field` with `message`.
    #[must_use]
    pub fn refine(
        mut self,
        field: Field,
        message: impl Into<String>,
        accept: fn(&FormValues) -> bool,
    ) -> Self {
        self.refinements.push(Refinement { field, message: message.into(), accept });
        self
    }
}

impl Validator for Schema {
    fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, schema) in &self.fields {
            if let Some(error) = schema.evaluate(values.get(*field)) {
                errors.add(*field, error);
            }
        }
        if !errors.is_empty() {
            return errors;
        }

        for refinement in &self.refinements {
            if !(refinement.accept)(values) {
                errors.add(refinement.field, FieldError::new(IssueCode::Custom, refinement.message.clone()));
            }
        }
        errors
    }
}
