//! Validation and submission error types.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::values::Field;

/// Which kind of check produced a [`FieldError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Value is empty.
    Required,
    /// Value is shorter than a minimum length.
    TooShort,
    /// Value is longer than a maximum length.
    TooLong,
    /// Value does not have the expected shape (pattern or email).
    InvalidFormat,
    /// Value is not a member of the allowed set.
    InvalidEnum,
    /// A cross-field refinement failed.
    Custom,
}

/// One inline error rendered beneath a field label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: IssueCode,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

/// Per-field validation failures, keyed by [`Field`].
///
/// Holds at most one error per field. An empty map means the record passed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|error| error.message.as_str())
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Record `error` for `field` unless the field already failed.
    ///
    /// Validators call this in check order, so the first failure wins.
    pub fn add(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    /// Replace whatever is stored for `field` with `error` (or clear it).
    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Failing fields in render order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Failure of the asynchronous submission step.
///
/// The simulated submission never produces one; the controller still routes
/// it through the same recovery path a real handler would need.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission handler failed: {0}")]
    Handler(String),
}
