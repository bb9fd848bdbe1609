//! The validation seam shared by both form strategies.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use crate::errors::{FieldError, ValidationErrors};
use crate::values::{Field, FormValues};

/// Turns a value record into per-field errors.
///
/// Implementations report at most one error per field, the first failing
/// check in declaration order. An empty result accepts the record.
pub trait Validator {
    fn validate(&self, values: &FormValues) -> ValidationErrors;

    /// Error for one field, evaluated against the whole record.
    fn validate_field(&self, values: &FormValues, field: Field) -> Option<FieldError> {
        self.validate(values).get(field).cloned()
    }
}

/// Type-erased validator so both strategies can sit behind one controller type.
pub type DynValidator = Box<dyn Validator + Send + Sync>;

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, values: &FormValues) -> ValidationErrors {
        (**self).validate(values)
    }

    fn validate_field(&self, values: &FormValues, field: Field) -> Option<FieldError> {
        (**self).validate_field(values, field)
    }
}
