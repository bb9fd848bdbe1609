//! Headless form state shared by the manual-rules and schema-validated forms.
//!
//! This crate owns everything the UI binds to: the raw field values, the
//! per-field error map, the [`Validator`] seam with its two strategies
//! ([`ManualRules`] and [`Schema`]), and the [`FormController`] submit state
//! machine. It has no UI or runtime dependency; the simulated submission
//! latency is awaited through an injected sleep function so the browser can
//! use a timer future and tests can use a paused clock.

pub mod controller;
pub mod errors;
pub mod options;
pub mod rules;
pub mod schema;
pub mod submit;
pub mod validator;
pub mod values;

pub use controller::{FormController, Phase, SubmitAttempt};
pub use errors::{FieldError, IssueCode, SubmissionError, ValidationErrors};
pub use options::{DEFAULT_SUBMIT_LATENCY_MS, FormOptions, ValidationMode};
pub use rules::{ManualRules, Rule};
pub use schema::{FieldSchema, Schema, is_email};
pub use submit::simulate_submission;
pub use validator::{DynValidator, Validator};
pub use values::{
    Field, FormValues, GENDER_OPTIONS, Gender, SUBMITTED_PLACEHOLDER, SelectOption,
};
