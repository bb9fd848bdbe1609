//! Form controller: values, errors, submit lock and the last snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each UI form owns one controller inside a signal. Edits go through
//! [`FormController::set_value`]; the submit handler calls
//! [`FormController::begin_submit`], awaits the simulated latency outside
//! the controller, then hands the outcome to
//! [`FormController::complete_submit`].
//!
//! DESIGN
//! ======
//! One submit cycle walks `Idle -> Validating -> {Invalid -> Idle,
//! Submitting -> Idle}`. Validation is synchronous, so only `Idle` and
//! `Submitting` are ever observable between calls; the transient phases are
//! visible in debug logs. The record being submitted is captured when the
//! cycle starts, so edits made while the submit control is locked do not
//! leak into the snapshot.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;
use std::time::Duration;

use crate::errors::{SubmissionError, ValidationErrors};
use crate::options::{FormOptions, ValidationMode};
use crate::submit::simulate_submission;
use crate::validator::Validator;
use crate::values::{Field, FormValues, SUBMITTED_PLACEHOLDER};

/// Position in the submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
}

/// Result of pressing submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the caller must await the submission and then call
    /// [`FormController::complete_submit`]. Carries the captured record.
    Started(FormValues),
    /// Validation failed; nothing was started.
    Rejected(ValidationErrors),
    /// A submission is already in flight; nothing changed.
    Busy,
}

/// State of one form instance.
#[derive(Clone, Debug)]
pub struct FormController<V> {
    validator: V,
    options: FormOptions,
    values: FormValues,
    errors: ValidationErrors,
    phase: Phase,
    submit_count: u32,
    pending: Option<FormValues>,
    snapshot: Option<FormValues>,
}

impl<V: Validator> FormController<V> {
    #[must_use]
    pub fn new(validator: V) -> Self {
        Self::with_options(validator, FormOptions::default())
    }

    #[must_use]
    pub fn with_options(validator: V, options: FormOptions) -> Self {
        Self {
            validator,
            options,
            values: FormValues::default(),
            errors: ValidationErrors::new(),
            phase: Phase::Idle,
            submit_count: 0,
            pending: None,
            snapshot: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    #[must_use]
    pub fn validator(&self) -> &V {
        &self.validator
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Store a new control value, re-validating the field when the active
    /// mode asks for it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.active_mode() == ValidationMode::OnChange {
            let error = self.validator.validate_field(&self.values, field);
            self.errors.set(field, error);
        }
    }

    /// Validate the whole record now, replacing the error map.
    ///
    /// Returns true when the record is valid.
    pub fn trigger(&mut self) -> bool {
        self.errors = self.validator.validate(&self.values);
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Inline message for `field`, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The submit control is disabled exactly while a submission is in flight.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.is_submitting()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Submitting..." } else { "Submit" }
    }

    /// Submit attempts since mount or the last reset.
    #[must_use]
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Record captured by the last successful submission.
    #[must_use]
    pub fn snapshot(&self) -> Option<&FormValues> {
        self.snapshot.as_ref()
    }

    /// Live preview text for `field`.
    #[must_use]
    pub fn watched(&self, field: Field) -> &str {
        self.values.watched(field)
    }

    /// Submitted-panel text for `field`.
    #[must_use]
    pub fn submitted(&self, field: Field) -> &str {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.get(field))
            .filter(|value| !value.is_empty())
            .unwrap_or(SUBMITTED_PLACEHOLDER)
    }

    /// Clear values, errors and the submit count. The snapshot is kept.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.submit_count = 0;
    }

    /// Validate and, if valid, lock the form for submission.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            log::debug!("submit ignored: submission already in flight");
            return SubmitAttempt::Busy;
        }

        self.submit_count = self.submit_count.saturating_add(1);
        self.transition(Phase::Validating);

        let errors = self.validator.validate(&self.values);
        if !errors.is_empty() {
            self.transition(Phase::Invalid);
            log::debug!("submit rejected: {errors}");
            self.errors = errors.clone();
            self.transition(Phase::Idle);
            return SubmitAttempt::Rejected(errors);
        }

        self.errors.clear();
        self.pending = Some(self.values.clone());
        self.transition(Phase::Submitting);
        SubmitAttempt::Started(self.values.clone())
    }

    /// Finish the in-flight submission.
    ///
    /// On success the captured record becomes the snapshot, is logged, and
    /// the form is reset. On failure the error is logged and values, errors
    /// and snapshot are left as they were. Either way the form ends `Idle`.
    /// Returns the new snapshot on success.
    pub fn complete_submit(&mut self, outcome: Result<(), SubmissionError>) -> Option<&FormValues> {
        if !self.is_submitting() {
            log::warn!("complete_submit called with no submission in flight");
            return None;
        }

        let pending = self.pending.take();
        let succeeded = match outcome {
            Ok(()) => {
                if let Some(values) = pending {
                    log_submission(&values);
                    self.snapshot = Some(values);
                }
                self.reset();
                true
            }
            Err(e) => {
                log::error!("Form submission error: {e}");
                false
            }
        };

        self.transition(Phase::Idle);
        if succeeded { self.snapshot.as_ref() } else { None }
    }

    /// Run a whole submit cycle, awaiting the simulated latency with `sleep`.
    pub async fn handle_submit<S, F>(&mut self, sleep: S) -> SubmitAttempt
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        let attempt = self.begin_submit();
        if matches!(attempt, SubmitAttempt::Started(_)) {
            let outcome = simulate_submission(sleep, self.options.submit_latency()).await;
            self.complete_submit(outcome);
        }
        attempt
    }

    fn active_mode(&self) -> ValidationMode {
        if self.submit_count == 0 { self.options.mode } else { self.options.revalidate_mode }
    }

    fn transition(&mut self, next: Phase) {
        log::trace!("form phase {:?} -> {next:?}", self.phase);
        self.phase = next;
    }
}

fn log_submission(values: &FormValues) {
    match submission_line(values) {
        Ok(line) => log::info!("{line}"),
        Err(e) => log::warn!("Form Data: {values:?} (json encoding failed: {e})"),
    }
}

/// The `Form Data: {json}` line logged for each successful submission.
fn submission_line(values: &FormValues) -> Result<String, serde_json::Error> {
    serde_json::to_string(values).map(|json| format!("Form Data: {json}"))
}
