//! Per-form UI state: which validation strategy a form runs and how its
//! panels and controls read from the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form component owns one [`FormSignal`]. Nothing here is shared
//! between the two forms; the container only places them side by side.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use forms::{DynValidator, Field, FormController, ManualRules, Schema, SubmitAttempt, Validator};
use leptos::prelude::*;

/// Reactive handle to one form's controller.
pub type FormSignal = RwSignal<FormController<DynValidator>>;

/// Which validation strategy a form instance uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// Required-ness declared per field.
    ManualRules,
    /// One schema over the whole record.
    Schema,
}

impl FormKind {
    pub fn heading(self) -> &'static str {
        match self {
            Self::ManualRules => "Manual Rules Form",
            Self::Schema => "Schema-Validated Form",
        }
    }

    pub fn validator(self) -> DynValidator {
        match self {
            Self::ManualRules => Box::new(ManualRules::contact_form()),
            Self::Schema => Box::new(Schema::contact_form()),
        }
    }

    /// Fresh controller with empty values and no snapshot.
    pub fn controller(self) -> FormController<DynValidator> {
        FormController::new(self.validator())
    }
}

/// The two read-only panels rendered under each form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    /// Live mirror of the unsubmitted values.
    Watched,
    /// Last successful snapshot.
    Submitted,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Self::Watched => "Watched Values:",
            Self::Submitted => "Submitted Values:",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Watched => "watched-values",
            Self::Submitted => "submitted-values",
        }
    }
}

/// One `label: value` line of a panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelRow {
    pub label: &'static str,
    pub value: String,
}

/// Rows for `panel`, placeholders already applied.
pub fn panel_rows<V: Validator>(form: &FormController<V>, panel: Panel) -> Vec<PanelRow> {
    Field::ALL
        .into_iter()
        .map(|field| {
            let value = match panel {
                Panel::Watched => form.watched(field),
                Panel::Submitted => form.submitted(field),
            };
            PanelRow { label: field.label(), value: value.to_owned() }
        })
        .collect()
}

/// HTML input type for a text control.
pub fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}

/// Handle a submit event: validate, lock, and start the simulated submission.
///
/// Returns what the controller decided so callers can react if needed.
pub fn submit(form: FormSignal, kind: FormKind) -> Option<SubmitAttempt> {
    let attempt = form.try_update(FormController::begin_submit)?;
    match &attempt {
        SubmitAttempt::Started(values) => {
            log::debug!("{}: submitting {}", kind.heading(), values.email);
            spawn_submission(form);
        }
        SubmitAttempt::Rejected(errors) => {
            log::debug!("{}: {errors}", kind.heading());
        }
        SubmitAttempt::Busy => {
            log::debug!("{}: submit ignored while busy", kind.heading());
        }
    }
    Some(attempt)
}

#[cfg(feature = "hydrate")]
fn spawn_submission(form: FormSignal) {
    let latency = form.with_untracked(|f| f.options().submit_latency());
    leptos::task::spawn_local(async move {
        let outcome = forms::simulate_submission(gloo_timers::future::sleep, latency).await;
        form.update(|f| {
            f.complete_submit(outcome);
        });
    });
}

/// Server-side and native builds only; the browser always takes the
/// `hydrate` branch. Without a browser timer the submission cannot run, so it
/// is failed and the controller logs the error and unlocks.
#[cfg(not(feature = "hydrate"))]
fn spawn_submission(form: FormSignal) {
    form.update(|f| {
        f.complete_submit(Err(forms::SubmissionError::Handler(
            "no browser timer available".to_owned(),
        )));
    });
}
