//! Controller options: validation timing and the simulated submit latency.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Latency of the simulated submission, in milliseconds.
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1500;

/// When edits trigger validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Only the submit attempt validates.
    #[default]
    OnSubmit,
    /// Every edit re-validates the edited field.
    OnChange,
}

/// Options for a [`FormController`](crate::FormController).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    /// Validation timing before the first submit attempt.
    pub mode: ValidationMode,
    /// Validation timing once the form has been submitted at least once.
    pub revalidate_mode: ValidationMode,
    pub submit_latency_ms: u64,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            mode: ValidationMode::OnSubmit,
            revalidate_mode: ValidationMode::OnChange,
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
        }
    }
}

impl FormOptions {
    #[must_use]
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }
}
