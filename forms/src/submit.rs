//! Simulated asynchronous submission.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;
use std::time::Duration;

use crate::errors::SubmissionError;

/// Wait `latency` using the caller's timer, then report success.
///
/// The browser passes `gloo_timers::future::sleep`; tests pass
/// `tokio::time::sleep` on a paused clock. There is no cancellation: once
/// awaited, the future always runs to completion.
///
/// # Errors
///
/// The simulated handler never fails. The `Result` is the contract a real
/// handler would honor, and callers feed it straight into
/// [`FormController::complete_submit`](crate::FormController::complete_submit).
pub async fn simulate_submission<S, F>(sleep: S, latency: Duration) -> Result<(), SubmissionError>
where
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    sleep(latency).await;
    Ok(())
}
