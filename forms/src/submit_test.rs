use super::*;

#[tokio::test(start_paused = true)]
async fn resolves_after_latency() {
    let started = tokio::time::Instant::now();
    let result = simulate_submission(tokio::time::sleep, Duration::from_millis(1500)).await;
    assert_eq!(result, Ok(()));
    assert!(started.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn is_pending_before_latency_elapses() {
    let pending = simulate_submission(tokio::time::sleep, Duration::from_millis(1500));
    let early = tokio::time::timeout(Duration::from_millis(1000), pending).await;
    assert!(early.is_err());
}

#[tokio::test]
async fn passes_latency_to_sleep_function() {
    let mut seen = None;
    let result = simulate_submission(
        |latency| {
            seen = Some(latency);
            std::future::ready(())
        },
        Duration::from_millis(42),
    )
    .await;
    assert_eq!(result, Ok(()));
    assert_eq!(seen, Some(Duration::from_millis(42)));
}
