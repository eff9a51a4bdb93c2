//! Scoped execution timing.

use std::time::Instant;

/// Runs `work`, logging when it starts and how long it took.
///
/// The closure's return value is passed through untouched.
pub fn timed<T, F>(label: &str, work: F) -> T
where
    F: FnOnce() -> T,
{
    #[cfg(feature = "tracing")]
    tracing::info!("Starting {}...", label);

    let start = Instant::now();
    let result = work();
    let elapsed = start.elapsed();

    #[cfg(feature = "tracing")]
    tracing::info!("{} completed in {:.2} seconds.", label, elapsed.as_secs_f64());
    #[cfg(not(feature = "tracing"))]
    let _ = (label, elapsed);

    result
}
