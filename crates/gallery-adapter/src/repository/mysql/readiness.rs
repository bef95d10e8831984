//! Startup readiness polling
//!
//! Opening a pool proves nothing about the server. At startup we probe it
//! on a fixed interval until it answers or the overall deadline passes,
//! which covers containers where MySQL comes up after this process.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::debug;

/// How long, and how often, to probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    /// Pause between failed probes
    pub interval: Duration,
    /// Overall budget, measured from the first probe
    pub deadline: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            deadline: Duration::from_secs(30),
        }
    }
}

/// The backend never answered within the deadline
#[derive(Debug)]
pub struct NotReady<E> {
    pub waited: Duration,
    pub attempts: u32,
    /// Error from the most recent probe that completed; `None` when every
    /// probe was still pending at the deadline
    pub last_error: Option<E>,
}

/// Run `probe` until it succeeds or `policy.deadline` elapses.
///
/// A probe still in flight at the deadline is dropped. Returns the number of
/// attempts it took.
pub async fn wait_until_ready<F, Fut, E>(
    policy: &ReadinessPolicy,
    mut probe: F,
) -> Result<u32, NotReady<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let started = Instant::now();
    let deadline = started + policy.deadline;
    let mut attempts = 0;
    let mut last_error = None;

    loop {
        attempts += 1;
        let remaining = deadline.saturating_duration_since(Instant::now());
        match time::timeout(remaining, probe()).await {
            Ok(Ok(())) => return Ok(attempts),
            Ok(Err(err)) => {
                debug!(attempt = attempts, error = %err, "backend not ready yet");
                last_error = Some(err);
            }
            Err(_) => debug!(attempt = attempts, "probe still pending at deadline"),
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(NotReady {
                waited: now - started,
                attempts,
                last_error,
            });
        }
        time::sleep(policy.interval.min(deadline - now)).await;
    }
}
