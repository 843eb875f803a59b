//! Asynchronous Utilities.
//!
//! Thin wrappers over the `tokio` runtime for the timing helpers the rest of
//! the crate and its callers use: spawning, timeouts, sleeping, yielding to
//! the scheduler and deferred execution.
//!
//! All functions must be called from within a Tokio runtime.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use utilbelt_core::utils::async_utils::{sleep, tick, timeout};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let slept = sleep(Duration::from_millis(5)).await;
//! assert_eq!(slept, Duration::from_millis(5));
//!
//! let value = timeout(Duration::from_secs(1), tick("ready")).await.unwrap();
//! assert_eq!(value, "ready");
//! # }
//! ```

use std::future::Future;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tokio::time;

/// Spawns a new asynchronous task on the Tokio runtime.
///
/// Direct wrapper around `tokio::spawn`; the returned handle resolves to the
/// future's output.
pub fn spawn_task<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    task::spawn(future)
}

/// Runs `future`, giving up after `duration`.
///
/// # Errors
///
/// Returns `tokio::time::error::Elapsed` if `duration` passes before the
/// future completes.
pub async fn timeout<F, T>(duration: Duration, future: F) -> Result<T, time::error::Elapsed>
where
    F: Future<Output = T>,
{
    time::timeout(duration, future).await
}

/// Sleeps for `duration` and resolves with it.
pub async fn sleep(duration: Duration) -> Duration {
    time::sleep(duration).await;
    duration
}

/// Yields once to the scheduler, then resolves with `value`.
///
/// Lets other ready tasks run before the caller continues.
pub async fn tick<T>(value: T) -> T {
    task::yield_now().await;
    value
}

/// Runs `f` on a spawned task after `duration` has elapsed.
///
/// Aborting the returned handle before the deadline cancels the call.
pub fn delay<F>(f: F, duration: Duration) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    task::spawn(async move {
        time::sleep(duration).await;
        f();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_spawn_task() {
        let handle = spawn_task(async { 42 });
        assert_eq!(handle.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_timeout_success() {
        let result = timeout(Duration::from_secs(1), async { 42 }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_timeout_elapsed() {
        let result = timeout(Duration::from_millis(10), async {
            sleep(Duration::from_millis(200)).await;
            42
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_sleep_resolves_with_duration() {
        let start = std::time::Instant::now();
        let slept = sleep(Duration::from_millis(30)).await;
        assert_eq!(slept, Duration::from_millis(30));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_sleep_zero() {
        assert_eq!(sleep(Duration::ZERO).await, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_tick_returns_value() {
        assert_eq!(tick(7).await, 7);
        assert_eq!(tick("done").await, "done");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_tick_lets_other_tasks_run() {
        let flag = Arc::new(AtomicBool::new(false));
        let task_flag = flag.clone();
        let handle = spawn_task(async move {
            task_flag.store(true, Ordering::SeqCst);
        });

        tick(()).await;
        assert!(flag.load(Ordering::SeqCst));
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_delay_runs_after_duration() {
        let flag = Arc::new(AtomicBool::new(false));
        let task_flag = flag.clone();
        let start = std::time::Instant::now();

        delay(move || task_flag.store(true, Ordering::SeqCst), Duration::from_millis(20))
            .await
            .unwrap();

        assert!(flag.load(Ordering::SeqCst));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_delay_abort_cancels() {
        let flag = Arc::new(AtomicBool::new(false));
        let task_flag = flag.clone();

        let handle = delay(move || task_flag.store(true, Ordering::SeqCst), Duration::from_secs(5));
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
        assert!(!flag.load(Ordering::SeqCst));
    }
}
