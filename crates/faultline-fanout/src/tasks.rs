//! Async fan-out on tokio tasks.
//!
//! Same merge policies as the threaded variants. Every future is spawned
//! before any is awaited, and the handles are awaited in the order the
//! futures were supplied.

use std::collections::VecDeque;
use std::future::Future;

use faultline_core::{BoxError, Fault};
use tokio::task::{JoinError, JoinHandle};

use crate::merge::{cancelled_fault, merge_dyn, merge_typed, panic_fault};

/// Async counterpart of [`fan_out`](crate::fan_out).
///
/// Must be called from within a tokio runtime.
pub async fn fan_out_async<I, Fut>(operations: I) -> Option<Fault>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Option<Fault>> + Send + 'static,
{
    let slots = join_all(operations, |index, error| Some(join_fault(index, error))).await;
    merge_typed(slots)
}

/// Async counterpart of [`fan_out_dyn`](crate::fan_out_dyn).
///
/// Must be called from within a tokio runtime.
pub async fn fan_out_dyn_async<I, Fut>(operations: I) -> Option<Fault>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
{
    let slots = join_all(operations, |index, error| {
        Err(Box::new(join_fault(index, error)) as BoxError)
    })
    .await;
    merge_dyn(slots)
}

async fn join_all<I, Fut, T>(operations: I, on_failure: impl Fn(usize, JoinError) -> T) -> Vec<T>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let mut pending = AbortOnDrop(operations.into_iter().map(tokio::spawn).collect());
    tracing::debug!(operations = pending.0.len(), "async fan-out started");

    let mut slots = Vec::with_capacity(pending.0.len());
    while let Some(handle) = pending.0.front_mut() {
        let outcome = handle.await;
        pending.0.pop_front();
        let slot = match outcome {
            Ok(result) => result,
            Err(error) => on_failure(slots.len(), error),
        };
        slots.push(slot);
    }
    slots
}

/// Handles not yet joined. Dropping the fan-out future before every handle
/// is joined aborts the tasks still pending.
struct AbortOnDrop<T>(VecDeque<JoinHandle<T>>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        if self.0.is_empty() {
            return;
        }
        tracing::debug!(pending = self.0.len(), "async fan-out dropped, aborting tasks");
        for handle in &self.0 {
            handle.abort();
        }
    }
}

fn join_fault(index: usize, error: JoinError) -> Fault {
    match error.try_into_panic() {
        Ok(payload) => panic_fault(index, payload.as_ref()),
        Err(error) => cancelled_fault(index, error.to_string()),
    }
}
