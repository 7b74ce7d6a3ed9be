//! Blocking fan-out on scoped OS threads.
//!
//! One thread per operation, all spawned before any is joined. Joining the
//! handles in order is the barrier: nothing is merged until every thread has
//! finished, and each thread only produces its own slot.

use std::any::Any;
use std::thread;

use faultline_core::{BoxError, Fault};

use crate::merge::{merge_dyn, merge_typed, panic_fault};

/// Run every operation concurrently and merge the faults they return.
///
/// Blocks until all operations finish. The first failing operation (by
/// position) supplies the root; later failures become its causes. Returns
/// `None` when nothing failed.
///
/// ```
/// use faultline_core::Fault;
/// use faultline_fanout::fan_out;
///
/// type Op = Box<dyn FnOnce() -> Option<Fault> + Send>;
///
/// let operations: Vec<Op> = vec![
///     Box::new(|| None),
///     Box::new(|| Some(Fault::unspecified([]).with_kind("A"))),
/// ];
/// let aggregate = fan_out(operations);
/// assert_eq!(aggregate.map(|f| f.kind().to_string()).as_deref(), Some("A"));
/// ```
pub fn fan_out<I, F>(operations: I) -> Option<Fault>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Option<Fault> + Send,
{
    let slots = run_all(operations, |index, payload| Some(panic_fault(index, payload)));
    merge_typed(slots)
}

/// Run operations returning arbitrary errors and merge every failure under a
/// fresh root fault, in operation order.
///
/// Blocks until all operations finish. Returns `None` when nothing failed.
pub fn fan_out_dyn<I, F>(operations: I) -> Option<Fault>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<(), BoxError> + Send,
{
    let slots = run_all(operations, |index, payload| {
        Err(Box::new(panic_fault(index, payload)) as BoxError)
    });
    merge_dyn(slots)
}

fn run_all<I, F, T>(operations: I, on_panic: impl Fn(usize, &(dyn Any + Send)) -> T) -> Vec<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> T + Send,
    T: Send,
{
    let operations: Vec<F> = operations.into_iter().collect();
    tracing::debug!(operations = operations.len(), "fan-out started");

    thread::scope(|scope| {
        let handles: Vec<_> = operations
            .into_iter()
            .map(|operation| scope.spawn(operation))
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| {
                handle
                    .join()
                    .unwrap_or_else(|payload| on_panic(index, payload.as_ref()))
            })
            .collect()
    })
}
