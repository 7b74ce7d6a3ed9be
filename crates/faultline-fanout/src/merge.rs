//! Merge policies applied after every operation has finished.
//!
//! Both policies walk results in the order the operations were supplied, so
//! the aggregate's cause list does not depend on completion order.

use std::any::Any;

use faultline_core::{BoxError, Cause, Fault, LeafMessage};

/// Kind given to the fault standing in for a panicked operation.
pub const PANIC_KIND: &str = "Panic";

/// Kind given to the fault standing in for a task the runtime cancelled.
pub const CANCELLED_KIND: &str = "Cancelled";

/// First failure becomes the root; later failures are appended to it.
///
/// A result counts as a failure when it is a non-empty fault.
pub(crate) fn merge_typed<I>(results: I) -> Option<Fault>
where
    I: IntoIterator<Item = Option<Fault>>,
{
    let mut failures = results
        .into_iter()
        .flatten()
        .filter(|fault| !fault.is_empty());

    let mut root = failures.next()?;
    let mut merged = 1_usize;
    for fault in failures {
        root.push_cause(Cause::Nested(fault));
        merged += 1;
    }

    tracing::debug!(failures = merged, "fan-out merged typed failures");
    Some(root)
}

/// A fresh, untagged root collects every failure as a cause.
///
/// Failing structured values are nested, never promoted to root. An `Err`
/// carrying an empty fault counts as success.
pub(crate) fn merge_dyn<I>(results: I) -> Option<Fault>
where
    I: IntoIterator<Item = Result<(), BoxError>>,
{
    let mut root = Fault::empty();
    for error in results.into_iter().filter_map(Result::err) {
        let cause = Cause::from_boxed(error);
        if cause.is_empty() {
            tracing::trace!("empty fault returned as error, counted as success");
            continue;
        }
        root.push_cause(cause);
    }

    if root.is_empty() {
        return None;
    }
    tracing::debug!(failures = root.cause_count(), "fan-out merged failures");
    Some(root)
}

pub(crate) fn panic_fault(index: usize, payload: &(dyn Any + Send)) -> Fault {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());

    tracing::warn!(task = index, %detail, "fan-out operation panicked");
    Fault::new(LeafMessage(detail))
        .with_kind(PANIC_KIND)
        .with_message(format!("operation {index} panicked"))
}

pub(crate) fn cancelled_fault(index: usize, reason: String) -> Fault {
    tracing::warn!(task = index, %reason, "fan-out operation cancelled");
    Fault::new(LeafMessage(reason))
        .with_kind(CANCELLED_KIND)
        .with_message(format!("operation {index} was cancelled"))
}
