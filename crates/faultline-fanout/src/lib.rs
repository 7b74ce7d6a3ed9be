//! # faultline-fanout
//!
//! Run a fixed set of independent operations concurrently and merge their
//! failures into one [`Fault`](faultline_core::Fault).
//!
//! Two merge policies, each available blocking (scoped threads) and async
//! (tokio tasks):
//!
//! | Entry point | Operation returns | Aggregate root |
//! |-------------|-------------------|----------------|
//! | [`fan_out`] / [`fan_out_async`] | `Option<Fault>` | first failing operation's fault |
//! | [`fan_out_dyn`] / [`fan_out_dyn_async`] | `Result<(), BoxError>` | fresh untagged fault |
//!
//! In both cases:
//! - every operation runs to completion; a failure does not cancel the rest;
//! - failures are merged in the order operations were supplied, whatever
//!   order they finished in;
//! - `None` means nothing failed;
//! - a panicking operation is reported as a fault of kind [`PANIC_KIND`]
//!   instead of tearing down the caller.
//!
//! Dropping an async fan-out before it resolves aborts the tasks it spawned.
//!
//! There is no timeout. Operations that need bounded wait time must enforce
//! it themselves.

mod merge;
mod tasks;
mod threads;

pub use merge::{CANCELLED_KIND, PANIC_KIND};
pub use tasks::{fan_out_async, fan_out_dyn_async};
pub use threads::{fan_out, fan_out_dyn};
