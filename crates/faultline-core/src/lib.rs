//! # faultline-core
//!
//! Structured fault values for Faultline.
//!
//! A [`Fault`] carries:
//! - classification tags: a coarse `kind`, a machine-readable `code`, and a
//!   human `message`, each independent and optional;
//! - an ordered cause list of plain errors or nested faults ([`Cause`]);
//! - optional [`Provenance`] of the call site that finalized it.
//!
//! Faults render to a compact multi-line string, and serialize to three JSON
//! projections: [`PublicFault`] for untrusted consumers, [`DiagnosticFault`]
//! for logs, and [`FaultRecord`] for storage and round trips.
//!
//! # Emptiness
//!
//! A fault without causes is empty, and so is an absent one. Use
//! [`Failable::is_empty`] to decide whether something failed; a present
//! handle (a `Box<dyn Failable>`, an `Option`) can still hold an empty fault.
//!
//! # Usage
//!
//! ```
//! use std::io;
//! use faultline_core::{Fault, here, options};
//!
//! let fault = Fault::create(
//!     Some(io::Error::new(io::ErrorKind::NotFound, "no row for id 7")),
//!     [options::kind("NotFound"), options::code("404")],
//! )
//! .with_message("account not found")
//! .with_provenance(here!());
//!
//! assert!(fault.matches_target::<io::Error>());
//! assert_eq!(
//!     serde_json::to_string(&fault.public()).unwrap(),
//!     r#"{"kind":"NotFound","code":"404","message":"account not found"}"#
//! );
//! ```

mod cause;
mod error;
mod failable;
mod fault;
mod matching;
pub mod options;
#[doc(hidden)]
pub mod provenance;
mod render;
mod report;
mod serialize;

pub use cause::{BoxError, Cause, LeafMessage, SharedError};
pub use error::SerializeError;
pub use failable::Failable;
pub use fault::{Fault, UNSPECIFIED, equals, normalize};
pub use options::FaultOption;
pub use provenance::Provenance;
pub use render::NIL;
pub use report::report;
pub use serialize::{
    CauseRecord, DiagnosticFault, FaultRecord, PublicFault, diagnostic_json, public_json, to_json,
};
