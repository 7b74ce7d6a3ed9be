//! Construction options for [`Fault::create`](crate::Fault::create).
//!
//! ```
//! use faultline_core::{Fault, options};
//!
//! let fault = Fault::create(
//!     Some(std::io::Error::other("no such row")),
//!     [options::kind("NotFound"), options::code("404")],
//! );
//! assert_eq!(fault.kind(), "NotFound");
//! ```

use crate::fault::Fault;
use crate::provenance::Provenance;

/// A single tag or provenance assignment, applied in order after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultOption {
    Kind(String),
    Code(String),
    Message(String),
    Provenance(Provenance),
}

impl FaultOption {
    pub(crate) fn apply_to(self, fault: &mut Fault) {
        match self {
            Self::Kind(kind) => fault.set_kind(kind),
            Self::Code(code) => fault.set_code(code),
            Self::Message(message) => fault.set_message(message),
            Self::Provenance(provenance) => fault.set_provenance(provenance),
        }
    }
}

pub fn kind(kind: impl Into<String>) -> FaultOption {
    FaultOption::Kind(kind.into())
}

pub fn code(code: impl Into<String>) -> FaultOption {
    FaultOption::Code(code.into())
}

pub fn message(message: impl Into<String>) -> FaultOption {
    FaultOption::Message(message.into())
}

#[must_use]
pub const fn provenance(provenance: Provenance) -> FaultOption {
    FaultOption::Provenance(provenance)
}

/// Provenance of the caller of `caller()` (see [`Provenance::caller`]).
///
/// Only file and line are recorded; `function` stays empty. Pass
/// `provenance(here!())` to record the enclosing function too.
#[track_caller]
#[must_use]
pub fn caller() -> FaultOption {
    FaultOption::Provenance(Provenance::caller())
}
