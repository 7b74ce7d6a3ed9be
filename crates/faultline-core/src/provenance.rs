//! Call-site capture for faults.
//!
//! Two ways to record where a fault was finalized:
//!
//! - [`Provenance::caller`] uses `#[track_caller]` and records file and line.
//!   Helpers that build faults on behalf of their caller should carry
//!   `#[track_caller]` themselves so the recorded site is the caller's.
//! - The [`here!`](crate::here) macro records the enclosing function name as
//!   well, at the exact line it is expanded on.

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// The function, file, and line a fault was finalized at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Fully qualified function path. Empty when only the location is known.
    #[serde(default)]
    pub function: String,
    /// Source file path as reported by the compiler.
    #[serde(default)]
    pub file: String,
    /// 1-based line number, 0 when unknown.
    #[serde(default)]
    pub line: u32,
}

impl Provenance {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Location of the caller, following `#[track_caller]` frames upward.
    /// `function` is left empty; [`here!`](crate::here) fills it.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            function: String::new(),
            file: location.file().to_string(),
            line: location.line(),
        }
    }

    /// True when none of the three fields carries information.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.function.is_empty() && self.file.is_empty() && self.line == 0
    }
}

/// Strip the marker item (and any closure frames) from a `type_name` path,
/// leaving the enclosing function. Used by [`here!`](crate::here).
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(marker: &'static str) -> &'static str {
    let mut name = marker.strip_suffix("::__here").unwrap_or(marker);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Capture a [`Provenance`] for the current function, file, and line.
///
/// ```
/// use faultline_core::{Fault, here};
///
/// fn load() -> Fault {
///     Fault::unspecified([]).with_kind("NotFound").with_provenance(here!())
/// }
///
/// let fault = load();
/// let site = fault.provenance().expect("captured");
/// assert!(site.function.ends_with("load"));
/// ```
#[macro_export]
macro_rules! here {
    () => {{
        fn __here() {}
        $crate::Provenance::new(
            $crate::provenance::enclosing_function(::std::any::type_name_of_val(&__here)),
            file!(),
            line!(),
        )
    }};
}
