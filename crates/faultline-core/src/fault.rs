//! The structured fault value.
//!
//! A [`Fault`] composes three independent pieces:
//!
//! - an ordered cause list ([`Cause`]), append-only, first entry is primary;
//! - classification tags: `kind`, `code`, `message`;
//! - optional [`Provenance`] of the site that finalized it.
//!
//! A fault with no causes is *empty*, whatever its tags say. Absent faults are
//! `Option<Fault>::None`; query emptiness through [`Failable`](crate::Failable)
//! rather than checking the option or a boxed handle for presence.
//!
//! Builder methods consume and return the same value, so a fault is enriched
//! in place by whoever owns it:
//!
//! ```
//! use faultline_core::Fault;
//!
//! let fault = Fault::new(std::io::Error::other("connection reset"))
//!     .with_kind("Upstream")
//!     .with_code("E_RESET")
//!     .capture_provenance();
//! assert_eq!(fault.cause_count(), 1);
//! ```

use std::error::Error;
use std::fmt;

use crate::cause::{BoxError, Cause};
use crate::options::FaultOption;
use crate::provenance::Provenance;

/// Leaf message used by [`Fault::unspecified`].
pub const UNSPECIFIED: &str = "...";

/// A classified failure with causes and optional provenance.
#[derive(Debug, Clone, Default)]
pub struct Fault {
    causes: Vec<Cause>,
    kind: String,
    code: String,
    message: String,
    provenance: Option<Provenance>,
}

// ── Constructors ──────────────────────────────────────────────────

impl Fault {
    /// An empty fault: no causes, no tags, no provenance.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            causes: Vec::new(),
            kind: String::new(),
            code: String::new(),
            message: String::new(),
            provenance: None,
        }
    }

    /// A fault with `error` as its single cause.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::empty().with_cause(error)
    }

    /// Create from an optional initial failure, then apply `options` in order.
    ///
    /// A `None` initial failure yields a fault that is still usable but empty.
    pub fn create<E, I>(initial: Option<E>, options: I) -> Self
    where
        E: Error + Send + Sync + 'static,
        I: IntoIterator<Item = FaultOption>,
    {
        Self::empty().append_cause(initial).apply(options)
    }

    /// A non-empty fault whose only cause is the placeholder [`UNSPECIFIED`].
    ///
    /// Useful when a failure is fully described by its tags.
    pub fn unspecified<I>(options: I) -> Self
    where
        I: IntoIterator<Item = FaultOption>,
    {
        let mut fault = Self::empty();
        fault.push_cause(Cause::message(UNSPECIFIED));
        fault.apply(options)
    }

    /// Normalize any boxed failure into a fault.
    ///
    /// A boxed `Fault` is returned as-is (moved out, not copied); any other
    /// error is wrapped as the single cause of a new fault.
    #[must_use]
    pub fn from_boxed(error: BoxError) -> Self {
        match Cause::from_boxed(error) {
            Cause::Nested(fault) => fault,
            leaf @ Cause::Leaf(_) => {
                let mut fault = Self::empty();
                fault.push_cause(leaf);
                fault
            }
        }
    }
}

impl From<BoxError> for Fault {
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}

/// Normalize an optional boxed failure at a system boundary.
///
/// `None` stays `None`; see [`Fault::from_boxed`] for the rest.
#[must_use]
pub fn normalize(error: Option<BoxError>) -> Option<Fault> {
    error.map(Fault::from_boxed)
}

// ── Builder ───────────────────────────────────────────────────────

impl Fault {
    /// Apply construction options in order.
    #[must_use]
    pub fn apply<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = FaultOption>,
    {
        for option in options {
            option.apply_to(&mut self);
        }
        self
    }

    /// Append `error` to the cause list.
    #[must_use]
    pub fn with_cause<E>(self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.append_cause(Some(error))
    }

    /// Append an optional failure; `None` is ignored.
    #[must_use]
    pub fn append_cause<E>(mut self, error: Option<E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(error) = error {
            self.push_cause(Cause::from_error(error));
        }
        self
    }

    /// Append every present failure, in iteration order.
    #[must_use]
    pub fn append_causes<E, I>(mut self, errors: I) -> Self
    where
        E: Error + Send + Sync + 'static,
        I: IntoIterator<Item = Option<E>>,
    {
        for error in errors.into_iter().flatten() {
            self.push_cause(Cause::from_error(error));
        }
        self
    }

    /// Append an already classified cause.
    ///
    /// A present nested fault is kept even when it has no causes of its own,
    /// so its tags stay visible in the aggregate.
    pub fn push_cause(&mut self, cause: Cause) -> &mut Self {
        self.causes.push(cause);
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.set_kind(kind);
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.set_code(code);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Record the caller's file and line, replacing any earlier provenance.
    ///
    /// `#[track_caller]` knows no function names, so the recorded `function`
    /// is empty. Use `with_provenance(here!())` to capture it as well.
    #[track_caller]
    #[must_use]
    pub fn capture_provenance(self) -> Self {
        self.with_provenance(Provenance::caller())
    }

    /// Replace the provenance, typically with [`here!`](crate::here).
    #[must_use]
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.set_provenance(provenance);
        self
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_provenance(&mut self, provenance: Provenance) {
        self.provenance = Some(provenance);
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl Fault {
    /// True when the cause list is empty. Tags and provenance do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn provenance(&self) -> Option<&Provenance> {
        self.provenance.as_ref()
    }

    #[must_use]
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    #[must_use]
    pub fn cause_count(&self) -> usize {
        self.causes.len()
    }

    /// The first cause, conventionally the primary one.
    #[must_use]
    pub fn primary_cause(&self) -> Option<&Cause> {
        self.causes.first()
    }

    #[must_use]
    pub fn into_causes(self) -> Vec<Cause> {
        self.causes
    }
}

// ── Equality ──────────────────────────────────────────────────────

impl Fault {
    /// Identity comparison: both empty, or both non-empty with the same
    /// `kind` and `code`. Message, causes, and provenance are ignored.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.kind == other.kind && self.code == other.code,
            _ => false,
        }
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Fault {}

/// [`Fault::equals`] extended to absent references, which count as empty.
#[must_use]
pub fn equals(left: Option<&Fault>, right: Option<&Fault>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left.equals(right),
        (Some(only), None) | (None, Some(only)) => only.is_empty(),
        (None, None) => true,
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.primary_cause().map(Cause::as_error)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
