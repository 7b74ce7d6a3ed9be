//! Entries of a fault's cause list.
//!
//! A cause is either an opaque failure (any `std::error::Error`) or a nested
//! [`Fault`]. The split is decided once, when the cause is appended, so
//! rendering, serialization, and matching never need to inspect types again.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::fault::Fault;

/// Boxed, thread-safe failure, as returned by heterogeneous operations.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Shared handle to an opaque failure stored as a leaf cause.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// A plain failure carrying only its message.
///
/// Leaves read back from serialized faults take this shape, since the
/// original error type does not survive the trip through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LeafMessage(pub String);

/// One underlying failure owned by a [`Fault`].
#[derive(Debug, Clone)]
pub enum Cause {
    /// An opaque, unstructured failure.
    Leaf(SharedError),
    /// A structured fault, forming a subtree of the parent's cause tree.
    Nested(Fault),
}

impl Cause {
    /// Classify an error: a [`Fault`] becomes [`Cause::Nested`], anything
    /// else becomes [`Cause::Leaf`].
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Same as [`Cause::from_error`] for an already boxed error.
    ///
    /// A boxed [`Fault`] is moved out of its box, never copied.
    #[must_use]
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<Fault>() {
            Ok(fault) => Self::Nested(*fault),
            Err(other) => Self::Leaf(Arc::from(other)),
        }
    }

    /// A leaf cause holding only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Leaf(Arc::new(LeafMessage(message.into())))
    }

    /// True for nested faults with an empty cause list. Leaves are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Nested(fault) => fault.is_empty(),
        }
    }

    /// The nested fault, if this cause is structured.
    #[must_use]
    pub const fn as_fault(&self) -> Option<&Fault> {
        match self {
            Self::Leaf(_) => None,
            Self::Nested(fault) => Some(fault),
        }
    }

    /// View this cause as a trait object, e.g. for `source()` chains.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Self::Leaf(error) => error.as_ref(),
            Self::Nested(fault) => fault,
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(error) => write!(f, "{error}"),
            Self::Nested(fault) => write!(f, "{fault}"),
        }
    }
}

impl From<Fault> for Cause {
    fn from(fault: Fault) -> Self {
        Self::Nested(fault)
    }
}

impl From<BoxError> for Cause {
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}
