//! The capability every fault-like handle exposes: render it, or ask whether
//! it is empty.
//!
//! An absent fault behind a generic handle is still a present handle:
//!
//! ```
//! use faultline_core::{Failable, Fault};
//!
//! fn lookup() -> Option<Fault> {
//!     None
//! }
//!
//! let handle: Box<dyn Failable> = Box::new(lookup());
//! // The box exists, but there is no failure in it.
//! assert!(handle.is_empty());
//! assert_eq!(handle.render(), "<nil>");
//! ```
//!
//! [`Failable::is_empty`] is the only correct way to ask "did this fail?".
//! Checking the handle itself for presence answers a different question.

use crate::fault::Fault;
use crate::render::NIL;

pub trait Failable {
    /// True when there is no failure: absent, or a fault with no causes.
    fn is_empty(&self) -> bool;

    /// Human-readable rendering; `<nil>` when empty.
    fn render(&self) -> String;
}

impl Failable for Fault {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn render(&self) -> String {
        Self::render(self)
    }
}

impl Failable for Option<Fault> {
    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(Fault::is_empty)
    }

    fn render(&self) -> String {
        self.as_ref().map_or_else(|| NIL.to_string(), Fault::render)
    }
}

impl Failable for Option<&Fault> {
    fn is_empty(&self) -> bool {
        self.is_none_or(Fault::is_empty)
    }

    fn render(&self) -> String {
        self.map_or_else(|| NIL.to_string(), Fault::render)
    }
}

impl<T: Failable + ?Sized> Failable for &T {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Failable + ?Sized> Failable for Box<T> {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absent() -> Option<Fault> {
        None
    }

    fn as_generic() -> Box<dyn Failable> {
        Box::new(absent())
    }

    #[test]
    fn absent_fault_is_empty() {
        assert!(Failable::is_empty(&absent()));
        assert!(Failable::is_empty(&None::<&Fault>));
        assert_eq!(Failable::render(&absent()), NIL);
    }

    #[test]
    fn present_handle_around_absent_fault_is_still_empty() {
        let generic = Some(as_generic());
        // Presence of the handle is not absence of failure.
        assert!(generic.is_some());
        assert!(generic.as_ref().is_some_and(|handle| handle.is_empty()));
    }

    #[test]
    fn tagged_but_causeless_fault_is_empty() {
        let fault = Some(Fault::empty().with_kind("NotFound").with_code("404"));
        assert!(Failable::is_empty(&fault));
    }

    #[test]
    fn non_empty_through_every_handle() {
        let fault = Fault::unspecified([]);
        assert!(!Failable::is_empty(&fault));
        assert!(!Failable::is_empty(&Some(&fault)));
        let boxed: Box<dyn Failable> = Box::new(fault);
        assert!(!boxed.is_empty());
    }
}
