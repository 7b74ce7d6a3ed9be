//! Cause-matching predicates.
//!
//! Matching scans the cause list in order and stops at the first hit. A
//! leaf cause is searched through its `source()` chain; a nested fault is
//! matched as a whole first, then through its own cause list.

use std::error::Error;
use std::iter;
use std::sync::Arc;

use crate::cause::{Cause, SharedError};
use crate::fault::Fault;

impl Fault {
    /// The first cause that is, or transitively wraps, an `E`.
    ///
    /// ```
    /// use std::io;
    /// use faultline_core::Fault;
    ///
    /// let fault = Fault::new(io::Error::new(io::ErrorKind::NotFound, "gone"));
    /// let io_error = fault.find_cause::<io::Error>().expect("io error");
    /// assert_eq!(io_error.kind(), io::ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub fn find_cause<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.causes().iter().find_map(Cause::find::<E>)
    }

    /// True if any cause is, or transitively wraps, an `E`.
    #[must_use]
    pub fn matches_target<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.find_cause::<E>().is_some()
    }

    /// True if any cause, or something it wraps, equals `target`.
    ///
    /// This is the "same failure marker" check, for sentinel errors that
    /// implement `PartialEq`.
    #[must_use]
    pub fn matches_identity<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        self.causes().iter().any(|cause| cause.contains(target))
    }

    /// True if any leaf cause is the very same shared error as `target`.
    #[must_use]
    pub fn matches_instance(&self, target: &SharedError) -> bool {
        self.causes().iter().any(|cause| match cause {
            Cause::Leaf(error) => Arc::ptr_eq(error, target),
            Cause::Nested(fault) => fault.matches_instance(target),
        })
    }
}

impl Cause {
    /// Find an `E` in this cause: the leaf's source chain, or the nested
    /// fault itself followed by its own causes.
    #[must_use]
    pub fn find<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match self {
            Self::Leaf(error) => chain(error.as_ref()).find_map(|link| link.downcast_ref::<E>()),
            Self::Nested(fault) => (fault as &(dyn Error + 'static))
                .downcast_ref::<E>()
                .or_else(|| fault.find_cause::<E>()),
        }
    }

    fn contains<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        match self {
            Self::Leaf(error) => chain(error.as_ref())
                .filter_map(|link| link.downcast_ref::<E>())
                .any(|candidate| candidate == target),
            Self::Nested(fault) => {
                (fault as &(dyn Error + 'static))
                    .downcast_ref::<E>()
                    .is_some_and(|candidate| candidate == target)
                    || fault.matches_identity(target)
            }
        }
    }
}

fn chain<'a>(start: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    iter::successors(Some(start), |&error| error.source())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;
    use thiserror::Error;

    use super::*;
    use crate::cause::LeafMessage;

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("account not found")]
    struct AccountNotFound;

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("rate limited")]
    struct RateLimited;

    #[derive(Debug, Error)]
    #[error("lookup failed")]
    struct LookupFailed {
        #[source]
        inner: AccountNotFound,
    }

    static COMPARED: AtomicUsize = AtomicUsize::new(0);
    static WALKED: AtomicUsize = AtomicUsize::new(0);

    /// Sentinel that counts how often it is compared for equality.
    #[derive(Debug, Error)]
    #[error("sentinel")]
    struct Sentinel;

    impl PartialEq for Sentinel {
        fn eq(&self, _other: &Self) -> bool {
            COMPARED.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    /// Leaf that counts how often its source chain is walked.
    #[derive(Debug)]
    struct Chained;

    impl std::fmt::Display for Chained {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("chained")
        }
    }

    impl Error for Chained {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            WALKED.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    #[test]
    fn empty_fault_matches_nothing() {
        let fault = Fault::empty().with_kind("NotFound");
        assert!(!fault.matches_target::<AccountNotFound>());
        assert!(!fault.matches_identity(&AccountNotFound));
    }

    #[rstest]
    #[case::first(vec![Cause::from_error(AccountNotFound), Cause::message("x")])]
    #[case::last(vec![Cause::message("x"), Cause::from_error(AccountNotFound)])]
    #[case::wrapped(vec![Cause::from_error(LookupFailed { inner: AccountNotFound })])]
    #[case::nested(vec![Cause::Nested(Fault::new(AccountNotFound).with_kind("NotFound"))])]
    fn target_found_anywhere(#[case] causes: Vec<Cause>) {
        let mut fault = Fault::empty();
        for cause in causes {
            fault.push_cause(cause);
        }
        assert!(fault.matches_target::<AccountNotFound>());
        assert!(fault.matches_identity(&AccountNotFound));
        assert!(!fault.matches_target::<RateLimited>());
        assert!(!fault.matches_identity(&RateLimited));
    }

    #[test]
    fn find_cause_binds_first_match() {
        let fault = Fault::new(io::Error::new(io::ErrorKind::NotFound, "first"))
            .with_cause(io::Error::new(io::ErrorKind::TimedOut, "second"));
        let found = fault.find_cause::<io::Error>().expect("io error");
        assert_eq!(found.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn nested_fault_matches_as_fault() {
        let inner = Fault::new(LeafMessage("inner".into())).with_kind("DBError");
        let fault = Fault::new(io::Error::other("outer")).with_cause(inner);
        let found = fault.find_cause::<Fault>().expect("nested fault");
        assert_eq!(found.kind(), "DBError");
    }

    #[test]
    fn identity_uses_equality_not_type() {
        let fault = Fault::new(LeafMessage("a".into()));
        assert!(fault.matches_target::<LeafMessage>());
        assert!(fault.matches_identity(&LeafMessage("a".into())));
        assert!(!fault.matches_identity(&LeafMessage("b".into())));
    }

    #[test]
    fn instance_match_is_pointer_identity() {
        let shared: SharedError = Arc::new(LeafMessage("shared".into()));
        let lookalike: SharedError = Arc::new(LeafMessage("shared".into()));
        let mut fault = Fault::empty();
        fault.push_cause(Cause::Leaf(Arc::clone(&shared)));
        assert!(fault.matches_instance(&shared));
        assert!(!fault.matches_instance(&lookalike));
    }

    #[test]
    fn identity_match_stops_at_first_equal_cause() {
        let fault = Fault::new(AccountNotFound)
            .with_cause(Sentinel)
            .with_cause(Sentinel)
            .with_cause(Sentinel);
        assert!(fault.matches_identity(&Sentinel));
        assert_eq!(COMPARED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn target_match_stops_at_first_matching_cause() {
        let fault = Fault::new(Chained).with_cause(Chained).with_cause(Chained);
        assert!(fault.find_cause::<Chained>().is_some());
        assert_eq!(WALKED.load(Ordering::SeqCst), 1);
    }
}
