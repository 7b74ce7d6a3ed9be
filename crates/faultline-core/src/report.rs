//! Emit a fault to the application's `tracing` subscriber.

use crate::fault::Fault;
use crate::serialize::diagnostic_json;

/// Log `fault` as a single error event carrying its tags and the diagnostic
/// projection. Empty faults are skipped.
pub fn report(fault: &Fault) {
    if fault.is_empty() {
        return;
    }

    let diagnostic = diagnostic_json(Some(fault));
    tracing::error!(
        kind = fault.kind(),
        code = fault.code(),
        summary = fault.message(),
        causes = fault.cause_count(),
        %diagnostic,
        "fault reported"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_without_subscriber_is_harmless() {
        report(&Fault::empty());
        report(&Fault::unspecified([]).with_kind("NotFound"));
    }
}
