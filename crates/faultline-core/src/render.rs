//! Human-readable rendering of a fault.
//!
//! ```text
//! kind="NotFound"; code="404"; message="missing"; file="src/app.rs"; line="42"; errors=
//! - "account not found"
//! - {"kind":"DBError","errors":["timeout"]}
//! ```

use crate::cause::Cause;
use crate::fault::Fault;
use crate::serialize::CauseRecord;

/// Rendering of an absent or empty fault.
pub const NIL: &str = "<nil>";

impl Fault {
    /// Render tags, provenance, and causes on multiple lines.
    ///
    /// Only non-empty fields are shown, in the fixed order kind, code,
    /// message, function, file, line. Each cause follows on its own `- `
    /// line as JSON: a string for leaves, an object for nested faults.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return NIL.to_string();
        }

        let mut fields = Vec::with_capacity(7);
        push_field(&mut fields, "kind", self.kind());
        push_field(&mut fields, "code", self.code());
        push_field(&mut fields, "message", self.message());
        if let Some(site) = self.provenance() {
            push_field(&mut fields, "function", &site.function);
            push_field(&mut fields, "file", &site.file);
            if site.line > 0 {
                push_field(&mut fields, "line", &site.line.to_string());
            }
        }
        fields.push("errors=".to_string());

        let mut out = String::with_capacity(64);
        out.push_str(&fields.join("; "));
        for cause in self.causes() {
            out.push_str("\n- ");
            out.push_str(&render_cause(cause));
        }
        out
    }
}

fn push_field(fields: &mut Vec<String>, key: &str, value: &str) {
    if !value.is_empty() {
        fields.push(format!("{key}={value:?}"));
    }
}

fn render_cause(cause: &Cause) -> String {
    let record = CauseRecord::from(cause);
    serde_json::to_string(&record).unwrap_or_else(|error| format!("{:?}", error.to_string()))
}
