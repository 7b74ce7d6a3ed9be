//! JSON projections of a fault.
//!
//! | Projection        | Fields                                            | Audience |
//! |-------------------|---------------------------------------------------|----------|
//! | [`PublicFault`]   | `kind`, `code`, `message`                          | untrusted consumers |
//! | [`DiagnosticFault`] | `errors`, `function`, `file`, `line`             | logs, telemetry |
//! | [`FaultRecord`]   | all of the above                                  | logging, storage, round trips |
//!
//! Empty strings and missing provenance are omitted everywhere, except that
//! the diagnostic `errors` array is always present. An absent fault
//! serializes to `{}` in every projection.
//!
//! The public projection never carries causes or provenance.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::cause::Cause;
use crate::error::SerializeError;
use crate::fault::Fault;
use crate::provenance::Provenance;

// ── Records ───────────────────────────────────────────────────────

/// Trust-boundary-safe projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PublicFault {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Internal-only projection: the cause tree plus provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticFault {
    #[serde(default)]
    pub errors: Vec<CauseRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// Whole-value projection, the serialized form of [`Fault`] itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FaultRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<CauseRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// One serialized cause: a leaf's message, or a nested fault's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CauseRecord {
    Message(String),
    Fault(FaultRecord),
}

// ── Fault -> records ──────────────────────────────────────────────

struct Site {
    function: Option<String>,
    file: Option<String>,
    line: Option<u32>,
}

impl Site {
    fn of(provenance: Option<&Provenance>) -> Self {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
        Self {
            function: provenance.and_then(|site| non_empty(&site.function)),
            file: provenance.and_then(|site| non_empty(&site.file)),
            line: provenance.map(|site| site.line).filter(|line| *line > 0),
        }
    }
}

impl From<&Fault> for PublicFault {
    fn from(fault: &Fault) -> Self {
        Self {
            kind: fault.kind().to_string(),
            code: fault.code().to_string(),
            message: fault.message().to_string(),
        }
    }
}

impl From<&Fault> for DiagnosticFault {
    fn from(fault: &Fault) -> Self {
        let site = Site::of(fault.provenance());
        Self {
            errors: fault.causes().iter().map(CauseRecord::from).collect(),
            function: site.function,
            file: site.file,
            line: site.line,
        }
    }
}

impl From<&Fault> for FaultRecord {
    fn from(fault: &Fault) -> Self {
        let site = Site::of(fault.provenance());
        Self {
            kind: fault.kind().to_string(),
            code: fault.code().to_string(),
            message: fault.message().to_string(),
            errors: fault.causes().iter().map(CauseRecord::from).collect(),
            function: site.function,
            file: site.file,
            line: site.line,
        }
    }
}

impl From<&Cause> for CauseRecord {
    fn from(cause: &Cause) -> Self {
        match cause {
            Cause::Leaf(error) => Self::Message(error.to_string()),
            Cause::Nested(fault) => Self::Fault(FaultRecord::from(fault)),
        }
    }
}

// ── Records -> Fault ──────────────────────────────────────────────

impl From<CauseRecord> for Cause {
    fn from(record: CauseRecord) -> Self {
        match record {
            CauseRecord::Message(message) => Self::message(message),
            CauseRecord::Fault(record) => Self::Nested(Fault::from(record)),
        }
    }
}

impl From<FaultRecord> for Fault {
    fn from(record: FaultRecord) -> Self {
        let mut fault = Self::empty()
            .with_kind(record.kind)
            .with_code(record.code)
            .with_message(record.message);
        if record.function.is_some() || record.file.is_some() || record.line.is_some() {
            fault.set_provenance(Provenance::new(
                record.function.unwrap_or_default(),
                record.file.unwrap_or_default(),
                record.line.unwrap_or_default(),
            ));
        }
        for cause in record.errors {
            fault.push_cause(Cause::from(cause));
        }
        fault
    }
}

impl Serialize for Fault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FaultRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fault {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FaultRecord::deserialize(deserializer).map(Self::from)
    }
}

// ── Entry points ──────────────────────────────────────────────────

impl Fault {
    #[must_use]
    pub fn public(&self) -> PublicFault {
        PublicFault::from(self)
    }

    #[must_use]
    pub fn diagnostic(&self) -> DiagnosticFault {
        DiagnosticFault::from(self)
    }

    #[must_use]
    pub fn record(&self) -> FaultRecord {
        FaultRecord::from(self)
    }

    /// Whole-value JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, SerializeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a whole-value JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::Json`] if `json` is not a valid fault record.
    pub fn from_json(json: &str) -> Result<Self, SerializeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse one whole-value document per non-blank line.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::Line`] for the first line that does not parse.
    pub fn from_json_lines(text: &str) -> Result<Vec<Self>, SerializeError> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|source| SerializeError::Line {
                    line: index + 1,
                    source,
                })
            })
            .collect()
    }
}

/// Public projection as JSON; `{}` for an absent fault.
#[must_use]
pub fn public_json(fault: Option<&Fault>) -> Value {
    fault.map_or_else(empty_object, |fault| to_value(&fault.public()))
}

/// Diagnostic projection as JSON; `{}` for an absent fault.
#[must_use]
pub fn diagnostic_json(fault: Option<&Fault>) -> Value {
    fault.map_or_else(empty_object, |fault| to_value(&fault.diagnostic()))
}

/// Whole-value projection as JSON; `{}` for an absent fault.
#[must_use]
pub fn to_json(fault: Option<&Fault>) -> Value {
    fault.map_or_else(empty_object, |fault| to_value(&fault.record()))
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn to_value<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or_else(|error| {
        tracing::warn!(%error, "fault projection failed to serialize");
        empty_object()
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn classified() -> Fault {
        Fault::new(io::Error::other("row missing"))
            .with_kind("NotFound")
            .with_code("404")
            .with_message("missing")
            .with_provenance(Provenance::new("app::load", "src/app.rs", 7))
    }

    #[test]
    fn public_projection_has_only_tags() {
        assert_eq!(
            public_json(Some(&classified())),
            json!({"kind": "NotFound", "code": "404", "message": "missing"})
        );
    }

    #[test]
    fn public_projection_omits_empty_tags() {
        let fault = Fault::unspecified([]).with_code("E1");
        assert_eq!(public_json(Some(&fault)), json!({"code": "E1"}));
    }

    #[test]
    fn diagnostic_projection_has_causes_and_site() {
        assert_eq!(
            diagnostic_json(Some(&classified())),
            json!({
                "errors": ["row missing"],
                "function": "app::load",
                "file": "src/app.rs",
                "line": 7
            })
        );
    }

    #[test]
    fn diagnostic_projection_without_provenance() {
        let fault = Fault::new(io::Error::other("x"));
        assert_eq!(diagnostic_json(Some(&fault)), json!({"errors": ["x"]}));
    }

    #[test]
    fn causeless_nested_fault_keeps_its_tags() {
        let classified = Fault::empty()
            .with_kind("Timeout")
            .with_code("E1")
            .with_message("upstream");
        let fault = Fault::new(io::Error::other("root")).with_cause(classified);
        assert_eq!(
            diagnostic_json(Some(&fault)),
            json!({
                "errors": [
                    "root",
                    {"kind": "Timeout", "code": "E1", "message": "upstream"}
                ]
            })
        );
    }

    #[test]
    fn nested_causes_serialize_recursively() {
        let inner = Fault::new(io::Error::other("an error"))
            .with_code("internal_error")
            .with_kind("DBError");
        let fault = Fault::new(io::Error::other("..."))
            .with_code("biz_error")
            .with_kind("NotFound")
            .with_cause(inner);
        assert_eq!(
            to_json(Some(&fault)),
            json!({
                "kind": "NotFound",
                "code": "biz_error",
                "errors": [
                    "...",
                    {"kind": "DBError", "code": "internal_error", "errors": ["an error"]}
                ]
            })
        );
    }

    #[test]
    fn absent_fault_is_empty_object_everywhere() {
        assert_eq!(public_json(None), json!({}));
        assert_eq!(diagnostic_json(None), json!({}));
        assert_eq!(to_json(None), json!({}));
    }

    #[test]
    fn empty_fault_serializes_without_failing() {
        assert_eq!(to_json(Some(&Fault::empty())), json!({}));
        assert_eq!(diagnostic_json(Some(&Fault::empty())), json!({"errors": []}));
    }

    #[test]
    fn whole_value_round_trips() {
        let inner = Fault::new(io::Error::other("inner")).with_kind("Io");
        let original = classified().with_cause(inner);
        let text = original.to_json_string().expect("serialize");
        let restored = Fault::from_json(&text).expect("deserialize");
        assert_eq!(restored.record(), original.record());
        assert_eq!(restored, original);
        assert_eq!(restored.provenance(), original.provenance());
    }

    #[test]
    fn json_lines_report_the_failing_line() {
        let text = "{\"kind\":\"A\",\"errors\":[\"x\"]}\n\nnot json\n";
        match Fault::from_json_lines(text) {
            Err(SerializeError::Line { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected line error, got {other:?}"),
        }
    }
}
