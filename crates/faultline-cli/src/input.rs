//! Read faults from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use faultline_core::Fault;

/// Read the whole input source into memory.
pub fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Parse one whole-value JSON document, or JSON lines with one fault each.
///
/// A single document may span several lines, so it is tried first.
pub fn parse_faults(text: &str) -> anyhow::Result<Vec<Fault>> {
    if text.trim().is_empty() {
        anyhow::bail!("input is empty");
    }

    match Fault::from_json(text) {
        Ok(fault) => Ok(vec![fault]),
        Err(document_error) => {
            tracing::debug!(%document_error, "input is not a single document, trying JSON lines");
            Fault::from_json_lines(text).context("input is neither a JSON fault nor JSON lines")
        }
    }
}
