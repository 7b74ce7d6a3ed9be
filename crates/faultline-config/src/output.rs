//! Output configuration: which projection of a fault to print, and how.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Projection of a fault written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Multi-line human rendering.
    #[default]
    Render,
    /// `{kind, code, message}` only; safe for external clients.
    Public,
    /// `{errors, function, file, line}` for internal logs.
    Diagnostic,
    /// Every field, nested causes included.
    Full,
}

impl View {
    pub const ALL: [Self; 4] = [Self::Render, Self::Public, Self::Diagnostic, Self::Full];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Render => "render",
            Self::Public => "public",
            Self::Diagnostic => "diagnostic",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == wanted)
            .ok_or_else(|| {
                ConfigError::invalid(
                    "output.view",
                    format!("'{s}' is not one of render, public, diagnostic, full"),
                )
            })
    }
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Projection printed for each fault.
    #[serde(default)]
    pub view: View,

    /// Pretty-print JSON views. Ignored by the `render` view.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            pretty: default_pretty(),
        }
    }
}
