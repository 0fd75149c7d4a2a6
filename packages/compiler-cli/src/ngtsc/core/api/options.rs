//! Options accepted under `angularCompilerOptions`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts::DiagnosticCategory;

/// Severity a user can assign to an extended template diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiagnosticCategoryLabel {
    /// Report as a warning.
    #[default]
    Warning,
    /// Report as an error, failing the build.
    Error,
    /// Don't run the check at all.
    Suppress,
}

impl DiagnosticCategoryLabel {
    pub const ALL: [DiagnosticCategoryLabel; 3] = [Self::Warning, Self::Error, Self::Suppress];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Suppress => "suppress",
        }
    }

    /// The category diagnostics are reported with, `None` for `suppress`.
    pub fn to_category(self) -> Option<DiagnosticCategory> {
        match self {
            Self::Warning => Some(DiagnosticCategory::Warning),
            Self::Error => Some(DiagnosticCategory::Error),
            Self::Suppress => None,
        }
    }
}

impl fmt::Display for DiagnosticCategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryLabel(pub String);

impl fmt::Display for UnknownCategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diagnostic category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategoryLabel {}

impl FromStr for DiagnosticCategoryLabel {
    type Err = UnknownCategoryLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownCategoryLabel(s.to_string()))
    }
}

/// The `extendedDiagnostics` block.
///
/// Labels are kept as written so that verification can report unknown ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedDiagnosticsOptions {
    /// Category for every check without an entry in `checks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
    /// Per-check categories keyed by diagnostic name, in authored order.
    #[serde(default)]
    pub checks: IndexMap<String, String>,
}

impl ExtendedDiagnosticsOptions {
    /// The configured category for `check`, falling back to `defaultCategory` and then to
    /// `warning`. Unknown labels resolve to `warning`.
    pub fn category_label_for(&self, check: &str) -> DiagnosticCategoryLabel {
        self.checks
            .get(check)
            .or(self.default_category.as_ref())
            .and_then(|label| label.parse().ok())
            .unwrap_or_default()
    }
}

/// Compiler options relevant to template diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgCompilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_null_checks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_templates: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_diagnostics: Option<ExtendedDiagnosticsOptions>,
}

impl NgCompilerOptions {
    /// Parse the `angularCompilerOptions` object of a tsconfig.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `strictNullChecks`, implied by `strict` when not set explicitly.
    pub fn strict_null_checks_enabled(&self) -> bool {
        self.strict_null_checks
            .or(self.strict)
            .unwrap_or(false)
    }

    /// The effective category for the check named `check`.
    pub fn extended_diagnostic_category(&self, check: &str) -> DiagnosticCategoryLabel {
        self.extended_diagnostics
            .as_ref()
            .map(|ext| ext.category_label_for(check))
            .unwrap_or_default()
    }
}
