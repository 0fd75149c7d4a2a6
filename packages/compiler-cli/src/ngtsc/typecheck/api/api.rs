// TypeCheck API
//
// Public API types for template type-checking.

use crate::ngtsc::diagnostics::{ng_error_code, ErrorCode};
use angular_compiler::parse_util::ParseSourceSpan;
use serde::Serialize;
use std::fmt;
use ts::{ClassDeclaration, DiagnosticCategory};

/// A position inside a generated type-check file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShimLocation {
    /// Path of the type-check shim file.
    pub shim_path: String,
    /// Offset into the shim file.
    pub position_in_shim_file: usize,
}

impl ShimLocation {
    pub fn new(shim_path: impl Into<String>, position_in_shim_file: usize) -> Self {
        Self {
            shim_path: shim_path.into(),
            position_in_shim_file,
        }
    }
}

/// A diagnostic located in a component template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDiagnostic {
    /// File that contains the template, `None` when it cannot be attributed.
    pub file: Option<String>,
    /// Start offset.
    pub start: usize,
    /// Length of the reported range.
    pub length: usize,
    /// Severity.
    pub category: DiagnosticCategory,
    /// Error code as returned by `ng_error_code`.
    pub code: i32,
    /// Human readable message.
    pub message_text: String,
    /// File of the component class the template belongs to.
    pub component_file: String,
}

impl TemplateDiagnostic {
    /// Builds a diagnostic covering `span` in the template of `component`.
    pub fn new(
        component: &ClassDeclaration,
        span: &ParseSourceSpan,
        category: DiagnosticCategory,
        code: ErrorCode,
        message_text: impl Into<String>,
    ) -> Self {
        let url = span.url();
        Self {
            file: (!url.is_empty()).then(|| url.to_string()),
            start: span.start.offset,
            length: span.length(),
            category,
            code: ng_error_code(code),
            message_text: message_text.into(),
            component_file: component.file_name().to_string(),
        }
    }

    /// Two diagnostics are duplicates when they report the same code over the same range of
    /// the same file. Message and category are not compared.
    pub fn is_duplicate_of(&self, other: &TemplateDiagnostic) -> bool {
        self.file == other.file
            && self.start == other.start
            && self.length == other.length
            && self.code == other.code
    }
}

impl fmt::Display for TemplateDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{} - ", file, self.start)?;
        }
        write!(
            f,
            "{} TS{}: {}",
            self.category, self.code, self.message_text
        )
    }
}
