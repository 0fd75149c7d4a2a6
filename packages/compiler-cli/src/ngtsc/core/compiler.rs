//! Verification of the compiler options that drive extended template diagnostics.

use super::api::{DiagnosticCategoryLabel, NgCompilerOptions};
use crate::ngtsc::diagnostics::ErrorCode;
use crate::ngtsc::typecheck::extended::SUPPORTED_DIAGNOSTIC_NAMES;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtendedDiagnosticsConfigError {
    #[error(
        "Angular compiler option \"extendedDiagnostics\" is configured, however \"strictTemplates\" is disabled.\n\
         Using \"extendedDiagnostics\" requires that \"strictTemplates\" is also enabled.\n\n\
         Either remove \"extendedDiagnostics: {{...}}\" or enable \"strictTemplates: true\"."
    )]
    ImpliesStrictTemplates,

    #[error(
        "Angular compiler option \"{option}\" has an unknown diagnostic category: \"{label}\".\n\n\
         Allowed diagnostic categories are:\n{allowed}"
    )]
    UnknownCategoryLabel {
        option: String,
        label: String,
        allowed: String,
    },

    #[error(
        "Angular compiler option \"extendedDiagnostics.checks\" has an unknown check: \"{name}\".\n\n\
         Allowed check names are:\n{allowed}"
    )]
    UnknownCheck { name: String, allowed: String },

    #[error("invalid angularCompilerOptions: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtendedDiagnosticsConfigError {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::ImpliesStrictTemplates => {
                Some(ErrorCode::ConfigExtendedDiagnosticsImpliesStrictTemplates)
            }
            Self::UnknownCategoryLabel { .. } => {
                Some(ErrorCode::ConfigExtendedDiagnosticsUnknownCategoryLabel)
            }
            Self::UnknownCheck { .. } => Some(ErrorCode::ConfigExtendedDiagnosticsUnknownCheck),
            Self::Json(_) => None,
        }
    }
}

fn allowed_category_labels() -> String {
    DiagnosticCategoryLabel::ALL
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn unknown_category(option: String, label: &str) -> ExtendedDiagnosticsConfigError {
    ExtendedDiagnosticsConfigError::UnknownCategoryLabel {
        option,
        label: label.to_string(),
        allowed: allowed_category_labels(),
    }
}

/// Reports every problem with the `extendedDiagnostics` options, in authored order.
pub fn verify_extended_diagnostics_options(
    options: &NgCompilerOptions,
) -> Vec<ExtendedDiagnosticsConfigError> {
    let mut errors = Vec::new();
    let Some(extended) = &options.extended_diagnostics else {
        return errors;
    };

    if options.strict_templates == Some(false) {
        errors.push(ExtendedDiagnosticsConfigError::ImpliesStrictTemplates);
    }

    if let Some(default_category) = &extended.default_category {
        if default_category.parse::<DiagnosticCategoryLabel>().is_err() {
            errors.push(unknown_category(
                "extendedDiagnostics.defaultCategory".to_string(),
                default_category,
            ));
        }
    }

    for (name, category) in &extended.checks {
        if !SUPPORTED_DIAGNOSTIC_NAMES.contains(&name.as_str()) {
            errors.push(ExtendedDiagnosticsConfigError::UnknownCheck {
                name: name.clone(),
                allowed: SUPPORTED_DIAGNOSTIC_NAMES.join("\n"),
            });
        }
        if category.parse::<DiagnosticCategoryLabel>().is_err() {
            errors.push(unknown_category(
                format!("extendedDiagnostics.checks['{}']", name),
                category,
            ));
        }
    }

    errors
}

/// Parses `angularCompilerOptions` and verifies them, returning the options only when
/// no problem was found.
pub fn load_compiler_options(
    json: &str,
) -> Result<NgCompilerOptions, Vec<ExtendedDiagnosticsConfigError>> {
    let options = NgCompilerOptions::from_json(json)
        .map_err(|err| vec![ExtendedDiagnosticsConfigError::from(err)])?;
    let errors = verify_extended_diagnostics_options(&options);
    if errors.is_empty() {
        Ok(options)
    } else {
        Err(errors)
    }
}
