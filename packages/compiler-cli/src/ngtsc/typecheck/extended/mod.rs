//! Extended Template Diagnostics
//!
//! Checks that find likely mistakes in templates which still type-check, e.g. a two-way binding
//! written as `([value])`.

pub mod api;
pub mod checks;
pub mod src;


pub use api::{CompleteVisitor, NodeRef, TemplateCheck, TemplateCheckFactory, TemplateContext};
pub use checks::invalid_banana_in_box::{InvalidBananaInBoxCheck, InvalidBananaInBoxFactory};
pub use checks::nullish_coalescing_not_nullable::{
    NullishCoalescingNotNullableCheck, NullishCoalescingNotNullableFactory,
};
pub use src::{deduplicate_diagnostics, ExtendedTemplateChecker, ExtendedTemplateCheckerImpl};

use crate::ngtsc::diagnostics::ExtendedTemplateDiagnosticName;

/// Every check factory, in the order their diagnostics are reported.
pub static ALL_DIAGNOSTIC_FACTORIES: &[&dyn TemplateCheckFactory] = &[
    &InvalidBananaInBoxFactory,
    &NullishCoalescingNotNullableFactory,
];

/// Names accepted in `extendedDiagnostics.checks`.
pub static SUPPORTED_DIAGNOSTIC_NAMES: &[&str] = &[
    ExtendedTemplateDiagnosticName::InvalidBananaInBox.as_str(),
    ExtendedTemplateDiagnosticName::NullishCoalescingNotNullable.as_str(),
];
