// TypeCheck Checker API
//
// Template type-checker interface.

use super::api::{ShimLocation, TemplateDiagnostic};
use super::symbols::Symbol;
use crate::ngtsc::diagnostics::ErrorCode;
use angular_compiler::expression_parser::AST;
use angular_compiler::parse_util::ParseSourceSpan;
use angular_compiler::render3::R3Node;
use ts::{ClassDeclaration, DiagnosticCategory};

/// Interface to the template type-checking services of the host program.
///
/// Every lookup may come back empty: a component may not have a template yet,
/// and a node or shim position may have no mapping.
pub trait TemplateTypeChecker {
    /// Get the parsed template of a component.
    fn get_template(&self, component: &ClassDeclaration) -> Option<&[R3Node]>;

    /// Get the symbol of an expression in the template of `component`.
    fn get_symbol_of_node(&self, node: &AST, component: &ClassDeclaration) -> Option<Symbol>;

    /// Map a position in a type-check shim back to the template.
    fn get_span_for_shim_location(&self, location: &ShimLocation) -> Option<ParseSourceSpan>;

    /// Build a diagnostic for `span` in the template of `component`.
    fn make_template_diagnostic(
        &self,
        component: &ClassDeclaration,
        span: &ParseSourceSpan,
        category: DiagnosticCategory,
        code: ErrorCode,
        message_text: String,
    ) -> TemplateDiagnostic {
        TemplateDiagnostic::new(component, span, category, code, message_text)
    }
}
