use crate::ngtsc::core::NgCompilerOptions;
use crate::ngtsc::diagnostics::{ErrorCode, ExtendedTemplateDiagnosticName};
use crate::ngtsc::typecheck::api::{SymbolKind, TemplateDiagnostic};
use crate::ngtsc::typecheck::extended::api::{
    NodeRef, TemplateCheck, TemplateCheckFactory, TemplateContext,
};
use angular_compiler::expression_parser::AST;
use tracing::trace;
use ts::TypeFlags;

/// Ensures the left side of a nullish coalescing operation is nullable.
/// Returns diagnostics for the cases where the operator is useless.
pub struct NullishCoalescingNotNullableCheck;

impl TemplateCheck for NullishCoalescingNotNullableCheck {
    fn code(&self) -> ErrorCode {
        ErrorCode::NullishCoalescingNotNullable
    }

    fn name(&self) -> ExtendedTemplateDiagnosticName {
        ExtendedTemplateDiagnosticName::NullishCoalescingNotNullable
    }

    fn visit_node(&self, ctx: &TemplateContext<'_>, node: NodeRef<'_>) -> Vec<TemplateDiagnostic> {
        let NodeRef::Expression(AST::Binary(binary)) = node else {
            return Vec::new();
        };
        if binary.operation != "??" {
            return Vec::new();
        }

        let Some(symbol) = ctx
            .template_type_checker
            .get_symbol_of_node(&binary.left, ctx.component)
            .filter(|symbol| symbol.kind() == SymbolKind::Expression)
        else {
            trace!(expression = ?binary.left.source_span(), "no expression symbol for left side of `??`");
            return Vec::new();
        };

        // `any` and `unknown` are their own non-nullable type.
        let ts_type = symbol.ts_type();
        if ts_type.flags().intersects(TypeFlags::ANY_OR_UNKNOWN) {
            return Vec::new();
        }
        if ts_type.get_non_nullable_type() != *ts_type {
            return Vec::new();
        }

        let Some(span) = ctx
            .template_type_checker
            .get_span_for_shim_location(symbol.shim_location())
        else {
            trace!(location = ?symbol.shim_location(), "no template span for shim location");
            return Vec::new();
        };

        vec![ctx.make_template_diagnostic(
            &span,
            self.code(),
            "The left side of this nullish coalescing operation does not include 'null' or 'undefined' in its type, \
             therefore the '??' operator can be safely removed.",
        )]
    }
}

pub struct NullishCoalescingNotNullableFactory;

impl TemplateCheckFactory for NullishCoalescingNotNullableFactory {
    fn code(&self) -> ErrorCode {
        ErrorCode::NullishCoalescingNotNullable
    }

    fn name(&self) -> ExtendedTemplateDiagnosticName {
        ExtendedTemplateDiagnosticName::NullishCoalescingNotNullable
    }

    fn create(&self, options: &NgCompilerOptions) -> Option<Box<dyn TemplateCheck>> {
        // Without strict null checks every type looks non-nullable.
        if !options.strict_null_checks_enabled() {
            return None;
        }
        Some(Box::new(NullishCoalescingNotNullableCheck))
    }
}
