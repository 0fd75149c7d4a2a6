use crate::ngtsc::core::NgCompilerOptions;
use crate::ngtsc::diagnostics::{ErrorCode, ExtendedTemplateDiagnosticName};
use crate::ngtsc::typecheck::api::TemplateDiagnostic;
use crate::ngtsc::typecheck::extended::api::{
    NodeRef, TemplateCheck, TemplateCheckFactory, TemplateContext,
};

/// Ensures the two-way binding syntax is correct.
/// Parentheses should be inside the brackets "[()]".
/// Will return diagnostic information when "([])" is found.
pub struct InvalidBananaInBoxCheck;

impl TemplateCheck for InvalidBananaInBoxCheck {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidBananaInBox
    }

    fn name(&self) -> ExtendedTemplateDiagnosticName {
        ExtendedTemplateDiagnosticName::InvalidBananaInBox
    }

    fn visit_node(&self, ctx: &TemplateContext<'_>, node: NodeRef<'_>) -> Vec<TemplateDiagnostic> {
        let NodeRef::BoundEvent(event) = node else {
            return Vec::new();
        };

        let name = event.name.as_str();
        if name.len() < 2 || !name.starts_with('[') || !name.ends_with(']') {
            return Vec::new();
        }

        let bound_syntax = event.source_span.to_string();
        let name_without_brackets = &name[1..name.len() - 1];
        let expected_bound_syntax = bound_syntax.replacen(
            &format!("({})", name),
            &format!("[({})]", name_without_brackets),
            1,
        );

        vec![ctx.make_template_diagnostic(
            &event.source_span,
            self.code(),
            format!(
                "In the two-way binding syntax the parentheses should be inside the brackets, ex. '{}'. \
                 Find more at https://angular.dev/guide/templates/two-way-binding",
                expected_bound_syntax
            ),
        )]
    }
}

pub struct InvalidBananaInBoxFactory;

impl TemplateCheckFactory for InvalidBananaInBoxFactory {
    fn code(&self) -> ErrorCode {
        ErrorCode::InvalidBananaInBox
    }

    fn name(&self) -> ExtendedTemplateDiagnosticName {
        ExtendedTemplateDiagnosticName::InvalidBananaInBox
    }

    fn create(&self, _options: &NgCompilerOptions) -> Option<Box<dyn TemplateCheck>> {
        Some(Box::new(InvalidBananaInBoxCheck))
    }
}
