use crate::ngtsc::core::NgCompilerOptions;
use crate::ngtsc::typecheck::api::{TemplateDiagnostic, TemplateTypeChecker};
use crate::ngtsc::typecheck::extended::api::{
    TemplateCheck, TemplateCheckFactory, TemplateContext,
};
use tracing::{debug, trace};
use ts::{ClassDeclaration, DiagnosticCategory};

/// Runs the extended template checks over component templates.
pub trait ExtendedTemplateChecker {
    /// Diagnostics for the template of `component`, without duplicates.
    fn get_diagnostics_for_component(&self, component: &ClassDeclaration)
        -> Vec<TemplateDiagnostic>;
}

struct RegisteredCheck {
    check: Box<dyn TemplateCheck>,
    category: DiagnosticCategory,
}

pub struct ExtendedTemplateCheckerImpl<'a> {
    template_type_checker: &'a dyn TemplateTypeChecker,
    template_checks: Vec<RegisteredCheck>,
}

impl<'a> ExtendedTemplateCheckerImpl<'a> {
    /// Creates the checks of `factories` that `options` enables, each with its configured
    /// category.
    pub fn new(
        template_type_checker: &'a dyn TemplateTypeChecker,
        factories: &[&dyn TemplateCheckFactory],
        options: &NgCompilerOptions,
    ) -> Self {
        let mut template_checks = Vec::with_capacity(factories.len());
        for factory in factories {
            let name = factory.name();
            let label = options.extended_diagnostic_category(name.as_str());
            let Some(category) = label.to_category() else {
                trace!(check = %name, "check suppressed by configuration");
                continue;
            };
            let Some(check) = factory.create(options) else {
                trace!(check = %name, "check not enabled for these compiler options");
                continue;
            };
            template_checks.push(RegisteredCheck { check, category });
        }
        Self {
            template_type_checker,
            template_checks,
        }
    }

    /// Registers `checks` in order, each reporting with its own default category.
    pub fn with_checks(
        template_type_checker: &'a dyn TemplateTypeChecker,
        checks: Vec<Box<dyn TemplateCheck>>,
    ) -> Self {
        let template_checks = checks
            .into_iter()
            .map(|check| {
                let category = check.category();
                RegisteredCheck { check, category }
            })
            .collect();
        Self {
            template_type_checker,
            template_checks,
        }
    }

    /// Number of checks that will run for each component.
    pub fn check_count(&self) -> usize {
        self.template_checks.len()
    }

    /// Diagnostics for each of `components`, in order.
    pub fn get_diagnostics_for_components<'c>(
        &self,
        components: impl IntoIterator<Item = &'c ClassDeclaration>,
    ) -> Vec<TemplateDiagnostic> {
        components
            .into_iter()
            .flat_map(|component| self.get_diagnostics_for_component(component))
            .collect()
    }
}

impl ExtendedTemplateChecker for ExtendedTemplateCheckerImpl<'_> {
    fn get_diagnostics_for_component(
        &self,
        component: &ClassDeclaration,
    ) -> Vec<TemplateDiagnostic> {
        // A `@Component()` may not have a template yet, e.g. while the user is still typing
        // in an editor.
        let Some(template) = self.template_type_checker.get_template(component) else {
            debug!(component = %component.name, "component has no template, skipping checks");
            return Vec::new();
        };

        let mut diagnostics = Vec::new();
        for registered in &self.template_checks {
            let ctx = TemplateContext::new(
                self.template_type_checker,
                component,
                registered.category,
            );
            diagnostics.extend(registered.check.run(&ctx, template));
        }

        let total = diagnostics.len();
        let diagnostics = deduplicate_diagnostics(diagnostics);
        debug!(
            component = %component.name,
            total,
            unique = diagnostics.len(),
            "extended template diagnostics"
        );
        diagnostics
    }
}

/// Drops every diagnostic that duplicates an earlier one, keeping the first.
///
/// The same binding can be reached twice: a structural directive such as `*ngIf` wraps its
/// element in a template that repeats the element's bindings.
pub fn deduplicate_diagnostics(diagnostics: Vec<TemplateDiagnostic>) -> Vec<TemplateDiagnostic> {
    let mut result: Vec<TemplateDiagnostic> = Vec::with_capacity(diagnostics.len());
    for diagnostic in diagnostics {
        if !result.iter().any(|kept| kept.is_duplicate_of(&diagnostic)) {
            result.push(diagnostic);
        }
    }
    result
}
