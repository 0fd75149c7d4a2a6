//! Extended Template Checks API
//!
//! The contract every extended template check implements, the context handed to it and the
//! visitor that walks template and expression nodes on its behalf.

use crate::ngtsc::core::NgCompilerOptions;
use crate::ngtsc::diagnostics::{ErrorCode, ExtendedTemplateDiagnosticName};
use crate::ngtsc::typecheck::api::{TemplateDiagnostic, TemplateTypeChecker};
use angular_compiler::expression_parser::{ASTWithSource, AST};
use angular_compiler::parse_util::ParseSourceSpan;
use angular_compiler::render3::r3_ast::{
    BoundAttribute, BoundEvent, BoundText, Content, Element, Icu, Reference, Template,
    TemplateAttr, Text, TextAttribute, Variable,
};
use angular_compiler::render3::{Node, R3Node};
use smallvec::SmallVec;
use ts::{ClassDeclaration, DiagnosticCategory};

/// A borrowed template or expression node.
///
/// Template nodes and expression nodes form two separate trees; a check sees both through this
/// one type. `ASTWithSource` never appears here: the visitor hands out the expression it wraps.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Text(&'a Text),
    BoundText(&'a BoundText),
    TextAttribute(&'a TextAttribute),
    BoundAttribute(&'a BoundAttribute),
    BoundEvent(&'a BoundEvent),
    Element(&'a Element),
    Template(&'a Template),
    Content(&'a Content),
    Variable(&'a Variable),
    Reference(&'a Reference),
    Icu(&'a Icu),
    Expression(&'a AST),
}

impl<'a> From<&'a R3Node> for NodeRef<'a> {
    fn from(node: &'a R3Node) -> Self {
        match node {
            R3Node::Text(n) => NodeRef::Text(n),
            R3Node::BoundText(n) => NodeRef::BoundText(n),
            R3Node::TextAttribute(n) => NodeRef::TextAttribute(n),
            R3Node::BoundAttribute(n) => NodeRef::BoundAttribute(n),
            R3Node::BoundEvent(n) => NodeRef::BoundEvent(n),
            R3Node::Element(n) => NodeRef::Element(n),
            R3Node::Template(n) => NodeRef::Template(n),
            R3Node::Content(n) => NodeRef::Content(n),
            R3Node::Variable(n) => NodeRef::Variable(n),
            R3Node::Reference(n) => NodeRef::Reference(n),
            R3Node::Icu(n) => NodeRef::Icu(n),
        }
    }
}

impl<'a> From<&'a AST> for NodeRef<'a> {
    fn from(ast: &'a AST) -> Self {
        NodeRef::Expression(ast)
    }
}

impl<'a> From<&'a ASTWithSource> for NodeRef<'a> {
    fn from(ast: &'a ASTWithSource) -> Self {
        NodeRef::Expression(&ast.ast)
    }
}

impl<'a> From<&'a TemplateAttr> for NodeRef<'a> {
    fn from(attr: &'a TemplateAttr) -> Self {
        match attr {
            TemplateAttr::Bound(a) => NodeRef::BoundAttribute(a),
            TemplateAttr::Text(a) => NodeRef::TextAttribute(a),
        }
    }
}

impl<'a> NodeRef<'a> {
    /// The template span of a template node, `None` for expressions, which only carry
    /// absolute offsets.
    pub fn source_span(&self) -> Option<&'a ParseSourceSpan> {
        match *self {
            NodeRef::Text(n) => Some(n.source_span()),
            NodeRef::BoundText(n) => Some(n.source_span()),
            NodeRef::TextAttribute(n) => Some(n.source_span()),
            NodeRef::BoundAttribute(n) => Some(n.source_span()),
            NodeRef::BoundEvent(n) => Some(n.source_span()),
            NodeRef::Element(n) => Some(n.source_span()),
            NodeRef::Template(n) => Some(n.source_span()),
            NodeRef::Content(n) => Some(n.source_span()),
            NodeRef::Variable(n) => Some(n.source_span()),
            NodeRef::Reference(n) => Some(n.source_span()),
            NodeRef::Icu(n) => Some(n.source_span()),
            NodeRef::Expression(_) => None,
        }
    }

    /// Nodes visited after this one, in visiting order.
    ///
    /// An element yields attributes, inputs, outputs, references and then children. A template
    /// does the same, with variables ahead of references; its inputs, outputs and template
    /// attributes only for an explicit `<ng-template>`, since a desugared structural template
    /// shares them with the element it wraps. Bound nodes yield their one expression.
    /// `<ng-content>` is a leaf: its `select` attribute is not visited.
    pub fn children(&self) -> SmallVec<[NodeRef<'a>; 4]> {
        let mut children: SmallVec<[NodeRef<'a>; 4]> = SmallVec::new();
        match *self {
            NodeRef::Element(el) => {
                children.extend(el.attributes.iter().map(NodeRef::TextAttribute));
                children.extend(el.inputs.iter().map(NodeRef::BoundAttribute));
                children.extend(el.outputs.iter().map(NodeRef::BoundEvent));
                children.extend(el.references.iter().map(NodeRef::Reference));
                children.extend(el.children.iter().map(NodeRef::from));
            }
            NodeRef::Template(tmpl) => {
                children.extend(tmpl.attributes.iter().map(NodeRef::TextAttribute));
                if tmpl.is_ng_template() {
                    children.extend(tmpl.inputs.iter().map(NodeRef::BoundAttribute));
                    children.extend(tmpl.outputs.iter().map(NodeRef::BoundEvent));
                    children.extend(tmpl.template_attrs.iter().map(NodeRef::from));
                }
                children.extend(tmpl.variables.iter().map(NodeRef::Variable));
                children.extend(tmpl.references.iter().map(NodeRef::Reference));
                children.extend(tmpl.children.iter().map(NodeRef::from));
            }
            NodeRef::BoundAttribute(attr) => children.push(NodeRef::from(&attr.value)),
            NodeRef::BoundEvent(event) => children.push(NodeRef::from(&event.handler)),
            NodeRef::BoundText(text) => children.push(NodeRef::from(&text.value)),
            NodeRef::Expression(ast) => {
                children.extend(ast.children().into_iter().map(NodeRef::from));
            }
            NodeRef::Text(_)
            | NodeRef::TextAttribute(_)
            | NodeRef::Variable(_)
            | NodeRef::Reference(_)
            | NodeRef::Content(_)
            | NodeRef::Icu(_) => {
                // Leaf nodes
            }
        }
        children
    }
}

/// Information a check receives about the template it is checking.
pub struct TemplateContext<'a> {
    /// Provides semantic information about template nodes.
    pub template_type_checker: &'a dyn TemplateTypeChecker,
    /// The `@Component()` class the template belongs to.
    pub component: &'a ClassDeclaration,
    /// Category every diagnostic of the running check is reported with.
    pub category: DiagnosticCategory,
}

impl<'a> TemplateContext<'a> {
    pub fn new(
        template_type_checker: &'a dyn TemplateTypeChecker,
        component: &'a ClassDeclaration,
        category: DiagnosticCategory,
    ) -> Self {
        Self {
            template_type_checker,
            component,
            category,
        }
    }

    /// Build a diagnostic at `span` with the category configured for the running check.
    pub fn make_template_diagnostic(
        &self,
        span: &ParseSourceSpan,
        code: ErrorCode,
        message_text: impl Into<String>,
    ) -> TemplateDiagnostic {
        self.template_type_checker.make_template_diagnostic(
            self.component,
            span,
            self.category,
            code,
            message_text.into(),
        )
    }
}

/// A check over the nodes of one component template.
pub trait TemplateCheck {
    /// Unique template check code, used for configuration and searching the error.
    fn code(&self) -> ErrorCode;

    /// Name of the check in `extendedDiagnostics.checks`.
    fn name(&self) -> ExtendedTemplateDiagnosticName;

    /// Category used when no configuration says otherwise.
    fn category(&self) -> DiagnosticCategory {
        DiagnosticCategory::Warning
    }

    /// Runs the check over every node of `template`.
    fn run(&self, ctx: &TemplateContext<'_>, template: &[R3Node]) -> Vec<TemplateDiagnostic> {
        CompleteVisitor::new(ctx, self).visit_all(template)
    }

    /// Inspect one template or expression node. Returns an empty vec when the node is not
    /// of interest.
    fn visit_node(&self, ctx: &TemplateContext<'_>, node: NodeRef<'_>) -> Vec<TemplateDiagnostic>;
}

/// Creates a check from the compiler options.
pub trait TemplateCheckFactory: Sync {
    fn code(&self) -> ErrorCode;

    fn name(&self) -> ExtendedTemplateDiagnosticName;

    /// `None` when the check cannot work with `options`.
    fn create(&self, options: &NgCompilerOptions) -> Option<Box<dyn TemplateCheck>>;
}

/// Walks template nodes and the expressions bound inside them, calling
/// `TemplateCheck::visit_node` on every node before its children.
///
/// Pending nodes live on an explicit stack, so deeply nested templates do not grow the
/// native call stack.
pub struct CompleteVisitor<'c, 'a, C: TemplateCheck + ?Sized> {
    ctx: &'c TemplateContext<'a>,
    check: &'c C,
    diagnostics: Vec<TemplateDiagnostic>,
}

impl<'c, 'a, C: TemplateCheck + ?Sized> CompleteVisitor<'c, 'a, C> {
    pub fn new(ctx: &'c TemplateContext<'a>, check: &'c C) -> Self {
        Self {
            ctx,
            check,
            diagnostics: Vec::new(),
        }
    }

    /// Visits `nodes` in order and returns the diagnostics of every visited node.
    pub fn visit_all(&mut self, nodes: &[R3Node]) -> Vec<TemplateDiagnostic> {
        self.walk(nodes.iter().map(NodeRef::from));
        std::mem::take(&mut self.diagnostics)
    }

    /// Visits `node` and everything below it.
    pub fn visit(&mut self, node: NodeRef<'_>) -> Vec<TemplateDiagnostic> {
        self.walk(std::iter::once(node));
        std::mem::take(&mut self.diagnostics)
    }

    /// Visits the expression wrapped by `ast`.
    pub fn visit_ast(&mut self, ast: &ASTWithSource) -> Vec<TemplateDiagnostic> {
        self.visit(NodeRef::from(ast))
    }

    fn walk<'n, I>(&mut self, roots: I)
    where
        I: IntoIterator<Item = NodeRef<'n>>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut stack: Vec<NodeRef<'n>> = roots.into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            self.diagnostics
                .extend(self.check.visit_node(self.ctx, node));
            stack.extend(node.children().into_iter().rev());
        }
    }
}
