//! Test helpers for template checks.
//!
//! `TemplateBuilder` creates template and expression nodes whose spans point into a real
//! template string, and `FakeTemplateTypeChecker` answers type-checker queries from tables
//! filled in by the test.

use crate::ngtsc::typecheck::api::{
    ExpressionSymbol, ShimLocation, Symbol, TemplateTypeChecker,
};
use angular_compiler::expression_parser::{
    ASTWithSource, AbsoluteSourceSpan, Binary, ImplicitReceiver, LiteralPrimitive, ParseSpan,
    PropertyRead, AST,
};
use angular_compiler::parse_util::{ParseSourceFile, ParseSourceSpan};
use angular_compiler::render3::r3_ast::{
    BoundAttribute, BoundEvent, BoundText, BindingType, Element, ParsedEventType, Reference,
    Template, Text, TextAttribute, Variable,
};
use angular_compiler::render3::R3Node;
use std::cell::Cell;
use std::collections::HashMap;
use ts::{ClassDeclaration, Type};

pub const TEMPLATE_URL: &str = "/app.component.html";
pub const COMPONENT_FILE: &str = "/app.component.ts";
const SHIM_PATH: &str = "/app.component.ngtypecheck.ts";

/// The `AppComponent` declaration every fake template belongs to.
pub fn app_component() -> ClassDeclaration {
    ClassDeclaration::new("AppComponent", COMPONENT_FILE)
}

/// Builds nodes over the text of one template.
///
/// Nodes are located by searching for a piece of the template, so each piece passed in must
/// occur in the template; the first occurrence at or after `from` wins.
pub struct TemplateBuilder {
    file: ParseSourceFile,
}

impl TemplateBuilder {
    pub fn new(template: &str) -> Self {
        TemplateBuilder {
            file: ParseSourceFile::new(template.to_string(), TEMPLATE_URL.to_string()),
        }
    }

    pub fn file(&self) -> &ParseSourceFile {
        &self.file
    }

    /// Offset of the first `needle` at or after `from`.
    pub fn offset_of(&self, needle: &str, from: usize) -> usize {
        match self.file.content[from..].find(needle) {
            Some(pos) => from + pos,
            None => panic!("`{}` not found in template after offset {}", needle, from),
        }
    }

    pub fn span(&self, start: usize, end: usize) -> ParseSourceSpan {
        ParseSourceSpan::from_offsets(&self.file, start, end)
    }

    /// Span of the first `needle` at or after `from`.
    pub fn span_of(&self, needle: &str, from: usize) -> ParseSourceSpan {
        let start = self.offset_of(needle, from);
        self.span(start, start + needle.len())
    }

    /// Span of `name` inside `span`, or all of `span` when `name` is not written there, as for
    /// the `fooChange` event of `[(foo)]`.
    fn key_span(&self, span: &ParseSourceSpan, name: &str) -> ParseSourceSpan {
        let text = span.to_string();
        match text.find(name) {
            Some(pos) => {
                let start = span.start.offset + pos;
                self.span(start, start + name.len())
            }
            None => span.clone(),
        }
    }

    /// `name` read from the component, e.g. `var1`.
    pub fn property_read(&self, name: &str, from: usize) -> AST {
        let start = self.offset_of(name, from);
        let end = start + name.len();
        let receiver = AST::ImplicitReceiver(ImplicitReceiver::new(
            ParseSpan::new(start, start),
            AbsoluteSourceSpan::new(start, start),
        ));
        AST::PropertyRead(PropertyRead::new(
            ParseSpan::new(start, end),
            AbsoluteSourceSpan::new(start, end),
            AbsoluteSourceSpan::new(start, end),
            Box::new(receiver),
            name.to_string(),
        ))
    }

    /// The literal `null` at its first occurrence at or after `from`.
    pub fn null_literal(&self, from: usize) -> AST {
        let start = self.offset_of("null", from);
        let end = start + "null".len();
        AST::LiteralPrimitive(LiteralPrimitive::null(
            ParseSpan::new(start, end),
            AbsoluteSourceSpan::new(start, end),
        ))
    }

    /// `left <operation> right`, spanning both operands.
    pub fn binary(&self, left: AST, operation: &str, right: AST) -> AST {
        let span = AbsoluteSourceSpan::new(left.source_span().start, right.source_span().end);
        AST::Binary(Binary::new(
            ParseSpan::new(span.start, span.end),
            span,
            operation.to_string(),
            Box::new(left),
            Box::new(right),
        ))
    }

    pub fn with_source(&self, ast: AST) -> ASTWithSource {
        let span = ast.source_span();
        let source = self.file.content.get(span.start..span.end).map(str::to_string);
        ASTWithSource::new(Box::new(ast), source, TEMPLATE_URL.to_string(), span.start)
    }

    pub fn text(&self, value: &str, from: usize) -> Text {
        Text::new(value.to_string(), self.span_of(value, from))
    }

    pub fn bound_text(&self, source: &str, value: AST, from: usize) -> BoundText {
        BoundText::new(self.with_source(value), self.span_of(source, from))
    }

    /// `name="value"` as written in `source`.
    pub fn text_attribute(&self, source: &str, name: &str, value: &str, from: usize) -> TextAttribute {
        let span = self.span_of(source, from);
        let start = span.start.offset;
        TextAttribute {
            name: name.to_string(),
            value: value.to_string(),
            key_span: Some(self.span(start, start + name.len())),
            value_span: None,
            source_span: span,
        }
    }

    /// A property binding; `source` is the whole attribute, e.g. `[foo]="bar"`.
    pub fn bound_attribute(&self, source: &str, name: &str, value: AST, from: usize) -> BoundAttribute {
        let span = self.span_of(source, from);
        let key_span = self.key_span(&span, name);
        BoundAttribute {
            name: name.to_string(),
            type_: BindingType::Property,
            value: self.with_source(value),
            unit: None,
            source_span: span,
            key_span,
            value_span: None,
        }
    }

    /// An event binding; `source` is the whole attribute, e.g. `(input)="onInput()"`.
    pub fn bound_event(&self, source: &str, name: &str, handler: AST, from: usize) -> BoundEvent {
        let span = self.span_of(source, from);
        let key_span = self.key_span(&span, name);
        let handler = self.with_source(handler);
        let handler_span = self.span(
            handler.ast.source_span().start,
            handler.ast.source_span().end,
        );
        BoundEvent {
            name: name.to_string(),
            type_: ParsedEventType::Regular,
            handler,
            target: None,
            phase: None,
            source_span: span,
            handler_span,
            key_span,
        }
    }

    pub fn reference(&self, source: &str, name: &str, from: usize) -> Reference {
        let span = self.span_of(source, from);
        let key_span = self.key_span(&span, name);
        Reference {
            name: name.to_string(),
            value: String::new(),
            source_span: span,
            key_span,
            value_span: None,
        }
    }

    pub fn variable(&self, source: &str, name: &str, value: &str, from: usize) -> Variable {
        let span = self.span_of(source, from);
        let key_span = self.key_span(&span, name);
        Variable {
            name: name.to_string(),
            value: value.to_string(),
            source_span: span,
            key_span,
            value_span: None,
        }
    }

    /// An element without attributes, bindings or children; `source` is the whole element.
    pub fn element(&self, name: &str, source: &str, from: usize) -> Element {
        let span = self.span_of(source, from);
        let start_source_span = span.clone();
        Element {
            name: name.to_string(),
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            children: Vec::new(),
            references: Vec::new(),
            is_self_closing: false,
            source_span: span,
            start_source_span,
            end_source_span: None,
            is_void: false,
        }
    }

    /// An empty template node; `source` is the whole template.
    pub fn template(&self, tag_name: Option<&str>, source: &str, from: usize) -> Template {
        let span = self.span_of(source, from);
        let start_source_span = span.clone();
        Template {
            tag_name: tag_name.map(str::to_string),
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            template_attrs: Vec::new(),
            children: Vec::new(),
            references: Vec::new(),
            variables: Vec::new(),
            is_self_closing: false,
            source_span: span,
            start_source_span,
            end_source_span: None,
        }
    }
}

/// In-memory `TemplateTypeChecker`.
///
/// Expression symbols are keyed by the absolute span of the expression they describe.
#[derive(Default)]
pub struct FakeTemplateTypeChecker {
    templates: HashMap<ClassDeclaration, Vec<R3Node>>,
    symbols: HashMap<AbsoluteSourceSpan, Symbol>,
    shim_spans: HashMap<ShimLocation, ParseSourceSpan>,
    next_shim_position: Cell<usize>,
    symbol_queries: Cell<usize>,
}

impl FakeTemplateTypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_template(&mut self, component: ClassDeclaration, template: Vec<R3Node>) {
        self.templates.insert(component, template);
    }

    fn next_shim_location(&self) -> ShimLocation {
        let position = self.next_shim_position.get();
        self.next_shim_position.set(position + 100);
        ShimLocation::new(SHIM_PATH, position)
    }

    /// Gives the expression at `span` the type `ts_type`, mapped back to `template_span`.
    pub fn add_expression_type(
        &mut self,
        span: AbsoluteSourceSpan,
        ts_type: Type,
        template_span: ParseSourceSpan,
    ) {
        let shim_location = self.next_shim_location();
        self.shim_spans.insert(shim_location.clone(), template_span);
        self.symbols.insert(
            span,
            Symbol::Expression(ExpressionSymbol {
                ts_type,
                shim_location,
            }),
        );
    }

    /// Like `add_expression_type` but the shim location has no template mapping.
    pub fn add_unmapped_expression_type(&mut self, span: AbsoluteSourceSpan, ts_type: Type) {
        let shim_location = self.next_shim_location();
        self.symbols.insert(
            span,
            Symbol::Expression(ExpressionSymbol {
                ts_type,
                shim_location,
            }),
        );
    }

    pub fn add_symbol(&mut self, span: AbsoluteSourceSpan, symbol: Symbol) {
        self.symbols.insert(span, symbol);
    }

    /// Maps `location` back to `template_span`.
    pub fn add_shim_span(&mut self, location: ShimLocation, template_span: ParseSourceSpan) {
        self.shim_spans.insert(location, template_span);
    }

    /// How many times `get_symbol_of_node` was called.
    pub fn symbol_queries(&self) -> usize {
        self.symbol_queries.get()
    }
}

impl TemplateTypeChecker for FakeTemplateTypeChecker {
    fn get_template(&self, component: &ClassDeclaration) -> Option<&[R3Node]> {
        self.templates.get(component).map(Vec::as_slice)
    }

    fn get_symbol_of_node(&self, node: &AST, _component: &ClassDeclaration) -> Option<Symbol> {
        self.symbol_queries.set(self.symbol_queries.get() + 1);
        self.symbols.get(&node.source_span()).cloned()
    }

    fn get_span_for_shim_location(&self, location: &ShimLocation) -> Option<ParseSourceSpan> {
        self.shim_spans.get(location).cloned()
    }
}
