//! Render3 AST
//!
//! Contains AST node definitions for Render3 templates

use crate::expression_parser::ast::ASTWithSource;
use crate::parse_util::ParseSourceSpan;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Base trait for all R3 AST nodes
pub trait Node {
    fn source_span(&self) -> &ParseSourceSpan;
}

/// Binding types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingType {
    Property,
    Attribute,
    Class,
    Style,
    TwoWay,
    Animation,
}

/// Parsed event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedEventType {
    Regular,
    Animation,
    TwoWay,
}

/// Text node
#[derive(Debug, Clone)]
pub struct Text {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Text {
    pub fn new(value: String, source_span: ParseSourceSpan) -> Self {
        Text { value, source_span }
    }
}

impl Node for Text {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Bound text node (interpolation)
#[derive(Debug, Clone)]
pub struct BoundText {
    pub value: ASTWithSource,
    pub source_span: ParseSourceSpan,
}

impl BoundText {
    pub fn new(value: ASTWithSource, source_span: ParseSourceSpan) -> Self {
        BoundText { value, source_span }
    }
}

impl Node for BoundText {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Text attribute in the template
#[derive(Debug, Clone)]
pub struct TextAttribute {
    pub name: String,
    pub value: String,
    pub source_span: ParseSourceSpan,
    pub key_span: Option<ParseSourceSpan>,
    pub value_span: Option<ParseSourceSpan>,
}

impl Node for TextAttribute {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Bound attribute node, e.g. `[value]="expr"`
#[derive(Debug, Clone)]
pub struct BoundAttribute {
    pub name: String,
    pub type_: BindingType,
    pub value: ASTWithSource,
    pub unit: Option<String>,
    pub source_span: ParseSourceSpan,
    pub key_span: ParseSourceSpan,
    pub value_span: Option<ParseSourceSpan>,
}

impl Node for BoundAttribute {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Bound event node, e.g. `(click)="handler()"`
///
/// `name` is the event name as written between the parentheses, so the
/// malformed two-way binding `([foo])` yields the name `[foo]`.
#[derive(Debug, Clone)]
pub struct BoundEvent {
    pub name: String,
    pub type_: ParsedEventType,
    pub handler: ASTWithSource,
    pub target: Option<String>,
    pub phase: Option<String>,
    pub source_span: ParseSourceSpan,
    pub handler_span: ParseSourceSpan,
    pub key_span: ParseSourceSpan,
}

impl Node for BoundEvent {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Element node
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<TextAttribute>,
    pub inputs: Vec<BoundAttribute>,
    pub outputs: Vec<BoundEvent>,
    pub children: Vec<R3Node>,
    pub references: Vec<Reference>,
    pub is_self_closing: bool,
    pub source_span: ParseSourceSpan,
    pub start_source_span: ParseSourceSpan,
    pub end_source_span: Option<ParseSourceSpan>,
    pub is_void: bool,
}

impl Node for Element {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Template node.
///
/// Produced both for explicit `<ng-template>` tags and for elements carrying a
/// structural directive (`*ngIf`, `*ngFor`), where the template wraps the
/// element it was desugared from. In the second case `tag_name` is the
/// wrapped element's tag and the template's `inputs`/`outputs` mirror
/// bindings that also live on that element.
#[derive(Debug, Clone)]
pub struct Template {
    pub tag_name: Option<String>,
    pub attributes: Vec<TextAttribute>,
    pub inputs: Vec<BoundAttribute>,
    pub outputs: Vec<BoundEvent>,
    pub template_attrs: Vec<TemplateAttr>,
    pub children: Vec<R3Node>,
    pub references: Vec<Reference>,
    pub variables: Vec<Variable>,
    pub is_self_closing: bool,
    pub source_span: ParseSourceSpan,
    pub start_source_span: ParseSourceSpan,
    pub end_source_span: Option<ParseSourceSpan>,
}

impl Template {
    /// Whether this node is an explicit `<ng-template>` rather than a desugared
    /// structural directive.
    pub fn is_ng_template(&self) -> bool {
        self.tag_name.as_deref() == Some("ng-template")
    }
}

/// Template attribute (either bound or text)
#[derive(Debug, Clone)]
pub enum TemplateAttr {
    Bound(BoundAttribute),
    Text(TextAttribute),
}

impl Node for Template {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Content node (ng-content)
#[derive(Debug, Clone)]
pub struct Content {
    pub selector: String,
    pub attributes: Vec<TextAttribute>,
    pub is_self_closing: bool,
    pub source_span: ParseSourceSpan,
    pub start_source_span: ParseSourceSpan,
    pub end_source_span: Option<ParseSourceSpan>,
}

impl Node for Content {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Variable node, e.g. `let-item` on a template
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub value: String,
    pub source_span: ParseSourceSpan,
    pub key_span: ParseSourceSpan,
    pub value_span: Option<ParseSourceSpan>,
}

impl Node for Variable {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Reference node, e.g. `#ref`
#[derive(Debug, Clone)]
pub struct Reference {
    pub name: String,
    pub value: String,
    pub source_span: ParseSourceSpan,
    pub key_span: ParseSourceSpan,
    pub value_span: Option<ParseSourceSpan>,
}

impl Node for Reference {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// ICU node
#[derive(Debug, Clone)]
pub struct Icu {
    pub vars: IndexMap<String, BoundText>,
    pub placeholders: IndexMap<String, IcuPlaceholder>,
    pub source_span: ParseSourceSpan,
}

#[derive(Debug, Clone)]
pub enum IcuPlaceholder {
    Text(Text),
    BoundText(BoundText),
}

impl Node for Icu {
    fn source_span(&self) -> &ParseSourceSpan {
        &self.source_span
    }
}

/// Enum for all R3 node types
#[derive(Debug, Clone)]
pub enum R3Node {
    Text(Text),
    BoundText(BoundText),
    TextAttribute(TextAttribute),
    BoundAttribute(BoundAttribute),
    BoundEvent(BoundEvent),
    Element(Element),
    Template(Template),
    Content(Content),
    Variable(Variable),
    Reference(Reference),
    Icu(Icu),
}

impl Node for R3Node {
    fn source_span(&self) -> &ParseSourceSpan {
        match self {
            R3Node::Text(n) => n.source_span(),
            R3Node::BoundText(n) => n.source_span(),
            R3Node::TextAttribute(n) => n.source_span(),
            R3Node::BoundAttribute(n) => n.source_span(),
            R3Node::BoundEvent(n) => n.source_span(),
            R3Node::Element(n) => n.source_span(),
            R3Node::Template(n) => n.source_span(),
            R3Node::Content(n) => n.source_span(),
            R3Node::Variable(n) => n.source_span(),
            R3Node::Reference(n) => n.source_span(),
            R3Node::Icu(n) => n.source_span(),
        }
    }
}
