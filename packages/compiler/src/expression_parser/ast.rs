/**
 * Angular Expression AST
 *
 * Defines the AST node types for Angular template expressions
 */

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Span relative to the start of the expression source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSpan {
    pub start: usize,
    pub end: usize,
}

impl ParseSpan {
    pub fn new(start: usize, end: usize) -> Self {
        ParseSpan { start, end }
    }

    pub fn to_absolute(&self, absolute_offset: usize) -> AbsoluteSourceSpan {
        AbsoluteSourceSpan::new(absolute_offset + self.start, absolute_offset + self.end)
    }
}

/// Absolute source span for mapping back to source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsoluteSourceSpan {
    pub start: usize,
    pub end: usize,
}

impl AbsoluteSourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        AbsoluteSourceSpan { start, end }
    }
}

/// Main AST enum containing all node types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AST {
    EmptyExpr(EmptyExpr),
    ImplicitReceiver(ImplicitReceiver),
    ThisReceiver(ThisReceiver),
    Chain(Chain),
    Conditional(Conditional),
    PropertyRead(PropertyRead),
    SafePropertyRead(SafePropertyRead),
    KeyedRead(KeyedRead),
    SafeKeyedRead(SafeKeyedRead),
    BindingPipe(BindingPipe),
    LiteralPrimitive(LiteralPrimitive),
    LiteralArray(LiteralArray),
    LiteralMap(LiteralMap),
    Interpolation(Interpolation),
    Binary(Binary),
    PrefixNot(PrefixNot),
    Unary(Unary),
    TypeofExpression(TypeofExpression),
    NonNullAssert(NonNullAssert),
    Call(Call),
    SafeCall(SafeCall),
    PropertyWrite(PropertyWrite),
    KeyedWrite(KeyedWrite),
    ParenthesizedExpression(ParenthesizedExpression),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyExpr {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
}

/// Implicit receiver (the component instance)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplicitReceiver {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
}

/// This receiver (explicit `this`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThisReceiver {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
}

/// Chain of expressions (e.g., `a; b; c`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub expressions: Vec<Box<AST>>,
}

/// Ternary conditional (e.g., `condition ? true : false`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conditional {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub condition: Box<AST>,
    pub true_exp: Box<AST>,
    pub false_exp: Box<AST>,
}

/// Property read (e.g., `obj.property`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRead {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub name_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub name: String,
}

/// Safe property read (e.g., `obj?.property`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafePropertyRead {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub name_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub name: String,
}

/// Keyed read (e.g., `obj[key]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyedRead {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub key: Box<AST>,
}

/// Safe keyed read (e.g., `obj?.[key]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeKeyedRead {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub key: Box<AST>,
}

/// Pipe binding (e.g., `value | pipeName:arg1:arg2`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingPipe {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub name_span: AbsoluteSourceSpan,
    pub exp: Box<AST>,
    pub name: String,
    pub args: Vec<Box<AST>>,
}

/// Literal primitive (string, number, boolean, null)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "literalType")]
pub enum LiteralPrimitive {
    String {
        span: ParseSpan,
        source_span: AbsoluteSourceSpan,
        value: String,
    },
    Number {
        span: ParseSpan,
        source_span: AbsoluteSourceSpan,
        value: f64,
    },
    Boolean {
        span: ParseSpan,
        source_span: AbsoluteSourceSpan,
        value: bool,
    },
    Null {
        span: ParseSpan,
        source_span: AbsoluteSourceSpan,
    },
    Undefined {
        span: ParseSpan,
        source_span: AbsoluteSourceSpan,
    },
}

/// Array literal (e.g., `[1, 2, 3]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralArray {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub expressions: Vec<Box<AST>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralMapKey {
    pub key: String,
    pub quoted: bool,
}

/// Object literal (e.g., `{a: 1, b: 2}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralMap {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub keys: Vec<LiteralMapKey>,
    pub values: Vec<Box<AST>>,
}

/// Interpolation (`{{expr}}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpolation {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub strings: Vec<String>,
    pub expressions: Vec<Box<AST>>,
}

/// Binary operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binary {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub operation: String,
    pub left: Box<AST>,
    pub right: Box<AST>,
}

/// Prefix not operator (e.g., `!expr`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixNot {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub expression: Box<AST>,
}

/// Unary operator (e.g., `+expr`, `-expr`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unary {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub operator: String,
    pub expr: Box<AST>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeofExpression {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub expression: Box<AST>,
}

/// Non-null assertion (e.g., `expr!`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonNullAssert {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub expression: Box<AST>,
}

/// Function call (e.g., `fn(a, b)`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub args: Vec<Box<AST>>,
    pub argument_span: AbsoluteSourceSpan,
}

/// Safe function call (e.g., `fn?.(a, b)`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeCall {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub args: Vec<Box<AST>>,
    pub argument_span: AbsoluteSourceSpan,
}

/// Property write (e.g., `obj.property = value`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyWrite {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub name: String,
    pub value: Box<AST>,
}

/// Keyed write (e.g., `obj[key] = value`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyedWrite {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub receiver: Box<AST>,
    pub key: Box<AST>,
    pub value: Box<AST>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    pub span: ParseSpan,
    pub source_span: AbsoluteSourceSpan,
    pub expression: Box<AST>,
}

impl ImplicitReceiver {
    pub fn new(span: ParseSpan, source_span: AbsoluteSourceSpan) -> Self {
        ImplicitReceiver { span, source_span }
    }
}

impl PropertyRead {
    pub fn new(
        span: ParseSpan,
        source_span: AbsoluteSourceSpan,
        name_span: AbsoluteSourceSpan,
        receiver: Box<AST>,
        name: String,
    ) -> Self {
        PropertyRead {
            span,
            source_span,
            name_span,
            receiver,
            name,
        }
    }
}

impl Binary {
    pub fn new(
        span: ParseSpan,
        source_span: AbsoluteSourceSpan,
        operation: String,
        left: Box<AST>,
        right: Box<AST>,
    ) -> Self {
        Binary {
            span,
            source_span,
            operation,
            left,
            right,
        }
    }
}

impl LiteralPrimitive {
    pub fn number(span: ParseSpan, source_span: AbsoluteSourceSpan, value: f64) -> Self {
        LiteralPrimitive::Number {
            span,
            source_span,
            value,
        }
    }

    pub fn null(span: ParseSpan, source_span: AbsoluteSourceSpan) -> Self {
        LiteralPrimitive::Null { span, source_span }
    }

    fn source_span(&self) -> AbsoluteSourceSpan {
        match self {
            LiteralPrimitive::String { source_span, .. }
            | LiteralPrimitive::Number { source_span, .. }
            | LiteralPrimitive::Boolean { source_span, .. }
            | LiteralPrimitive::Null { source_span, .. }
            | LiteralPrimitive::Undefined { source_span, .. } => *source_span,
        }
    }
}

/// AST with source location info.
///
/// Wraps the root of a parsed binding expression. It is never nested inside
/// another expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ASTWithSource {
    pub ast: Box<AST>,
    pub source: Option<String>,
    pub location: String,
    pub absolute_offset: usize,
}

impl ASTWithSource {
    pub fn new(ast: Box<AST>, source: Option<String>, location: String, absolute_offset: usize) -> Self {
        ASTWithSource {
            ast,
            source,
            location,
            absolute_offset,
        }
    }
}

impl AST {
    pub fn source_span(&self) -> AbsoluteSourceSpan {
        match self {
            AST::EmptyExpr(e) => e.source_span,
            AST::ImplicitReceiver(e) => e.source_span,
            AST::ThisReceiver(e) => e.source_span,
            AST::Chain(e) => e.source_span,
            AST::Conditional(e) => e.source_span,
            AST::PropertyRead(e) => e.source_span,
            AST::SafePropertyRead(e) => e.source_span,
            AST::KeyedRead(e) => e.source_span,
            AST::SafeKeyedRead(e) => e.source_span,
            AST::BindingPipe(e) => e.source_span,
            AST::LiteralPrimitive(e) => e.source_span(),
            AST::LiteralArray(e) => e.source_span,
            AST::LiteralMap(e) => e.source_span,
            AST::Interpolation(e) => e.source_span,
            AST::Binary(e) => e.source_span,
            AST::PrefixNot(e) => e.source_span,
            AST::Unary(e) => e.source_span,
            AST::TypeofExpression(e) => e.source_span,
            AST::NonNullAssert(e) => e.source_span,
            AST::Call(e) => e.source_span,
            AST::SafeCall(e) => e.source_span,
            AST::PropertyWrite(e) => e.source_span,
            AST::KeyedWrite(e) => e.source_span,
            AST::ParenthesizedExpression(e) => e.source_span,
        }
    }

    /// Direct sub-expressions, in evaluation order.
    pub fn children(&self) -> SmallVec<[&AST; 4]> {
        let mut children: SmallVec<[&AST; 4]> = SmallVec::new();
        match self {
            AST::Binary(b) => {
                children.push(&b.left);
                children.push(&b.right);
            }
            AST::Chain(c) => children.extend(c.expressions.iter().map(|e| &**e)),
            AST::Conditional(c) => {
                children.push(&c.condition);
                children.push(&c.true_exp);
                children.push(&c.false_exp);
            }
            AST::PropertyRead(p) => children.push(&p.receiver),
            AST::SafePropertyRead(p) => children.push(&p.receiver),
            AST::KeyedRead(k) => {
                children.push(&k.receiver);
                children.push(&k.key);
            }
            AST::SafeKeyedRead(k) => {
                children.push(&k.receiver);
                children.push(&k.key);
            }
            AST::BindingPipe(p) => {
                children.push(&p.exp);
                children.extend(p.args.iter().map(|a| &**a));
            }
            AST::LiteralArray(a) => children.extend(a.expressions.iter().map(|e| &**e)),
            AST::LiteralMap(m) => children.extend(m.values.iter().map(|v| &**v)),
            AST::Interpolation(i) => children.extend(i.expressions.iter().map(|e| &**e)),
            AST::Call(c) => {
                children.push(&c.receiver);
                children.extend(c.args.iter().map(|a| &**a));
            }
            AST::SafeCall(c) => {
                children.push(&c.receiver);
                children.extend(c.args.iter().map(|a| &**a));
            }
            AST::PrefixNot(p) => children.push(&p.expression),
            AST::Unary(u) => children.push(&u.expr),
            AST::TypeofExpression(t) => children.push(&t.expression),
            AST::NonNullAssert(n) => children.push(&n.expression),
            AST::PropertyWrite(p) => {
                children.push(&p.receiver);
                children.push(&p.value);
            }
            AST::KeyedWrite(k) => {
                children.push(&k.receiver);
                children.push(&k.key);
                children.push(&k.value);
            }
            AST::ParenthesizedExpression(p) => children.push(&p.expression),
            AST::EmptyExpr(_)
            | AST::ImplicitReceiver(_)
            | AST::ThisReceiver(_)
            | AST::LiteralPrimitive(_) => {
                // Leaf nodes
            }
        }
        children
    }

    pub fn is_implicit_receiver(&self) -> bool {
        matches!(self, AST::ImplicitReceiver(_))
    }
}
