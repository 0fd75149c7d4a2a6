// TypeCheck Symbols
//
// Semantic information the template type-checker exposes for template nodes.

use super::api::ShimLocation;
use ts::Type;

/// Kinds of symbols the template type-checker can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Expression,
    Reference,
    Variable,
}

/// A resolved template symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Expression(ExpressionSymbol),
    Reference(ReferenceSymbol),
    Variable(VariableSymbol),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Expression(_) => SymbolKind::Expression,
            Symbol::Reference(_) => SymbolKind::Reference,
            Symbol::Variable(_) => SymbolKind::Variable,
        }
    }

    pub fn ts_type(&self) -> &Type {
        match self {
            Symbol::Expression(s) => &s.ts_type,
            Symbol::Reference(s) => &s.ts_type,
            Symbol::Variable(s) => &s.ts_type,
        }
    }

    pub fn shim_location(&self) -> &ShimLocation {
        match self {
            Symbol::Expression(s) => &s.shim_location,
            Symbol::Reference(s) => &s.shim_location,
            Symbol::Variable(s) => &s.shim_location,
        }
    }
}

/// An expression in the template, e.g. the `foo` of `{{ foo ?? bar }}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionSymbol {
    /// Type of the expression.
    pub ts_type: Type,
    /// Where the expression was emitted in the type-check shim.
    pub shim_location: ShimLocation,
}

/// A `#ref` declared on an element or template.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSymbol {
    /// Type of the referenced element or directive.
    pub ts_type: Type,
    /// Where the reference was emitted in the type-check shim.
    pub shim_location: ShimLocation,
}

/// A `let-` variable declared on a template.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSymbol {
    /// Type of the variable.
    pub ts_type: Type,
    /// Where the variable was emitted in the type-check shim.
    pub shim_location: ShimLocation,
}
