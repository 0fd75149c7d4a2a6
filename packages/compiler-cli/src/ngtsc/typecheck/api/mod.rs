// TypeCheck API Module

pub mod api;
pub mod checker;
pub mod symbols;

// Re-exports
pub use api::{ShimLocation, TemplateDiagnostic};
pub use checker::TemplateTypeChecker;
pub use symbols::{ExpressionSymbol, ReferenceSymbol, Symbol, SymbolKind, VariableSymbol};
