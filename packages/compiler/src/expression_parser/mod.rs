/**
 * Expression Parser Module
 *
 * Expression nodes embedded in template bindings. Parsing the binding text
 * happens upstream; this module only models the result.
 */
pub mod ast;

pub use ast::*;
