//! Render3 Module
//!
//! Template AST produced by the render3 template transform.

pub mod r3_ast;

pub use r3_ast::{Node, R3Node};
