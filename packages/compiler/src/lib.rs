#![deny(clippy::all)]

/**
 * Angular Compiler - template model
 *
 * Template and expression ASTs consumed by the compiler-cli analysis passes
 */

pub mod expression_parser;
pub mod parse_util;
pub mod render3;
