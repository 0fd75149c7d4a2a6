#![deny(clippy::all)]

/**
 * Angular Compiler CLI - Rust Implementation
 *
 * Extended template diagnostics: lint checks run over component templates after
 * type-checking.
 */
// Re-export compiler for convenience
pub use angular_compiler as compiler;

pub mod ngtsc;
