//! Angular TypeScript Compiler (ngtsc)
//!
//! Corresponds to packages/compiler-cli/src/ngtsc

pub mod core;
pub mod diagnostics;
pub mod typecheck;
