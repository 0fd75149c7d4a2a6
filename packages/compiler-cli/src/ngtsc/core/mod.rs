//! Core Types for ngtsc
//!
//! Compiler options and their verification.

pub mod api;
pub mod compiler;

pub use api::{
    DiagnosticCategoryLabel, ExtendedDiagnosticsOptions, NgCompilerOptions,
    UnknownCategoryLabel,
};
pub use compiler::{
    load_compiler_options, verify_extended_diagnostics_options, ExtendedDiagnosticsConfigError,
};
