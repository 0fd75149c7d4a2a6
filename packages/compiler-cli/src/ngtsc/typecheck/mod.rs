// TypeCheck Module
//
// Template type-checking services consumed by the extended template diagnostics.

pub mod api;
pub mod extended;

#[cfg(test)]
pub mod testing;
