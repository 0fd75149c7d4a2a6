pub mod extended_template_checker;

pub use extended_template_checker::*;
