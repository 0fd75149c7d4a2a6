//! Declaration handles handed out by the host program.

/// A class declaration in a source file, e.g. a `@Component()` class.
///
/// Only the identity of the declaration is modelled here; the body lives in
/// the host program and is reached through the type-checking services.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassDeclaration {
    pub name: String,
    pub file_name: String,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        ClassDeclaration {
            name: name.into(),
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
