use crate::ir::nodes::{DeclInfo, DeclRef};

/// The root scope of a translation unit. Anonymous; carries members only.
#[derive(Debug, Default)]
pub struct GlobalScope {
    pub members: Vec<DeclRef>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A C++ namespace. An empty name models an anonymous namespace.
#[derive(Debug)]
pub struct NamespaceDecl {
    pub info: DeclInfo,
    pub members: Vec<DeclRef>,
}

impl NamespaceDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: DeclInfo::named(name),
            members: Vec::new(),
        }
    }
}
