use crate::ir::location::LocationManager;
use crate::ir::nodes::declarations::GlobalScope;
use crate::ir::nodes::{Decl, DeclRef};

/// The declarations produced from one compilation input.
///
/// Owns the root global scope, the path of the input, the target address
/// size in bytes, and the location table its declarations point into.
#[derive(Debug)]
pub struct TranslationUnit {
    pub path: String,
    /// Address size in bytes; `None` when the document does not carry one.
    pub address_size: Option<u32>,
    global_scope: DeclRef,
    locations: LocationManager,
}

impl TranslationUnit {
    pub fn new() -> Self {
        Self {
            path: String::new(),
            address_size: None,
            global_scope: Decl::new_ref(Decl::GlobalScope(GlobalScope::new())),
            locations: LocationManager::new(),
        }
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        let mut tu = Self::new();
        tu.path = path.into();
        tu
    }

    pub fn global_scope(&self) -> &DeclRef {
        &self.global_scope
    }

    pub fn locations(&self) -> &LocationManager {
        &self.locations
    }

    /// True when the global scope holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.global_scope
            .borrow()
            .members()
            .map(|m| m.is_empty())
            .unwrap_or(true)
    }
}

impl Default for TranslationUnit {
    fn default() -> Self {
        Self::new()
    }
}
