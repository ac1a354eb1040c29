use crate::ir::nodes::{DeclInfo, TypeInfo};

/// A fundamental type such as `int` or `unsigned char`.
#[derive(Debug)]
pub struct TypeDecl {
    pub info: DeclInfo,
    pub type_info: TypeInfo,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            info: DeclInfo::named(name),
            type_info,
        }
    }
}
