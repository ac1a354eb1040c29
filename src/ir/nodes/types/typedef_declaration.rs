use crate::ir::nodes::{DeclInfo, DeclRef, TypeInfo};

/// A named alias for an underlying type.
#[derive(Debug)]
pub struct TypedefDecl {
    pub info: DeclInfo,
    pub type_info: TypeInfo,
    pub underlying: DeclRef,
}
