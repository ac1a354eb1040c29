use crate::ir::nodes::{DeclInfo, DeclRef, TypeInfo};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    Lvalue,
    Rvalue,
}

#[derive(Debug)]
pub struct ReferenceTypeDef {
    pub info: DeclInfo,
    pub type_info: TypeInfo,
    pub referent: DeclRef,
    pub kind: ReferenceKind,
}
