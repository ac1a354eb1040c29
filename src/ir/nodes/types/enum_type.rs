use crate::ir::nodes::{DeclInfo, DeclRef, TypeInfo};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumerator {
    pub name: String,
    pub value: i64,
}

/// An enumeration over an underlying integer type.
#[derive(Debug)]
pub struct EnumTypeDecl {
    pub info: DeclInfo,
    pub type_info: TypeInfo,
    pub underlying: DeclRef,
    pub enumerators: Vec<Enumerator>,
}
