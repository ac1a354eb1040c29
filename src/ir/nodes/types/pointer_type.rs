use crate::ir::nodes::{DeclInfo, DeclRef, TypeInfo};

#[derive(Debug)]
pub struct PointerTypeDef {
    pub info: DeclInfo,
    pub type_info: TypeInfo,
    pub pointee: DeclRef,
}
