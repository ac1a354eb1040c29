use crate::ir::nodes::{CvQualifiers, DeclInfo, DeclRef, TypeInfo};

/// A CV-qualified view of an underlying type.
#[derive(Debug)]
pub struct QualifiedTypeDef {
    pub info: DeclInfo,
    pub type_info: TypeInfo,
    pub underlying: DeclRef,
    pub cv: CvQualifiers,
}
