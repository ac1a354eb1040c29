use crate::ir::nodes::declarations::{MemberClassTemplate, MemberFunctionTemplate};
use crate::ir::nodes::types::Access;
use crate::ir::nodes::{DeclInfo, DeclRef, TypeInfo};

/// A base class specifier.
#[derive(Debug)]
pub struct BaseSpec {
    pub base: DeclRef,
    pub access: Access,
    /// Layout offset in bits; -1 when the base is not laid out.
    pub offset_in_bits: i64,
    pub is_virtual: bool,
}

/// A data member: the wrapped variable plus layout and access flags.
#[derive(Debug)]
pub struct DataMember {
    pub var: DeclRef,
    pub access: Access,
    pub is_laid_out: bool,
    pub offset_in_bits: u64,
    pub is_static: bool,
}

/// A member function: the wrapped method declaration plus its flags.
#[derive(Debug)]
pub struct MemberFunction {
    pub function: DeclRef,
    pub access: Access,
    pub vtable_offset: u64,
    pub is_static: bool,
    pub is_constructor: bool,
    pub is_destructor: bool,
    pub is_const: bool,
}

/// A class. Either a declaration-only placeholder (name only) or a full
/// definition owning bases, member types, data members, member functions
/// and member templates.
#[derive(Debug)]
pub struct ClassDecl {
    pub info: DeclInfo,
    pub type_info: TypeInfo,
    pub is_declaration_only: bool,
    /// When this definition replaces an earlier declaration-only class,
    /// the strong edge here keeps that node (and every weak reference
    /// taken to it) alive.
    pub definition_of: Option<DeclRef>,
    pub bases: Vec<BaseSpec>,
    /// Member types land here through the usual scope attachment.
    pub members: Vec<DeclRef>,
    pub data_members: Vec<DataMember>,
    pub member_functions: Vec<MemberFunction>,
    pub member_function_templates: Vec<MemberFunctionTemplate>,
    pub member_class_templates: Vec<MemberClassTemplate>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            info: DeclInfo::named(name),
            type_info,
            is_declaration_only: false,
            definition_of: None,
            bases: Vec::new(),
            members: Vec::new(),
            data_members: Vec::new(),
            member_functions: Vec::new(),
            member_class_templates: Vec::new(),
            member_function_templates: Vec::new(),
        }
    }

    /// A declaration-only placeholder: no members, no layout.
    pub fn declaration_only(name: impl Into<String>) -> Self {
        let mut class = Self::new(name, TypeInfo::default());
        class.is_declaration_only = true;
        class
    }
}
