use crate::ir::location::Location;
use crate::ir::nodes::{DeclRef, TypeInfo, WeakDeclRef};

/// A function parameter. The type is `None` only for the variadic
/// ellipsis parameter.
#[derive(Debug)]
pub struct Parameter {
    pub name: String,
    pub ty: Option<DeclRef>,
    pub is_variadic: bool,
    pub is_artificial: bool,
    pub location: Option<Location>,
}

/// The type of a function: parameters plus return type. When `class` is
/// set, this is a method type and the edge points (weakly) at the class
/// the method belongs to.
#[derive(Debug, Default)]
pub struct FunctionType {
    pub type_info: TypeInfo,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<DeclRef>,
    pub class: Option<WeakDeclRef>,
}

impl FunctionType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method_of(class: WeakDeclRef) -> Self {
        Self {
            class: Some(class),
            ..Self::default()
        }
    }

    pub fn is_method(&self) -> bool {
        self.class.is_some()
    }
}
