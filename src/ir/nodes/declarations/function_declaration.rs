use crate::ir::nodes::types::FunctionType;
use crate::ir::nodes::DeclInfo;

/// A function declaration. When the owned [`FunctionType`] carries a
/// containing class, this is a method declaration.
#[derive(Debug)]
pub struct FunctionDecl {
    pub info: DeclInfo,
    pub fn_type: FunctionType,
    pub declared_inline: bool,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, fn_type: FunctionType) -> Self {
        Self {
            info: DeclInfo::named(name),
            fn_type,
            declared_inline: false,
        }
    }

    pub fn is_method(&self) -> bool {
        self.fn_type.is_method()
    }
}
