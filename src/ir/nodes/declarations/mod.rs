pub mod function_declaration;
pub mod namespace_declaration;
pub mod template_declaration;
pub mod variable_declaration;

pub use function_declaration::FunctionDecl;
pub use namespace_declaration::{GlobalScope, NamespaceDecl};
pub use template_declaration::{
    ClassTdecl, FunctionTdecl, MemberClassTemplate, MemberFunctionTemplate, NonTypeTparameter,
    TemplateParameter, TemplateTparameter, TypeComposition, TypeTparameter,
};
pub use variable_declaration::VarDecl;
