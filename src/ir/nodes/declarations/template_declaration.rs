use crate::ir::nodes::types::Access;
use crate::ir::nodes::{DeclInfo, DeclRef};

/// A template parameter. Every kind carries its zero-based position in
/// the parameter list.
#[derive(Debug)]
pub enum TemplateParameter {
    Type(TypeTparameter),
    NonType(NonTypeTparameter),
    Template(TemplateTparameter),
    Composition(TypeComposition),
}

impl TemplateParameter {
    pub fn index(&self) -> usize {
        match self {
            TemplateParameter::Type(p) => p.index,
            TemplateParameter::NonType(p) => p.index,
            TemplateParameter::Template(p) => p.index,
            TemplateParameter::Composition(p) => p.index,
        }
    }
}

/// `template<typename T>`. The parameter doubles as a type, so it owns
/// a type node that the symbol table can hand out to later references.
#[derive(Debug)]
pub struct TypeTparameter {
    pub index: usize,
    pub ty: DeclRef,
}

/// `template<int N>`: a value parameter with a type.
#[derive(Debug)]
pub struct NonTypeTparameter {
    pub index: usize,
    pub name: String,
    pub ty: DeclRef,
}

/// `template<template<...> class C>`; carries its own parameter list.
#[derive(Debug)]
pub struct TemplateTparameter {
    pub index: usize,
    pub name: String,
    pub parameters: Vec<TemplateParameter>,
}

/// A pointer/reference/qualified type composed over an earlier type
/// parameter, e.g. the `T&` in `template<typename T> void f(T&)`.
#[derive(Debug)]
pub struct TypeComposition {
    pub index: usize,
    pub composed: DeclRef,
}

/// A function template: ordered parameters plus a function pattern.
#[derive(Debug)]
pub struct FunctionTdecl {
    pub info: DeclInfo,
    pub parameters: Vec<TemplateParameter>,
    pub pattern: Option<DeclRef>,
}

impl FunctionTdecl {
    pub fn new() -> Self {
        Self {
            info: DeclInfo::default(),
            parameters: Vec::new(),
            pattern: None,
        }
    }
}

impl Default for FunctionTdecl {
    fn default() -> Self {
        Self::new()
    }
}

/// A class template: ordered parameters plus a class pattern.
#[derive(Debug)]
pub struct ClassTdecl {
    pub info: DeclInfo,
    pub parameters: Vec<TemplateParameter>,
    pub pattern: Option<DeclRef>,
}

impl ClassTdecl {
    pub fn new() -> Self {
        Self {
            info: DeclInfo::default(),
            parameters: Vec::new(),
            pattern: None,
        }
    }
}

impl Default for ClassTdecl {
    fn default() -> Self {
        Self::new()
    }
}

/// A function template declared inside a class.
#[derive(Debug)]
pub struct MemberFunctionTemplate {
    pub template: DeclRef,
    pub access: Access,
    pub is_static: bool,
    pub is_constructor: bool,
    pub is_const: bool,
}

/// A class template declared inside a class.
#[derive(Debug)]
pub struct MemberClassTemplate {
    pub template: DeclRef,
    pub access: Access,
    pub is_static: bool,
}
