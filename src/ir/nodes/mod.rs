//! Declaration and type nodes.
//!
//! The IR is a cyclic graph: types reference other types, methods point
//! back at their class, members point back at their scope. Nodes are
//! shared through [`DeclRef`] (`Rc<RefCell<Decl>>`); every back-edge from
//! child to parent is a [`WeakDeclRef`], which keeps the ownership graph
//! acyclic.

pub mod declarations;
pub mod types;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::ir::location::Location;

pub use declarations::{
    ClassTdecl, FunctionDecl, FunctionTdecl, GlobalScope, MemberClassTemplate,
    MemberFunctionTemplate, NamespaceDecl, NonTypeTparameter, TemplateParameter,
    TemplateTparameter, TypeComposition, TypeTparameter, VarDecl,
};
pub use types::{
    Access, BaseSpec, ClassDecl, CvQualifiers, DataMember, EnumTypeDecl, Enumerator, FunctionType,
    MemberFunction, Parameter, PointerTypeDef, QualifiedTypeDef, ReferenceKind, ReferenceTypeDef,
    TypeDecl, TypeInfo, TypeNode, TypedefDecl,
};

/// Shared, mutable handle to a declaration node.
pub type DeclRef = Rc<RefCell<Decl>>;

/// Non-owning back-reference to a declaration node.
pub type WeakDeclRef = Weak<RefCell<Decl>>;

/// ELF-style symbol visibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    Default,
    Hidden,
    Internal,
    Protected,
    None,
}

/// ELF-style symbol binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    Global,
    Local,
    Weak,
    None,
}

/// Attributes shared by every named declaration.
#[derive(Debug)]
pub struct DeclInfo {
    pub name: String,
    pub mangled_name: Option<String>,
    pub location: Option<Location>,
    pub visibility: Visibility,
    pub binding: Binding,
    /// The enclosing scope, set when the declaration is attached to one.
    pub scope: WeakDeclRef,
}

impl DeclInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for DeclInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            mangled_name: None,
            location: None,
            visibility: Visibility::Default,
            binding: Binding::Global,
            scope: Weak::new(),
        }
    }
}

/// A declaration node; the first level of the two-level kind split.
///
/// All type kinds live one level down in [`TypeNode`], so that the type
/// symbol table and the type builders can dispatch over types without
/// caring about non-type declarations.
#[derive(Debug)]
pub enum Decl {
    GlobalScope(GlobalScope),
    Namespace(NamespaceDecl),
    Var(VarDecl),
    Function(FunctionDecl),
    FunctionTemplate(FunctionTdecl),
    ClassTemplate(ClassTdecl),
    Type(TypeNode),
}

impl Decl {
    pub fn new_ref(decl: Decl) -> DeclRef {
        Rc::new(RefCell::new(decl))
    }

    /// The shared declaration attributes, if this kind carries them.
    /// The global scope is the one anonymous, attribute-less node.
    pub fn decl_info(&self) -> Option<&DeclInfo> {
        match self {
            Decl::GlobalScope(_) => None,
            Decl::Namespace(n) => Some(&n.info),
            Decl::Var(v) => Some(&v.info),
            Decl::Function(f) => Some(&f.info),
            Decl::FunctionTemplate(t) => Some(&t.info),
            Decl::ClassTemplate(t) => Some(&t.info),
            Decl::Type(t) => Some(t.decl_info()),
        }
    }

    pub fn decl_info_mut(&mut self) -> Option<&mut DeclInfo> {
        match self {
            Decl::GlobalScope(_) => None,
            Decl::Namespace(n) => Some(&mut n.info),
            Decl::Var(v) => Some(&mut v.info),
            Decl::Function(f) => Some(&mut f.info),
            Decl::FunctionTemplate(t) => Some(&mut t.info),
            Decl::ClassTemplate(t) => Some(&mut t.info),
            Decl::Type(t) => Some(t.decl_info_mut()),
        }
    }

    pub fn name(&self) -> &str {
        self.decl_info().map(|i| i.name.as_str()).unwrap_or("")
    }

    pub fn visibility(&self) -> Visibility {
        self.decl_info()
            .map(|i| i.visibility)
            .unwrap_or(Visibility::Default)
    }

    pub fn binding(&self) -> Binding {
        self.decl_info().map(|i| i.binding).unwrap_or(Binding::Global)
    }

    /// Upgraded enclosing-scope back-reference.
    pub fn scope(&self) -> Option<DeclRef> {
        self.decl_info().and_then(|i| i.scope.upgrade())
    }

    /// True for the kinds that own an ordered member list.
    pub fn is_scope(&self) -> bool {
        matches!(
            self,
            Decl::GlobalScope(_) | Decl::Namespace(_) | Decl::Type(TypeNode::Class(_))
        )
    }

    /// Ordered members, for scope kinds.
    pub fn members(&self) -> Option<&[DeclRef]> {
        match self {
            Decl::GlobalScope(s) => Some(&s.members),
            Decl::Namespace(n) => Some(&n.members),
            Decl::Type(TypeNode::Class(c)) => Some(&c.members),
            _ => None,
        }
    }

    /// Append a member to a scope kind. Panics on non-scopes; callers
    /// check `is_scope` or know the kind statically.
    pub fn push_member(&mut self, member: DeclRef) {
        match self {
            Decl::GlobalScope(s) => s.members.push(member),
            Decl::Namespace(n) => n.members.push(member),
            Decl::Type(TypeNode::Class(c)) => c.members.push(member),
            other => panic!("push_member on non-scope declaration '{}'", other.name()),
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Decl::Type(_))
    }

    pub fn as_type(&self) -> Option<&TypeNode> {
        match self {
            Decl::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDecl> {
        match self {
            Decl::Type(TypeNode::Class(c)) => Some(c),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut ClassDecl> {
        match self {
            Decl::Type(TypeNode::Class(c)) => Some(c),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&NamespaceDecl> {
        match self {
            Decl::Namespace(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_var(&self) -> Option<&VarDecl> {
        match self {
            Decl::Var(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match self {
            Decl::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_function_template(&self) -> Option<&FunctionTdecl> {
        match self {
            Decl::FunctionTemplate(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_function_template_mut(&mut self) -> Option<&mut FunctionTdecl> {
        match self {
            Decl::FunctionTemplate(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_class_template(&self) -> Option<&ClassTdecl> {
        match self {
            Decl::ClassTemplate(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_class_template_mut(&mut self) -> Option<&mut ClassTdecl> {
        match self {
            Decl::ClassTemplate(t) => Some(t),
            _ => None,
        }
    }

    /// Size in bits, for type kinds; 0 where unknown.
    pub fn size_in_bits(&self) -> u64 {
        self.as_type().map(|t| t.type_info().size_in_bits).unwrap_or(0)
    }

    pub fn alignment_in_bits(&self) -> u64 {
        self.as_type()
            .map(|t| t.type_info().alignment_in_bits)
            .unwrap_or(0)
    }
}
