use std::io::BufRead;

use log::trace;

use crate::error::{ReadError, Result};
use crate::ir::nodes::types::{
    EnumTypeDecl, Enumerator, PointerTypeDef, QualifiedTypeDef, ReferenceTypeDef, TypeDecl,
    TypedefDecl,
};
use crate::ir::nodes::{CvQualifiers, Decl, DeclInfo, DeclRef, TypeInfo, TypeNode};
use crate::reader::attrs::{parse_flag, parse_reference_kind, parse_signed, parse_size};
use crate::reader::builders::build_class_decl;
use crate::reader::context::ReadContext;
use crate::reader::cursor::XmlNode;

/// Build any type kind from `node`, trying the builders in a fixed
/// order; the first one that recognizes the tag wins.
pub fn build_type<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if let Some(t) = build_type_decl(ctxt, node, add_to_scope)? {
        return Ok(Some(t));
    }
    if let Some(t) = build_qualified_type_def(ctxt, node, add_to_scope)? {
        return Ok(Some(t));
    }
    if let Some(t) = build_pointer_type_def(ctxt, node, add_to_scope)? {
        return Ok(Some(t));
    }
    if let Some(t) = build_reference_type_def(ctxt, node, add_to_scope)? {
        return Ok(Some(t));
    }
    if let Some(t) = build_enum_type_decl(ctxt, node, add_to_scope)? {
        return Ok(Some(t));
    }
    if let Some(t) = build_typedef_decl(ctxt, node, add_to_scope)? {
        return Ok(Some(t));
    }
    if let Some(t) = build_class_decl(ctxt, node, add_to_scope)? {
        return Ok(Some(t));
    }
    Ok(None)
}

fn type_info_of(node: &XmlNode) -> TypeInfo {
    TypeInfo::new(
        parse_size(node.attribute("size-in-bits")),
        parse_size(node.attribute("alignment-in-bits")),
    )
}

pub fn build_type_decl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "type-decl" {
        return Ok(None);
    }
    let name = node.attribute("name").unwrap_or("");
    trace!("build_type_decl: name={name:?}");
    let mut ty = TypeDecl::new(name, type_info_of(node));
    ty.info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Type(TypeNode::Basic(ty)));
    ctxt.push_and_key_type(&decl, node.attribute("id"), add_to_scope)?;
    Ok(Some(decl))
}

pub fn build_qualified_type_def<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "qualified-type-def" {
        return Ok(None);
    }
    let underlying = resolve_type_of(ctxt, node, "qualified-type-def")?;
    let mut cv = CvQualifiers::NONE;
    if parse_flag(node.attribute("const")) {
        cv |= CvQualifiers::CONST;
    }
    if parse_flag(node.attribute("volatile")) {
        cv |= CvQualifiers::VOLATILE;
    }
    let mut info = DeclInfo::default();
    info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Type(TypeNode::Qualified(QualifiedTypeDef {
        info,
        type_info: type_info_of(node),
        underlying,
        cv,
    })));
    ctxt.push_and_key_type(&decl, node.attribute("id"), add_to_scope)?;
    Ok(Some(decl))
}

pub fn build_pointer_type_def<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "pointer-type-def" {
        return Ok(None);
    }
    let pointee = resolve_type_of(ctxt, node, "pointer-type-def")?;
    let mut info = DeclInfo::default();
    info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Type(TypeNode::Pointer(PointerTypeDef {
        info,
        type_info: type_info_of(node),
        pointee,
    })));
    ctxt.push_and_key_type(&decl, node.attribute("id"), add_to_scope)?;
    Ok(Some(decl))
}

pub fn build_reference_type_def<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "reference-type-def" {
        return Ok(None);
    }
    let referent = resolve_type_of(ctxt, node, "reference-type-def")?;
    let mut info = DeclInfo::default();
    info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Type(TypeNode::Reference(ReferenceTypeDef {
        info,
        type_info: type_info_of(node),
        referent,
        kind: parse_reference_kind(node.attribute("kind")),
    })));
    ctxt.push_and_key_type(&decl, node.attribute("id"), add_to_scope)?;
    Ok(Some(decl))
}

pub fn build_enum_type_decl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "enum-decl" {
        return Ok(None);
    }
    let name = node.attribute("name").unwrap_or("");
    trace!("build_enum_type_decl: name={name:?}");
    let mut underlying = None;
    let mut enumerators = Vec::new();
    for child in &node.children {
        match child.name.as_str() {
            "underlying-type" => {
                underlying = Some(resolve_type_of(ctxt, child, "underlying-type")?);
            }
            "enumerator" => {
                let name = child.attribute("name").ok_or(ReadError::MissingAttribute {
                    element: "enumerator",
                    attribute: "name",
                })?;
                enumerators.push(Enumerator {
                    name: name.to_string(),
                    value: parse_signed(child.attribute("value")),
                });
            }
            _ => {
                return Err(ReadError::UnknownElement {
                    parent: "enum-decl",
                    element: child.name.clone(),
                })
            }
        }
    }
    let underlying = underlying.ok_or(ReadError::MissingChild {
        element: "enum-decl",
        child: "underlying-type",
    })?;
    let mut info = DeclInfo::named(name);
    info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Type(TypeNode::Enum(EnumTypeDecl {
        info,
        type_info: type_info_of(node),
        underlying,
        enumerators,
    })));
    ctxt.push_and_key_type(&decl, node.attribute("id"), add_to_scope)?;
    Ok(Some(decl))
}

pub fn build_typedef_decl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "typedef-decl" {
        return Ok(None);
    }
    let name = node.attribute("name").unwrap_or("");
    trace!("build_typedef_decl: name={name:?}");
    let underlying = resolve_type_of(ctxt, node, "typedef-decl")?;
    let mut info = DeclInfo::named(name);
    info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Type(TypeNode::Typedef(TypedefDecl {
        info,
        type_info: type_info_of(node),
        underlying,
    })));
    ctxt.push_and_key_type(&decl, node.attribute("id"), add_to_scope)?;
    Ok(Some(decl))
}

/// Resolve the `type-id` attribute of `node`, which must be present.
pub(crate) fn resolve_type_of<R: BufRead>(
    ctxt: &ReadContext<R>,
    node: &XmlNode,
    element: &'static str,
) -> Result<DeclRef> {
    let id = node.attribute("type-id").ok_or(ReadError::MissingAttribute {
        element,
        attribute: "type-id",
    })?;
    ctxt.resolve_type(id)
}
