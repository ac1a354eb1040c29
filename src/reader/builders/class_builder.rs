use std::io::BufRead;

use log::trace;

use crate::error::{ReadError, Result};
use crate::ir::nodes::types::{BaseSpec, ClassDecl, DataMember, MemberFunction, TypeInfo};
use crate::ir::nodes::{Decl, DeclRef, MemberClassTemplate, MemberFunctionTemplate, TypeNode};
use crate::reader::attrs::{parse_access, parse_flag, parse_signed, parse_size, parse_visibility};
use crate::reader::builders::template_builder::{build_class_tdecl, build_function_tdecl};
use crate::reader::builders::type_builder::build_type;
use crate::reader::builders::{build_function_decl, build_var_decl};
use crate::reader::context::{set_scope, ReadContext};
use crate::reader::cursor::XmlNode;

pub fn build_class_decl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "class-decl" {
        return Ok(None);
    }
    let name = node.attribute("name").unwrap_or("");
    let id = node.attribute("id");
    trace!("build_class_decl: name={name:?} id={id:?}");

    // A declaration-only class is a named placeholder: no members, no
    // layout, and its children (if any) are not parsed.
    if parse_flag(node.attribute("is-declaration-only")) {
        let mut class = ClassDecl::declaration_only(name);
        class.info.location = ctxt.read_location(node);
        let decl = Decl::new_ref(Decl::Type(TypeNode::Class(class)));
        ctxt.push_and_key_type(&decl, id, add_to_scope)?;
        return Ok(Some(decl));
    }

    // A definition carrying def-of-decl-id must point at an existing
    // declaration-only class; the strong edge keeps that node alive so
    // weak references taken before the replacement stay valid.
    let definition_of = match node.attribute("def-of-decl-id") {
        Some(decl_id) => {
            let prior = ctxt
                .get_type(decl_id)
                .ok_or_else(|| ReadError::BadDefinitionLink(decl_id.to_string()))?;
            if !prior
                .borrow()
                .as_class()
                .map(|c| c.is_declaration_only)
                .unwrap_or(false)
            {
                return Err(ReadError::BadDefinitionLink(decl_id.to_string()));
            }
            Some(prior)
        }
        None => None,
    };

    let mut class = ClassDecl::new(
        name,
        TypeInfo::new(
            parse_size(node.attribute("size-in-bits")),
            parse_size(node.attribute("alignment-in-bits")),
        ),
    );
    class.info.visibility = parse_visibility(node.attribute("visibility"));
    class.info.location = ctxt.read_location(node);
    class.definition_of = definition_of;
    let decl = Decl::new_ref(Decl::Type(TypeNode::Class(class)));

    if add_to_scope {
        ctxt.add_decl_to_scope(&decl);
    }
    ctxt.push_decl(decl.clone());
    let height = ctxt.stack_height();
    let result = build_class_members(ctxt, node, &decl);
    debug_assert_eq!(ctxt.stack_height(), height);
    ctxt.pop_decl();
    result?;

    // Key only after the members are built: a self-referential member
    // must resolve through the pre-existing declaration-only entry.
    if let Some(id) = id {
        if decl.borrow().as_class().unwrap().definition_of.is_some() {
            ctxt.key_replacement_of_type(id, &decl);
        } else {
            ctxt.key_type(id, &decl)?;
        }
    }
    Ok(Some(decl))
}

fn build_class_members<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    decl: &DeclRef,
) -> Result<()> {
    for child in &node.children {
        match child.name.as_str() {
            "base-class" => {
                let base = crate::reader::builders::type_builder::resolve_type_of(
                    ctxt,
                    child,
                    "base-class",
                )?;
                let spec = BaseSpec {
                    base,
                    access: parse_access(child.attribute("access")),
                    offset_in_bits: child
                        .attribute("layout-offset-in-bits")
                        .map(|v| parse_signed(Some(v)))
                        .unwrap_or(-1),
                    is_virtual: parse_flag(child.attribute("is-virtual")),
                };
                decl.borrow_mut().as_class_mut().unwrap().bases.push(spec);
            }
            "member-type" => {
                // The built type lands in the class through the usual
                // scope attachment; no explicit append here.
                for grandchild in &child.children {
                    if build_type(ctxt, grandchild, true)?.is_none() {
                        return Err(ReadError::UnknownElement {
                            parent: "member-type",
                            element: grandchild.name.clone(),
                        });
                    }
                }
            }
            "data-member" => {
                let access = parse_access(child.attribute("access"));
                let is_static = parse_flag(child.attribute("static"));
                let offset = child.attribute("layout-offset-in-bits");
                let is_laid_out = offset.is_some();
                let offset_in_bits = parse_size(offset);
                for grandchild in &child.children {
                    let var = build_var_decl(ctxt, grandchild, false)?.ok_or_else(|| {
                        ReadError::UnknownElement {
                            parent: "data-member",
                            element: grandchild.name.clone(),
                        }
                    })?;
                    set_scope(&var, decl);
                    decl.borrow_mut()
                        .as_class_mut()
                        .unwrap()
                        .data_members
                        .push(DataMember {
                            var,
                            access,
                            is_laid_out,
                            offset_in_bits,
                            is_static,
                        });
                }
            }
            "member-function" => {
                let access = parse_access(child.attribute("access"));
                let vtable_offset = parse_size(child.attribute("vtable-offset"));
                let is_static = parse_flag(child.attribute("static"));
                let is_constructor = parse_flag(child.attribute("constructor"));
                let is_destructor = parse_flag(child.attribute("destructor"));
                let is_const = parse_flag(child.attribute("const"));
                for grandchild in &child.children {
                    let function = build_function_decl(ctxt, grandchild, Some(decl), false)?
                        .ok_or_else(|| ReadError::UnknownElement {
                            parent: "member-function",
                            element: grandchild.name.clone(),
                        })?;
                    set_scope(&function, decl);
                    decl.borrow_mut()
                        .as_class_mut()
                        .unwrap()
                        .member_functions
                        .push(MemberFunction {
                            function,
                            access,
                            vtable_offset,
                            is_static,
                            is_constructor,
                            is_destructor,
                            is_const,
                        });
                }
            }
            "member-template" => {
                let access = parse_access(child.attribute("access"));
                let is_static = parse_flag(child.attribute("static"));
                let is_constructor = parse_flag(child.attribute("constructor"));
                let is_const = parse_flag(child.attribute("const"));
                for grandchild in &child.children {
                    if let Some(template) = build_function_tdecl(ctxt, grandchild, false)? {
                        set_scope(&template, decl);
                        decl.borrow_mut()
                            .as_class_mut()
                            .unwrap()
                            .member_function_templates
                            .push(MemberFunctionTemplate {
                                template,
                                access,
                                is_static,
                                is_constructor,
                                is_const,
                            });
                    } else if let Some(template) = build_class_tdecl(ctxt, grandchild, false)? {
                        set_scope(&template, decl);
                        decl.borrow_mut()
                            .as_class_mut()
                            .unwrap()
                            .member_class_templates
                            .push(MemberClassTemplate {
                                template,
                                access,
                                is_static,
                            });
                    } else {
                        return Err(ReadError::UnknownElement {
                            parent: "member-template",
                            element: grandchild.name.clone(),
                        });
                    }
                }
            }
            _ => {
                return Err(ReadError::UnknownElement {
                    parent: "class-decl",
                    element: child.name.clone(),
                })
            }
        }
    }
    Ok(())
}
