use std::io::BufRead;

use log::trace;

use crate::error::{ReadError, Result};
use crate::ir::nodes::types::{TypeDecl, TypeInfo};
use crate::ir::nodes::{
    ClassTdecl, Decl, DeclRef, FunctionTdecl, NonTypeTparameter, TemplateParameter,
    TemplateTparameter, TypeComposition, TypeNode, TypeTparameter,
};
use crate::reader::attrs::{parse_binding, parse_visibility};
use crate::reader::builders::build_class_decl;
use crate::reader::builders::function_builder::build_function_decl;
use crate::reader::builders::type_builder::{build_type, resolve_type_of};
use crate::reader::context::ReadContext;
use crate::reader::cursor::XmlNode;

pub fn build_function_tdecl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "function-template-decl" {
        return Ok(None);
    }
    trace!("build_function_tdecl: id={:?}", node.attribute("id"));
    let mut template = FunctionTdecl::new();
    template.info.visibility = parse_visibility(node.attribute("visibility"));
    template.info.binding = parse_binding(node.attribute("binding"));
    template.info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::FunctionTemplate(template));

    if add_to_scope {
        ctxt.add_decl_to_scope(&decl);
    }
    if let Some(id) = node.attribute("id") {
        ctxt.key_fn_template(id, &decl)?;
    }
    ctxt.push_decl(decl.clone());
    let height = ctxt.stack_height();
    let result = build_function_tdecl_children(ctxt, node, &decl);
    debug_assert_eq!(ctxt.stack_height(), height);
    ctxt.pop_decl();
    result?;
    Ok(Some(decl))
}

fn build_function_tdecl_children<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    decl: &DeclRef,
) -> Result<()> {
    let mut index = 0;
    for child in &node.children {
        if let Some(parameter) = build_template_parameter(ctxt, child, index)? {
            decl.borrow_mut()
                .as_function_template_mut()
                .unwrap()
                .parameters
                .push(parameter);
            index += 1;
        } else if let Some(pattern) = build_function_decl(ctxt, child, None, false)? {
            decl.borrow_mut()
                .as_function_template_mut()
                .unwrap()
                .pattern = Some(pattern);
        } else {
            return Err(ReadError::UnknownElement {
                parent: "function-template-decl",
                element: child.name.clone(),
            });
        }
    }
    Ok(())
}

pub fn build_class_tdecl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "class-template-decl" {
        return Ok(None);
    }
    trace!("build_class_tdecl: id={:?}", node.attribute("id"));
    let mut template = ClassTdecl::new();
    template.info.visibility = parse_visibility(node.attribute("visibility"));
    template.info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::ClassTemplate(template));

    if add_to_scope {
        ctxt.add_decl_to_scope(&decl);
    }
    if let Some(id) = node.attribute("id") {
        ctxt.key_class_template(id, &decl)?;
    }
    ctxt.push_decl(decl.clone());
    let height = ctxt.stack_height();
    let result = build_class_tdecl_children(ctxt, node, &decl);
    debug_assert_eq!(ctxt.stack_height(), height);
    ctxt.pop_decl();
    result?;
    Ok(Some(decl))
}

fn build_class_tdecl_children<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    decl: &DeclRef,
) -> Result<()> {
    let mut index = 0;
    for child in &node.children {
        if let Some(parameter) = build_template_parameter(ctxt, child, index)? {
            decl.borrow_mut()
                .as_class_template_mut()
                .unwrap()
                .parameters
                .push(parameter);
            index += 1;
        } else if let Some(pattern) = build_class_decl(ctxt, child, false)? {
            decl.borrow_mut().as_class_template_mut().unwrap().pattern = Some(pattern);
        } else {
            return Err(ReadError::UnknownElement {
                parent: "class-template-decl",
                element: child.name.clone(),
            });
        }
    }
    Ok(())
}

/// Build one template parameter, trying the four kinds in a fixed
/// order. `index` is the parameter's position in its list; the caller
/// only advances it when a parameter was actually built.
pub fn build_template_parameter<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    index: usize,
) -> Result<Option<TemplateParameter>> {
    match node.name.as_str() {
        "template-type-parameter" => {
            // The parameter doubles as a type: key it so later
            // references (compositions, the pattern) resolve to it.
            let name = node.attribute("name").unwrap_or("");
            let mut ty = TypeDecl::new(name, TypeInfo::default());
            ty.info.location = ctxt.read_location(node);
            let ty = Decl::new_ref(Decl::Type(TypeNode::Basic(ty)));
            if let Some(id) = node.attribute("id") {
                ctxt.key_type(id, &ty)?;
            }
            Ok(Some(TemplateParameter::Type(TypeTparameter { index, ty })))
        }
        "template-non-type-parameter" => {
            let ty = resolve_type_of(ctxt, node, "template-non-type-parameter")?;
            Ok(Some(TemplateParameter::NonType(NonTypeTparameter {
                index,
                name: node.attribute("name").unwrap_or("").to_string(),
                ty,
            })))
        }
        "template-template-parameter" => {
            let mut parameters = Vec::new();
            let mut sub_index = 0;
            for child in &node.children {
                match build_template_parameter(ctxt, child, sub_index)? {
                    Some(parameter) => {
                        parameters.push(parameter);
                        sub_index += 1;
                    }
                    None => {
                        return Err(ReadError::UnknownElement {
                            parent: "template-template-parameter",
                            element: child.name.clone(),
                        })
                    }
                }
            }
            Ok(Some(TemplateParameter::Template(TemplateTparameter {
                index,
                name: node.attribute("name").unwrap_or("").to_string(),
                parameters,
            })))
        }
        "template-parameter-type-composition" => {
            let child = node.children.first().ok_or(ReadError::MissingChild {
                element: "template-parameter-type-composition",
                child: "composed type",
            })?;
            let composed =
                build_type(ctxt, child, false)?.ok_or_else(|| ReadError::UnknownElement {
                    parent: "template-parameter-type-composition",
                    element: child.name.clone(),
                })?;
            Ok(Some(TemplateParameter::Composition(TypeComposition {
                index,
                composed,
            })))
        }
        _ => Ok(None),
    }
}
