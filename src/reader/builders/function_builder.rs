use std::io::BufRead;
use std::rc::Rc;

use log::trace;

use crate::error::{ReadError, Result};
use crate::ir::nodes::types::{FunctionType, Parameter};
use crate::ir::nodes::{Decl, DeclRef, FunctionDecl};
use crate::reader::attrs::{parse_binding, parse_flag, parse_visibility};
use crate::reader::builders::type_builder::resolve_type_of;
use crate::reader::context::ReadContext;
use crate::reader::cursor::XmlNode;

/// Build a function declaration. When `class` is given the function is a
/// method of that class and its type becomes a method type.
pub fn build_function_decl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    class: Option<&DeclRef>,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "function-decl" {
        return Ok(None);
    }
    let name = node.attribute("name").unwrap_or("");
    trace!("build_function_decl: name={name:?} method={}", class.is_some());
    let mut fn_type = match class {
        Some(class) => FunctionType::method_of(Rc::downgrade(class)),
        None => FunctionType::new(),
    };
    for child in &node.children {
        match child.name.as_str() {
            "parameter" => fn_type.parameters.push(build_parameter(ctxt, child)?),
            "return" => {
                fn_type.return_type = Some(resolve_type_of(ctxt, child, "return")?);
            }
            _ => {
                return Err(ReadError::UnknownElement {
                    parent: "function-decl",
                    element: child.name.clone(),
                })
            }
        }
    }
    let mut function = FunctionDecl::new(name, fn_type);
    function.declared_inline = parse_flag(node.attribute("declared-inline"));
    function.info.mangled_name = node
        .attribute("mangled-name")
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    function.info.visibility = parse_visibility(node.attribute("visibility"));
    function.info.binding = parse_binding(node.attribute("binding"));
    function.info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Function(function));
    if add_to_scope {
        ctxt.add_decl_to_scope(&decl);
    }
    Ok(Some(decl))
}

/// Every parameter has a resolved type except the variadic ellipsis.
fn build_parameter<R: BufRead>(ctxt: &ReadContext<R>, node: &XmlNode) -> Result<Parameter> {
    let is_variadic = parse_flag(node.attribute("is-variadic"));
    let ty = if is_variadic {
        None
    } else {
        Some(resolve_type_of(ctxt, node, "parameter")?)
    };
    Ok(Parameter {
        name: node.attribute("name").unwrap_or("").to_string(),
        ty,
        is_variadic,
        is_artificial: parse_flag(node.attribute("is-artificial")),
        location: ctxt.read_location(node),
    })
}
