use std::io::BufRead;

use log::trace;

use crate::error::Result;
use crate::ir::nodes::{Decl, DeclRef, VarDecl};
use crate::reader::attrs::{parse_binding, parse_visibility};
use crate::reader::builders::type_builder::resolve_type_of;
use crate::reader::context::ReadContext;
use crate::reader::cursor::XmlNode;

pub fn build_var_decl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    node: &XmlNode,
    add_to_scope: bool,
) -> Result<Option<DeclRef>> {
    if node.name != "var-decl" {
        return Ok(None);
    }
    let name = node.attribute("name").unwrap_or("");
    trace!("build_var_decl: name={name:?}");
    let ty = resolve_type_of(ctxt, node, "var-decl")?;
    let mut var = VarDecl::new(name, ty);
    var.info.mangled_name = node
        .attribute("mangled-name")
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    var.info.visibility = parse_visibility(node.attribute("visibility"));
    var.info.binding = parse_binding(node.attribute("binding"));
    var.info.location = ctxt.read_location(node);
    let decl = Decl::new_ref(Decl::Var(var));
    if add_to_scope {
        ctxt.add_decl_to_scope(&decl);
    }
    Ok(Some(decl))
}
