//! Per-parse mutable state.

use std::collections::HashMap;
use std::io::BufRead;
use std::rc::Rc;

use crate::error::{ReadError, Result};
use crate::ir::location::{Location, LocationManager};
use crate::ir::nodes::DeclRef;
use crate::ir::translation_unit::TranslationUnit;
use crate::reader::attrs::parse_u32;
use crate::reader::cursor::{Cursor, XmlNode};

/// The state one parse threads through handlers and builders: the XML
/// cursor, three id-keyed symbol tables (types, function templates,
/// class templates) and the stack of declarations forming the lexical
/// path from the global scope down to the node being built.
pub struct ReadContext<R: BufRead> {
    cursor: Cursor<R>,
    types: HashMap<String, DeclRef>,
    fn_templates: HashMap<String, DeclRef>,
    class_templates: HashMap<String, DeclRef>,
    scope_stack: Vec<DeclRef>,
    locations: LocationManager,
}

impl<R: BufRead> ReadContext<R> {
    pub fn new(cursor: Cursor<R>) -> Self {
        Self {
            cursor,
            types: HashMap::new(),
            fn_templates: HashMap::new(),
            class_templates: HashMap::new(),
            scope_stack: Vec::new(),
            locations: LocationManager::new(),
        }
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<R> {
        &mut self.cursor
    }

    /// Reset per-translation-unit state: ids are only unique within one
    /// `abi-instr`, so all three tables start empty, and the scope stack
    /// starts with the unit's global scope.
    pub fn begin_translation_unit(&mut self, tu: &TranslationUnit) {
        self.types.clear();
        self.fn_templates.clear();
        self.class_templates.clear();
        self.scope_stack.clear();
        self.locations = tu.locations().clone();
        self.scope_stack.push(tu.global_scope().clone());
    }

    pub fn finish_translation_unit(&mut self) {
        let global = self.pop_decl();
        debug_assert!(global.is_some(), "global scope missing from the stack");
        debug_assert!(
            self.scope_stack.is_empty(),
            "scope stack not empty at end of translation unit"
        );
    }

    /// The nearest enclosing scope: the top of the stack if it is itself
    /// a scope, else the top's own enclosing scope.
    pub fn current_scope(&self) -> Option<DeclRef> {
        let top = self.scope_stack.last()?;
        if top.borrow().is_scope() {
            return Some(top.clone());
        }
        top.borrow().scope()
    }

    pub fn push_decl(&mut self, decl: DeclRef) {
        self.scope_stack.push(decl);
    }

    pub fn pop_decl(&mut self) -> Option<DeclRef> {
        self.scope_stack.pop()
    }

    pub fn stack_height(&self) -> usize {
        self.scope_stack.len()
    }

    /// Attach `decl` as a member of the current scope and point its
    /// back-reference at it. Returns false when there is no scope.
    pub fn add_decl_to_scope(&self, decl: &DeclRef) -> bool {
        let Some(scope) = self.current_scope() else {
            return false;
        };
        set_scope(decl, &scope);
        scope.borrow_mut().push_member(decl.clone());
        true
    }

    pub fn get_type(&self, id: &str) -> Option<DeclRef> {
        self.types.get(id).cloned()
    }

    /// Resolve a `type-id`, failing the parse when it is unknown.
    pub fn resolve_type(&self, id: &str) -> Result<DeclRef> {
        self.get_type(id)
            .ok_or_else(|| ReadError::UnresolvedTypeId(id.to_string()))
    }

    pub fn key_type(&mut self, id: &str, decl: &DeclRef) -> Result<()> {
        if self.types.contains_key(id) {
            return Err(ReadError::DuplicateId(id.to_string()));
        }
        self.types.insert(id.to_string(), decl.clone());
        Ok(())
    }

    /// Overwrite whatever is keyed at `id`; used when a class definition
    /// replaces its declaration-only predecessor.
    pub fn key_replacement_of_type(&mut self, id: &str, decl: &DeclRef) {
        self.types.insert(id.to_string(), decl.clone());
    }

    /// Attach to the current scope (when requested) and key the type's
    /// id in one step; leaf type builders all end with this.
    pub fn push_and_key_type(
        &mut self,
        decl: &DeclRef,
        id: Option<&str>,
        add_to_scope: bool,
    ) -> Result<()> {
        if add_to_scope {
            self.add_decl_to_scope(decl);
        }
        if let Some(id) = id {
            self.key_type(id, decl)?;
        }
        Ok(())
    }

    pub fn get_fn_template(&self, id: &str) -> Option<DeclRef> {
        self.fn_templates.get(id).cloned()
    }

    pub fn key_fn_template(&mut self, id: &str, decl: &DeclRef) -> Result<()> {
        if self.fn_templates.contains_key(id) {
            return Err(ReadError::DuplicateId(id.to_string()));
        }
        self.fn_templates.insert(id.to_string(), decl.clone());
        Ok(())
    }

    pub fn get_class_template(&self, id: &str) -> Option<DeclRef> {
        self.class_templates.get(id).cloned()
    }

    pub fn key_class_template(&mut self, id: &str, decl: &DeclRef) -> Result<()> {
        if self.class_templates.contains_key(id) {
            return Err(ReadError::DuplicateId(id.to_string()));
        }
        self.class_templates.insert(id.to_string(), decl.clone());
        Ok(())
    }

    /// Read the location attributes of `node` into the unit's location
    /// table. A missing or empty `filepath` yields no location; any
    /// line/column present alongside it are discarded.
    pub fn read_location(&self, node: &XmlNode) -> Option<Location> {
        let file = node.attribute("filepath")?;
        if file.is_empty() {
            return None;
        }
        let line = parse_u32(node.attribute("line"));
        let column = parse_u32(node.attribute("column"));
        Some(self.locations.new_location(file, line, column))
    }
}

/// Point `decl`'s scope back-reference at `scope` without making it a
/// scope member; class data members and member functions are recorded
/// in their own lists.
pub fn set_scope(decl: &DeclRef, scope: &DeclRef) {
    if let Some(info) = decl.borrow_mut().decl_info_mut() {
        info.scope = Rc::downgrade(scope);
    }
}
