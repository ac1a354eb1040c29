//! The streaming reader: entry points, element dispatch, builders.
//!
//! An entry point constructs a [`ReadContext`], advances the cursor to
//! the document root, verifies it, then alternates between advancing
//! the cursor and dispatching on the current element name. Leaf-like
//! elements stream; anything with nested IR is expanded into a detached
//! subtree and handed to a builder.

pub mod archive;
pub mod attrs;
pub mod builders;
pub mod context;
pub mod cursor;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::error::{ReadError, Result};
use crate::ir::corpus::Corpus;
use crate::ir::nodes::{Decl, NamespaceDecl};
use crate::ir::translation_unit::TranslationUnit;
use crate::reader::attrs::parse_u32;
use crate::reader::builders::{
    build_class_decl, build_class_tdecl, build_enum_type_decl, build_function_decl,
    build_function_tdecl, build_pointer_type_def, build_qualified_type_def,
    build_reference_type_def, build_type_decl, build_typedef_decl, build_var_decl,
};
use crate::reader::context::ReadContext;
use crate::reader::cursor::{Cursor, XmlElement, XmlEvent};

pub use archive::{corpus_from_archive, read_corpus_from_archive};

// ---------------------------------------------------------------------------
// Translation-unit entry points
// ---------------------------------------------------------------------------

/// Fill `tu` from an `abi-instr` document in `input`. On failure the
/// unit is reset to empty; no partial IR is surfaced.
pub fn read_translation_unit_from_buffer(input: &str, tu: &mut TranslationUnit) -> Result<()> {
    let mut ctxt = ReadContext::new(Cursor::from_reader(input.as_bytes()));
    read_translation_unit_from_input(&mut ctxt, tu)
}

pub fn translation_unit_from_buffer(input: &str) -> Result<TranslationUnit> {
    let mut tu = TranslationUnit::new();
    read_translation_unit_from_buffer(input, &mut tu)?;
    Ok(tu)
}

pub fn read_translation_unit_from_file(
    path: impl AsRef<Path>,
    tu: &mut TranslationUnit,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if tu.path.is_empty() {
        // The path attribute, when present, overrides this seed.
        tu.path = path.display().to_string();
    }
    let mut ctxt = ReadContext::new(Cursor::from_reader(BufReader::new(file)));
    read_translation_unit_from_input(&mut ctxt, tu)
}

pub fn translation_unit_from_file(path: impl AsRef<Path>) -> Result<TranslationUnit> {
    let mut tu = TranslationUnit::new();
    read_translation_unit_from_file(path, &mut tu)?;
    Ok(tu)
}

pub fn read_translation_unit_from_reader<R: BufRead>(
    input: R,
    tu: &mut TranslationUnit,
) -> Result<()> {
    let mut ctxt = ReadContext::new(Cursor::from_reader(input));
    read_translation_unit_from_input(&mut ctxt, tu)
}

pub fn translation_unit_from_reader<R: BufRead>(input: R) -> Result<TranslationUnit> {
    let mut tu = TranslationUnit::new();
    read_translation_unit_from_reader(input, &mut tu)?;
    Ok(tu)
}

// ---------------------------------------------------------------------------
// Corpus entry points
// ---------------------------------------------------------------------------

/// Fill `corpus` from an `abi-corpus` document in `input`. On failure
/// the corpus is reset; no partial result is surfaced.
pub fn read_corpus_from_buffer(input: &str, corpus: &mut Corpus) -> Result<()> {
    let mut ctxt = ReadContext::new(Cursor::from_reader(input.as_bytes()));
    read_corpus_from_input(&mut ctxt, corpus)
}

pub fn corpus_from_buffer(input: &str) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    read_corpus_from_buffer(input, &mut corpus)?;
    Ok(corpus)
}

pub fn read_corpus_from_file(path: impl AsRef<Path>, corpus: &mut Corpus) -> Result<()> {
    let file = File::open(path.as_ref())?;
    let mut ctxt = ReadContext::new(Cursor::from_reader(BufReader::new(file)));
    read_corpus_from_input(&mut ctxt, corpus)
}

pub fn corpus_from_file(path: impl AsRef<Path>) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    read_corpus_from_file(path, &mut corpus)?;
    Ok(corpus)
}

pub fn read_corpus_from_reader<R: BufRead>(input: R, corpus: &mut Corpus) -> Result<()> {
    let mut ctxt = ReadContext::new(Cursor::from_reader(input));
    read_corpus_from_input(&mut ctxt, corpus)
}

pub fn corpus_from_reader<R: BufRead>(input: R) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    read_corpus_from_reader(input, &mut corpus)?;
    Ok(corpus)
}

// ---------------------------------------------------------------------------
// Document loops
// ---------------------------------------------------------------------------

fn read_translation_unit_from_input<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    tu: &mut TranslationUnit,
) -> Result<()> {
    let result = (|| {
        let (root, is_empty) = expect_root(ctxt, "abi-instr")?;
        read_translation_unit_body(ctxt, tu, &root, is_empty)
    })();
    if result.is_err() {
        *tu = TranslationUnit::new();
    }
    result
}

fn read_corpus_from_input<R: BufRead>(ctxt: &mut ReadContext<R>, corpus: &mut Corpus) -> Result<()> {
    let result = read_corpus_body(ctxt, corpus);
    if result.is_err() {
        *corpus = Corpus::new();
    }
    result
}

/// Advance to the document root and require its tag.
fn expect_root<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    expected: &'static str,
) -> Result<(XmlElement, bool)> {
    let (root, is_empty) = match ctxt.cursor_mut().next_event()? {
        XmlEvent::Start(el) => (el, false),
        XmlEvent::Empty(el) => (el, true),
        XmlEvent::End(name) => {
            return Err(ReadError::UnexpectedRoot {
                expected,
                found: name,
            })
        }
        XmlEvent::Eof => {
            return Err(ReadError::UnexpectedRoot {
                expected,
                found: String::new(),
            })
        }
    };
    if root.name != expected {
        return Err(ReadError::UnexpectedRoot {
            expected,
            found: root.name,
        });
    }
    Ok((root, is_empty))
}

fn read_translation_unit_body<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    tu: &mut TranslationUnit,
    root: &XmlElement,
    is_empty: bool,
) -> Result<()> {
    if let Some(size) = root.attribute("address-size") {
        tu.address_size = Some(parse_u32(Some(size)));
    }
    match root.attribute("path") {
        Some(path) if !path.is_empty() => tu.path = path.to_string(),
        _ => {}
    }
    debug!("reading translation unit path={:?}", tu.path);

    ctxt.begin_translation_unit(tu);
    if is_empty {
        ctxt.finish_translation_unit();
        return Ok(());
    }
    loop {
        match ctxt.cursor_mut().next_event()? {
            XmlEvent::Start(element) => handle_element(ctxt, element, false)?,
            XmlEvent::Empty(element) => handle_element(ctxt, element, true)?,
            XmlEvent::End(name) => {
                if name == "abi-instr" {
                    break;
                }
                // Expanded elements consume their own end event, so the
                // only ends the loop sees close streamed namespaces.
                debug_assert_eq!(name, "namespace-decl");
                ctxt.pop_decl();
            }
            XmlEvent::Eof => break,
        }
    }
    ctxt.finish_translation_unit();
    Ok(())
}

fn read_corpus_body<R: BufRead>(ctxt: &mut ReadContext<R>, corpus: &mut Corpus) -> Result<()> {
    let (root, is_empty) = expect_root(ctxt, "abi-corpus")?;
    if let Some(path) = root.attribute("path") {
        corpus.path = path.to_string();
    }
    debug!("reading corpus path={:?}", corpus.path);
    if is_empty {
        return Ok(());
    }
    loop {
        match ctxt.cursor_mut().next_event()? {
            XmlEvent::Start(el) if el.name == "abi-instr" => {
                let mut tu = TranslationUnit::new();
                read_translation_unit_body(ctxt, &mut tu, &el, false)?;
                corpus.add_translation_unit(tu);
            }
            XmlEvent::Empty(el) if el.name == "abi-instr" => {
                let mut tu = TranslationUnit::new();
                read_translation_unit_body(ctxt, &mut tu, &el, true)?;
                corpus.add_translation_unit(tu);
            }
            XmlEvent::Start(el) | XmlEvent::Empty(el) => {
                return Err(ReadError::UnknownElement {
                    parent: "abi-corpus",
                    element: el.name,
                })
            }
            XmlEvent::End(name) => {
                if name == "abi-corpus" {
                    break;
                }
            }
            XmlEvent::Eof => break,
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Element dispatch
// ---------------------------------------------------------------------------

fn handle_element<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    element: XmlElement,
    is_empty: bool,
) -> Result<()> {
    trace!(
        "element <{}> at depth {}",
        element.name,
        ctxt.cursor_mut().depth()
    );
    match element.name.as_str() {
        "namespace-decl" => handle_namespace_decl(ctxt, &element, is_empty),
        "type-decl" | "qualified-type-def" | "pointer-type-def" | "reference-type-def"
        | "enum-decl" | "typedef-decl" | "var-decl" | "function-decl" | "class-decl"
        | "function-template-decl" | "class-template-decl" => {
            let node = ctxt.cursor_mut().expand_subtree(element, is_empty)?;
            let built = match node.name.as_str() {
                "type-decl" => build_type_decl(ctxt, &node, true)?,
                "qualified-type-def" => build_qualified_type_def(ctxt, &node, true)?,
                "pointer-type-def" => build_pointer_type_def(ctxt, &node, true)?,
                "reference-type-def" => build_reference_type_def(ctxt, &node, true)?,
                "enum-decl" => build_enum_type_decl(ctxt, &node, true)?,
                "typedef-decl" => build_typedef_decl(ctxt, &node, true)?,
                "var-decl" => build_var_decl(ctxt, &node, true)?,
                "function-decl" => build_function_decl(ctxt, &node, None, true)?,
                "class-decl" => build_class_decl(ctxt, &node, true)?,
                "function-template-decl" => build_function_tdecl(ctxt, &node, true)?,
                "class-template-decl" => build_class_tdecl(ctxt, &node, true)?,
                _ => None,
            };
            // A builder refusing its own tag would leave the element
            // silently dropped; fail instead.
            if built.is_none() {
                return Err(ReadError::UnknownElement {
                    parent: "abi-instr",
                    element: node.name,
                });
            }
            Ok(())
        }
        _ => Err(ReadError::UnknownElement {
            parent: "abi-instr",
            element: element.name,
        }),
    }
}

/// Namespaces are the one streamed scope: the declaration is attached
/// and pushed, and the matching end event pops it.
fn handle_namespace_decl<R: BufRead>(
    ctxt: &mut ReadContext<R>,
    element: &XmlElement,
    is_empty: bool,
) -> Result<()> {
    let name = element.attribute("name").unwrap_or("");
    let namespace = Decl::new_ref(Decl::Namespace(NamespaceDecl::new(name)));
    ctxt.add_decl_to_scope(&namespace);
    if !is_empty {
        ctxt.push_decl(namespace);
    }
    Ok(())
}
