//! abixml: reader for XML-encoded ABI corpora.
//!
//! Deserializes `abi-instr` / `abi-corpus` documents (or ZIP archives of
//! them) into an in-memory representation of C/C++ declarations: types,
//! variables, functions, namespaces, classes and templates.

pub mod error;
pub mod ir;
pub mod reader;

pub use error::{ReadError, Result};
pub use ir::{Corpus, TranslationUnit};
