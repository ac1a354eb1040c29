//! The in-memory representation populated by the reader.

pub mod corpus;
pub mod location;
pub mod nodes;
pub mod translation_unit;

pub use corpus::Corpus;
pub use location::{Location, LocationManager};
pub use translation_unit::TranslationUnit;
