use crate::ir::translation_unit::TranslationUnit;

/// An ordered set of translation units describing a library or binary.
#[derive(Debug, Default)]
pub struct Corpus {
    pub path: String,
    pub translation_units: Vec<TranslationUnit>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            translation_units: Vec::new(),
        }
    }

    pub fn add_translation_unit(&mut self, tu: TranslationUnit) {
        self.translation_units.push(tu);
    }

    pub fn len(&self) -> usize {
        self.translation_units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translation_units.is_empty()
    }
}
