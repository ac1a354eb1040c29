//! Reading a corpus from a ZIP archive: one `abi-instr` document per
//! entry, in archive order. Entry names seed translation-unit paths.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use zip::ZipArchive;

use crate::error::Result;
use crate::ir::corpus::Corpus;
use crate::ir::translation_unit::TranslationUnit;
use crate::reader::read_translation_unit_from_buffer;

/// Read every entry of the ZIP at `path` as a translation unit and
/// append the ones that parse. Returns how many were read; failing to
/// open the archive is an error, a failing entry is skipped.
pub fn read_corpus_from_archive(path: impl AsRef<Path>, corpus: &mut Corpus) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    debug!("reading corpus archive {:?}: {} entries", path, archive.len());

    let mut read = 0;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        let mut content = String::with_capacity(entry.size() as usize);
        entry.read_to_string(&mut content)?;

        let mut tu = TranslationUnit::with_path(name.clone());
        match read_translation_unit_from_buffer(&content, &mut tu) {
            Ok(()) => {
                corpus.add_translation_unit(tu);
                read += 1;
            }
            Err(error) => warn!("skipping archive entry {name:?}: {error}"),
        }
    }
    Ok(read)
}

pub fn corpus_from_archive(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let mut corpus = Corpus::with_path(path.display().to_string());
    read_corpus_from_archive(path, &mut corpus)?;
    Ok(corpus)
}
