use std::fs::File;
use std::io::Write;

use abixml::{reader, Corpus};
use zip::write::FileOptions;
use zip::CompressionMethod;

use super::global_members;

#[test]
fn corpus_document_collects_translation_units() {
    let corpus = reader::corpus_from_buffer(
        r#"<abi-corpus path="libx.so">
             <abi-instr path="a.cc" address-size="8"/>
             <abi-instr path="b.cc">
               <type-decl name="int" id="t1"/>
             </abi-instr>
           </abi-corpus>"#,
    )
    .expect("parse error");
    assert_eq!(corpus.path, "libx.so");
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.translation_units[0].path, "a.cc");
    assert_eq!(corpus.translation_units[0].address_size, Some(8));
    assert!(corpus.translation_units[0].is_empty());
    assert_eq!(corpus.translation_units[1].path, "b.cc");
    assert_eq!(global_members(&corpus.translation_units[1]).len(), 1);
}

#[test]
fn symbol_tables_reset_between_translation_units() {
    // Both units key "t1"; the second also proves the resolution is
    // against its own entry.
    let corpus = reader::corpus_from_buffer(
        r#"<abi-corpus>
             <abi-instr>
               <type-decl name="int" id="t1"/>
             </abi-instr>
             <abi-instr>
               <type-decl name="char" id="t1"/>
               <typedef-decl name="A" type-id="t1" id="t2"/>
             </abi-instr>
           </abi-corpus>"#,
    )
    .expect("parse error");
    assert_eq!(corpus.len(), 2);
    let members = global_members(&corpus.translation_units[1]);
    assert_eq!(members[0].borrow().name(), "char");
    assert_eq!(members[1].borrow().name(), "A");
}

#[test]
fn unknown_corpus_child_is_rejected() {
    assert!(reader::corpus_from_buffer("<abi-corpus><bogus/></abi-corpus>").is_err());
}

#[test]
fn empty_corpus_parses() {
    let corpus = reader::corpus_from_buffer("<abi-corpus/>").expect("parse error");
    assert!(corpus.is_empty());
}

fn write_archive(path: &std::path::Path, entries: &[(&str, &str)]) {
    let file = File::create(path).expect("create archive");
    let mut writer = zip::ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, content) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(content.as_bytes()).expect("write entry");
    }
    writer.finish().expect("finish archive");
}

#[test]
fn archive_entries_become_translation_units() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("corpus.zip");
    write_archive(
        &path,
        &[
            ("one.xml", r#"<abi-instr path="/src/one.cc" address-size="8"/>"#),
            ("two.xml", "<abi-instr/>"),
        ],
    );

    let mut corpus = Corpus::new();
    let read = reader::read_corpus_from_archive(&path, &mut corpus).expect("archive read");
    assert_eq!(read, 2);
    assert_eq!(corpus.len(), 2);
    // The path attribute wins; the entry name is only a fallback.
    assert_eq!(corpus.translation_units[0].path, "/src/one.cc");
    assert_eq!(corpus.translation_units[0].address_size, Some(8));
    assert_eq!(corpus.translation_units[1].path, "two.xml");
}

#[test]
fn archive_skips_entries_that_fail_to_parse() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("corpus.zip");
    write_archive(
        &path,
        &[
            ("bad.xml", "<not-an-abi-instr/>"),
            ("good.xml", r#"<abi-instr path="ok.cc"/>"#),
        ],
    );

    let mut corpus = Corpus::new();
    let read = reader::read_corpus_from_archive(&path, &mut corpus).expect("archive read");
    assert_eq!(read, 1);
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.translation_units[0].path, "ok.cc");
}

#[test]
fn missing_archive_is_an_error() {
    let mut corpus = Corpus::new();
    assert!(reader::read_corpus_from_archive("/nonexistent/corpus.zip", &mut corpus).is_err());
}
