use abixml::{reader, ReadError};

use super::parse;

#[test]
fn minimal_unit_carries_path_and_address_size() {
    let tu = parse(r#"<abi-instr path="/tmp/a.cc" address-size="8"/>"#);
    assert_eq!(tu.path, "/tmp/a.cc");
    assert_eq!(tu.address_size, Some(8));
    assert!(tu.is_empty());
}

#[test]
fn root_only_document_yields_an_empty_global_scope() {
    let tu = parse("<abi-instr></abi-instr>");
    assert!(tu.is_empty());
    assert_eq!(tu.path, "");
    assert_eq!(tu.address_size, None);
}

#[test]
fn wrong_root_element_is_rejected() {
    let err = reader::translation_unit_from_buffer("<something/>").unwrap_err();
    match err {
        ReadError::UnexpectedRoot { expected, found } => {
            assert_eq!(expected, "abi-instr");
            assert_eq!(found, "something");
        }
        other => panic!("expected UnexpectedRoot, got {other}"),
    }
}

#[test]
fn corpus_root_is_not_a_translation_unit() {
    assert!(reader::translation_unit_from_buffer("<abi-corpus/>").is_err());
}

#[test]
fn unknown_top_level_element_is_rejected() {
    let err =
        reader::translation_unit_from_buffer("<abi-instr><bogus-decl/></abi-instr>").unwrap_err();
    match err {
        ReadError::UnknownElement { element, .. } => assert_eq!(element, "bogus-decl"),
        other => panic!("expected UnknownElement, got {other}"),
    }
}

#[test]
fn failed_parse_fills_nothing() {
    let mut tu = abixml::TranslationUnit::new();
    let input = r#"<abi-instr path="/x.cc"><type-decl name="int" id="t1"/><bogus/></abi-instr>"#;
    assert!(reader::read_translation_unit_from_buffer(input, &mut tu).is_err());
    assert!(tu.is_empty());
    assert_eq!(tu.path, "");
}
