use std::rc::Rc;

use abixml::ir::nodes::TypeNode;
use abixml::{reader, ReadError};

use super::{global_members, parse};

#[test]
fn typedef_points_at_its_underlying_type() {
    let tu = parse(
        r#"<abi-instr>
             <type-decl name="int" id="t1" size-in-bits="32" alignment-in-bits="32"/>
             <typedef-decl name="I" type-id="t1" id="t2"/>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    assert_eq!(members.len(), 2);

    let int_decl = &members[0];
    assert_eq!(int_decl.borrow().name(), "int");
    assert_eq!(int_decl.borrow().size_in_bits(), 32);
    assert_eq!(int_decl.borrow().alignment_in_bits(), 32);

    let typedef = members[1].borrow();
    assert_eq!(typedef.name(), "I");
    match typedef.as_type().expect("typedef is a type") {
        TypeNode::Typedef(t) => assert!(Rc::ptr_eq(&t.underlying, int_decl)),
        other => panic!("expected typedef node, got {other:?}"),
    }
}

#[test]
fn pointer_resolves_pointee_and_layout() {
    let tu = parse(
        r#"<abi-instr>
             <type-decl name="X" id="x" size-in-bits="8"/>
             <pointer-type-def type-id="x" id="px" size-in-bits="64" alignment-in-bits="64"/>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    let pointer = members[1].borrow();
    assert_eq!(pointer.size_in_bits(), 64);
    match pointer.as_type().expect("pointer is a type") {
        TypeNode::Pointer(p) => assert!(Rc::ptr_eq(&p.pointee, &members[0])),
        other => panic!("expected pointer node, got {other:?}"),
    }
}

#[test]
fn qualified_type_collects_the_cv_mask() {
    let tu = parse(
        r#"<abi-instr>
             <type-decl name="int" id="t1" size-in-bits="32"/>
             <qualified-type-def type-id="t1" const="yes" volatile="yes" id="q1" size-in-bits="32"/>
             <qualified-type-def type-id="t1" const="yes" id="q2" size-in-bits="32"/>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    match members[1].borrow().as_type().unwrap() {
        TypeNode::Qualified(q) => {
            assert!(q.cv.is_const());
            assert!(q.cv.is_volatile());
            assert!(Rc::ptr_eq(&q.underlying, &members[0]));
        }
        other => panic!("expected qualified node, got {other:?}"),
    }
    match members[2].borrow().as_type().unwrap() {
        TypeNode::Qualified(q) => {
            assert!(q.cv.is_const());
            assert!(!q.cv.is_volatile());
        }
        other => panic!("expected qualified node, got {other:?}"),
    };
}

#[test]
fn reference_kind_defaults_to_lvalue() {
    use abixml::ir::nodes::types::ReferenceKind;

    let tu = parse(
        r#"<abi-instr>
             <type-decl name="int" id="t1" size-in-bits="32"/>
             <reference-type-def type-id="t1" id="r1" size-in-bits="64"/>
             <reference-type-def type-id="t1" kind="rvalue" id="r2" size-in-bits="64"/>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    match members[1].borrow().as_type().unwrap() {
        TypeNode::Reference(r) => {
            assert_eq!(r.kind, ReferenceKind::Lvalue);
            assert!(Rc::ptr_eq(&r.referent, &members[0]));
        }
        other => panic!("expected reference node, got {other:?}"),
    }
    match members[2].borrow().as_type().unwrap() {
        TypeNode::Reference(r) => assert_eq!(r.kind, ReferenceKind::Rvalue),
        other => panic!("expected reference node, got {other:?}"),
    };
}

#[test]
fn enum_reads_underlying_type_and_enumerators() {
    let tu = parse(
        r#"<abi-instr>
             <type-decl name="unsigned int" id="t1" size-in-bits="32"/>
             <enum-decl name="E" id="e1" size-in-bits="32">
               <underlying-type type-id="t1"/>
               <enumerator name="A" value="0"/>
               <enumerator name="B" value="-5"/>
             </enum-decl>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    match members[1].borrow().as_type().unwrap() {
        TypeNode::Enum(e) => {
            assert!(Rc::ptr_eq(&e.underlying, &members[0]));
            assert_eq!(e.enumerators.len(), 2);
            assert_eq!(e.enumerators[0].name, "A");
            assert_eq!(e.enumerators[0].value, 0);
            assert_eq!(e.enumerators[1].name, "B");
            assert_eq!(e.enumerators[1].value, -5);
        }
        other => panic!("expected enum node, got {other:?}"),
    };
}

#[test]
fn enum_without_underlying_type_is_rejected() {
    let err = reader::translation_unit_from_buffer(
        r#"<abi-instr><enum-decl name="E" id="e1"><enumerator name="A" value="0"/></enum-decl></abi-instr>"#,
    )
    .unwrap_err();
    assert!(matches!(err, ReadError::MissingChild { .. }), "got {err}");
}

#[test]
fn unresolved_type_id_fails_the_parse() {
    let err = reader::translation_unit_from_buffer(
        r#"<abi-instr><pointer-type-def type-id="missing" id="p1"/></abi-instr>"#,
    )
    .unwrap_err();
    match err {
        ReadError::UnresolvedTypeId(id) => assert_eq!(id, "missing"),
        other => panic!("expected UnresolvedTypeId, got {other}"),
    }
}

#[test]
fn duplicate_id_fails_the_parse() {
    let err = reader::translation_unit_from_buffer(
        r#"<abi-instr>
             <type-decl name="int" id="t1"/>
             <type-decl name="long" id="t1"/>
           </abi-instr>"#,
    )
    .unwrap_err();
    match err {
        ReadError::DuplicateId(id) => assert_eq!(id, "t1"),
        other => panic!("expected DuplicateId, got {other}"),
    }
}

#[test]
fn escaped_type_names_are_unescaped() {
    let tu = parse(r#"<abi-instr><type-decl name="Pair&lt;int, int&gt;" id="t1"/></abi-instr>"#);
    let members = global_members(&tu);
    assert_eq!(members[0].borrow().name(), "Pair<int, int>");
}
