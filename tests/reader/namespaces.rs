use std::rc::Rc;

use super::{global_members, parse};

#[test]
fn namespace_members_point_back_at_their_scope() {
    let tu = parse(
        r#"<abi-instr>
             <namespace-decl name="outer">
               <type-decl name="int" id="t1"/>
               <namespace-decl name="inner">
                 <type-decl name="char" id="t2"/>
               </namespace-decl>
             </namespace-decl>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    assert_eq!(members.len(), 1);
    let outer = &members[0];
    assert_eq!(outer.borrow().name(), "outer");
    assert!(Rc::ptr_eq(
        &outer.borrow().scope().expect("outer has a scope"),
        tu.global_scope()
    ));

    let outer_members = outer.borrow().members().unwrap().to_vec();
    assert_eq!(outer_members.len(), 2);
    assert_eq!(outer_members[0].borrow().name(), "int");
    assert!(Rc::ptr_eq(
        &outer_members[0].borrow().scope().unwrap(),
        outer
    ));

    let inner = &outer_members[1];
    assert_eq!(inner.borrow().name(), "inner");
    let inner_members = inner.borrow().members().unwrap().to_vec();
    assert_eq!(inner_members.len(), 1);
    assert_eq!(inner_members[0].borrow().name(), "char");
    assert!(Rc::ptr_eq(
        &inner_members[0].borrow().scope().unwrap(),
        inner
    ));
}

#[test]
fn each_member_is_attached_exactly_once() {
    let tu = parse(
        r#"<abi-instr>
             <namespace-decl name="n">
               <type-decl name="int" id="t1"/>
             </namespace-decl>
           </abi-instr>"#,
    );
    let namespace = &global_members(&tu)[0];
    let members = namespace.borrow().members().unwrap().to_vec();
    let target = &members[0];
    let occurrences = members.iter().filter(|m| Rc::ptr_eq(m, target)).count();
    assert_eq!(occurrences, 1);
}

#[test]
fn anonymous_and_empty_namespaces_are_kept() {
    let tu = parse(
        r#"<abi-instr>
             <namespace-decl/>
             <namespace-decl name="n"></namespace-decl>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].borrow().name(), "");
    assert!(members[0].borrow().members().unwrap().is_empty());
    assert_eq!(members[1].borrow().name(), "n");
    assert!(members[1].borrow().members().unwrap().is_empty());
}
