use std::rc::Rc;

use abixml::ir::nodes::{Binding, TemplateParameter, TypeNode};

use super::{global_members, parse};

#[test]
fn function_template_collects_parameters_and_pattern() {
    let tu = parse(
        r#"<abi-instr>
             <type-decl name="int" id="t1" size-in-bits="32"/>
             <function-template-decl id="ft" binding="weak">
               <template-type-parameter id="tp0" name="T"/>
               <template-non-type-parameter type-id="t1" name="N"/>
               <template-parameter-type-composition>
                 <reference-type-def type-id="tp0" id="rt0" size-in-bits="64"/>
               </template-parameter-type-composition>
               <function-decl name="f">
                 <parameter type-id="rt0" name="arg"/>
                 <return type-id="t1"/>
               </function-decl>
             </function-template-decl>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    let int_decl = &members[0];
    let decl = members[1].borrow();
    assert_eq!(decl.binding(), Binding::Weak);
    assert!(Rc::ptr_eq(&decl.scope().unwrap(), tu.global_scope()));

    let template = decl.as_function_template().unwrap();
    assert_eq!(template.parameters.len(), 3);

    let type_param = match &template.parameters[0] {
        TemplateParameter::Type(p) => {
            assert_eq!(p.index, 0);
            assert_eq!(p.ty.borrow().name(), "T");
            p.ty.clone()
        }
        other => panic!("expected type parameter, got {other:?}"),
    };
    match &template.parameters[1] {
        TemplateParameter::NonType(p) => {
            assert_eq!(p.index, 1);
            assert_eq!(p.name, "N");
            assert!(Rc::ptr_eq(&p.ty, int_decl));
        }
        other => panic!("expected non-type parameter, got {other:?}"),
    }
    let composed = match &template.parameters[2] {
        TemplateParameter::Composition(p) => {
            assert_eq!(p.index, 2);
            p.composed.clone()
        }
        other => panic!("expected type composition, got {other:?}"),
    };
    match composed.borrow().as_type().unwrap() {
        TypeNode::Reference(r) => assert!(Rc::ptr_eq(&r.referent, &type_param)),
        other => panic!("expected reference node, got {other:?}"),
    }

    // The pattern's parameter resolves to the composed reference type.
    let pattern = template.pattern.as_ref().expect("pattern recorded");
    let pattern = pattern.borrow();
    let function = pattern.as_function().unwrap();
    assert!(Rc::ptr_eq(
        function.fn_type.parameters[0].ty.as_ref().unwrap(),
        &composed
    ));
}

#[test]
fn class_template_pattern_uses_its_type_parameter() {
    let tu = parse(
        r#"<abi-instr>
             <class-template-decl id="ct">
               <template-type-parameter id="tp0" name="T"/>
               <class-decl name="Box" id="box" size-in-bits="64">
                 <data-member access="private" layout-offset-in-bits="0">
                   <var-decl name="value" type-id="tp0"/>
                 </data-member>
               </class-decl>
             </class-template-decl>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    let decl = members[0].borrow();
    let template = decl.as_class_template().unwrap();
    assert_eq!(template.parameters.len(), 1);

    let type_param = match &template.parameters[0] {
        TemplateParameter::Type(p) => p.ty.clone(),
        other => panic!("expected type parameter, got {other:?}"),
    };
    let pattern = template.pattern.as_ref().expect("pattern recorded");
    let pattern = pattern.borrow();
    let class = pattern.as_class().unwrap();
    assert_eq!(pattern.name(), "Box");
    assert_eq!(class.data_members.len(), 1);
    assert!(Rc::ptr_eq(
        &class.data_members[0].var.borrow().as_var().unwrap().ty,
        &type_param
    ));
}

#[test]
fn template_template_parameters_nest() {
    let tu = parse(
        r#"<abi-instr>
             <function-template-decl id="ft2">
               <template-template-parameter name="Container">
                 <template-type-parameter id="tpu" name="U"/>
               </template-template-parameter>
               <function-decl name="g"/>
             </function-template-decl>
           </abi-instr>"#,
    );
    let members = global_members(&tu);
    let decl = members[0].borrow();
    let template = decl.as_function_template().unwrap();
    match &template.parameters[0] {
        TemplateParameter::Template(p) => {
            assert_eq!(p.index, 0);
            assert_eq!(p.name, "Container");
            assert_eq!(p.parameters.len(), 1);
            assert_eq!(p.parameters[0].index(), 0);
        }
        other => panic!("expected template-template parameter, got {other:?}"),
    }
}
