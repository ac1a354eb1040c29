//! One builder per IR node kind.
//!
//! Builders consume a detached element subtree. Every builder checks the
//! subtree's tag first and returns `Ok(None)` on a mismatch, which is
//! what lets the polymorphic [`build_type`] and
//! [`build_template_parameter`] chains try alternatives in order; actual
//! failures (unresolved ids, missing attributes) are hard errors.

pub mod class_builder;
pub mod function_builder;
pub mod template_builder;
pub mod type_builder;
pub mod variable_builder;

pub use class_builder::build_class_decl;
pub use function_builder::build_function_decl;
pub use template_builder::{build_class_tdecl, build_function_tdecl, build_template_parameter};
pub use type_builder::{
    build_enum_type_decl, build_pointer_type_def, build_qualified_type_def,
    build_reference_type_def, build_type, build_type_decl, build_typedef_decl,
};
pub use variable_builder::build_var_decl;
