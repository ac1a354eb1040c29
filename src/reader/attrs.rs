//! Attribute domain parsing.
//!
//! Unknown values never fail: each domain has the fallback the ABI
//! format prescribes (visibility defaults to `default`, binding to
//! `global`, access to `private`, flags are true only for `yes`).

use crate::ir::nodes::types::ReferenceKind;
use crate::ir::nodes::{Access, Binding, Visibility};

/// `yes`/anything-else flags: only `yes` is true.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value, Some("yes"))
}

/// Integer attributes are parsed as signed decimal, defaulting to 0.
pub fn parse_signed(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// Non-negative integer attributes (sizes, alignments, offsets).
pub fn parse_size(value: Option<&str>) -> u64 {
    parse_signed(value).max(0) as u64
}

pub fn parse_u32(value: Option<&str>) -> u32 {
    parse_signed(value).clamp(0, i64::from(u32::MAX)) as u32
}

pub fn parse_visibility(value: Option<&str>) -> Visibility {
    match value {
        Some("hidden") => Visibility::Hidden,
        Some("internal") => Visibility::Internal,
        Some("protected") => Visibility::Protected,
        _ => Visibility::Default,
    }
}

pub fn parse_binding(value: Option<&str>) -> Binding {
    match value {
        Some("local") => Binding::Local,
        Some("weak") => Binding::Weak,
        _ => Binding::Global,
    }
}

pub fn parse_access(value: Option<&str>) -> Access {
    match value {
        Some("protected") => Access::Protected,
        Some("public") => Access::Public,
        _ => Access::Private,
    }
}

pub fn parse_reference_kind(value: Option<&str>) -> ReferenceKind {
    match value {
        Some("rvalue") => ReferenceKind::Rvalue,
        _ => ReferenceKind::Lvalue,
    }
}
