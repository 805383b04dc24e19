//! Display type names for data-structure nodes.
//!
//! Kinds are mapped through a fixed primitive table and PascalCased
//! otherwise. Nodes whose children are themselves structures render as
//! generics: `List<Coupon>`, `Map<String, Coupon>`.

use heck::ToPascalCase;

use crate::parse::element::{Content, Element};

/// Placeholder type for payloads and fields with no structural type information.
pub const DEFAULT_OBJECT_TYPE: &str = "Object";

/// Map an element kind to a display type name.
///
/// Kinds containing anything other than ASCII letters, digits and whitespace
/// are returned untouched, so already-rendered composites such as
/// `List<Coupon>` are not mangled.
pub fn map_type(kind: &str) -> String {
    if kind.trim().is_empty() {
        return DEFAULT_OBJECT_TYPE.to_string();
    }
    if kind
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
    {
        return kind.to_string();
    }
    match kind {
        "number" => "Integer".to_string(),
        "array" => "List".to_string(),
        "int" | "double" | "boolean" | "float" => kind.to_string(),
        other => other.to_pascal_case(),
    }
}

/// Resolve the display type name of a data-structure node, recursing into
/// generic arguments.
pub fn type_name(node: &Element) -> String {
    let base = map_type(&node.element);
    let children = node.children();
    if children.is_empty() || !is_generic(children) {
        return base;
    }
    let args: Vec<String> = children.iter().map(type_name).collect();
    format!("{base}<{}>", args.join(", "))
}

/// A lone child carrying a scalar (or member) value is a plain wrapper, not a
/// type argument.
fn is_generic(children: &[Element]) -> bool {
    match children {
        [only] => matches!(only.content, None | Some(Content::Elements(_))),
        _ => true,
    }
}
