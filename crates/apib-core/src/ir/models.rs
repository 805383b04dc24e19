use indexmap::IndexMap;
use serde::Serialize;

use super::types::NormalizedName;

/// Model option selecting ancestor flattening (`true` / `false`).
pub const FLATTEN_PARENT_CLASSES: &str = "flattenParentClasses";
/// Model option naming a class the generated model wraps.
pub const WRAPS_CLASS: &str = "wrapsClass";

/// A named data structure destined to become a generated class.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDefinition {
    pub name: String,
    pub class_name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Set only when ancestor fields were not flattened into `fields`.
    pub parent_class: Option<String>,
    /// Options from `+ key: value` description lines.
    pub options: IndexMap<String, String>,
}

impl ModelDefinition {
    pub fn wraps_class(&self) -> Option<&str> {
        self.options
            .get(WRAPS_CLASS)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn flattens_parent_classes(&self) -> bool {
        self.options
            .get(FLATTEN_PARENT_CLASSES)
            .is_some_and(|v| v == "true")
    }
}

/// A field on a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: NormalizedName,
    pub type_name: String,
}
