use serde::{Deserialize, Serialize};

use super::element::Element;
use super::resource::ResourceGroup;

/// A `key: value` line from the blueprint's metadata section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Root of the AST emitted by the API Blueprint parser.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(rename = "_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<Metadata>,

    #[serde(rename = "resourceGroups", default)]
    pub resource_groups: Vec<ResourceGroup>,

    /// The full element tree, including every data-structure definition.
    #[serde(default)]
    pub content: Vec<Element>,
}
