use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::actions::ResourceDefinition;
use super::models::ModelDefinition;

/// The generator-ready intermediate model of one blueprint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiModel {
    pub name: String,
    pub description: String,
    pub metadata: IndexMap<String, String>,
    pub groups: Vec<GroupDefinition>,
    pub models: Vec<ModelDefinition>,
}

/// A resource group: becomes one controller plus one service interface.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDefinition {
    pub name: NormalizedName,
    pub description: String,
    pub controller_class_name: String,
    pub service_class_name: String,
    pub service_field_name: String,
    pub resources: Vec<ResourceDefinition>,
}

/// A name with multiple casing variants pre-computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedName {
    pub original: String,
    pub pascal_case: String,
    pub camel_case: String,
    pub snake_case: String,
    pub screaming_snake: String,
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
