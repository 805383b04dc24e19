use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::transform::TransformOptions;
use crate::transform::type_name::DEFAULT_OBJECT_TYPE;

/// Top-level project configuration loaded from `.apib.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApibConfig {
    /// Parser output (AST as JSON or YAML).
    pub input: String,
    pub output: String,
    /// Java package prefix for generated sources.
    pub package: String,
    pub extra_imports: Vec<String>,
    /// Placeholder type used wherever no payload or field type can be found.
    pub default_type: String,
    pub models: ModelConfig,
    pub resource_modifiers: Vec<ResourceModifierConfig>,
}

impl Default for ApibConfig {
    fn default() -> Self {
        Self {
            input: "api.json".to_string(),
            output: "src/main/java/api".to_string(),
            package: "api".to_string(),
            extra_imports: Vec::new(),
            default_type: DEFAULT_OBJECT_TYPE.to_string(),
            models: ModelConfig::default(),
            resource_modifiers: Vec::new(),
        }
    }
}

impl ApibConfig {
    /// Run options for the transform phase.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            skip_model_names: self.models.skip.iter().cloned().collect::<HashSet<_>>(),
            flatten_parent_classes: self.models.flatten_parent_classes,
            skip_nested_models: self.models.skip_nested,
            default_type: self.default_type.clone(),
            resource_modifiers: self.resource_modifiers.clone(),
        }
    }
}

/// Model extraction options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model names that are never generated.
    pub skip: Vec<String>,
    /// Merge ancestor fields into each model instead of extending a parent class.
    pub flatten_parent_classes: bool,
    /// Skip models whose name contains a `.` (nested definitions).
    pub skip_nested: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            skip: Vec::new(),
            flatten_parent_classes: false,
            skip_nested: true,
        }
    }
}

/// A pattern rule rewriting matching controller actions.
///
/// The pattern is matched against `ControllerClassName.actionName`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceModifierConfig {
    pub pattern: String,
    /// Replaces the action's extra annotations when present.
    #[serde(default)]
    pub method_annotations: Option<Vec<String>>,
    #[serde(default)]
    pub prepended_parameters: Vec<ParameterSpec>,
    #[serde(default)]
    pub appended_parameters: Vec<ParameterSpec>,
}

/// A synthetic parameter injected by a resource modifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParameterSpec {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Parameter annotation, with or without the leading `@`.
    pub annotation: Option<String>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apib.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApibConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Parse config from YAML text.
pub fn parse_config(content: &str) -> Result<ApibConfig, serde_yaml_ng::Error> {
    serde_yaml_ng::from_str(content)
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apib configuration
input: api.json          # AST produced by the API Blueprint parser (JSON or YAML)
output: src/main/java/api
package: api
extra_imports: []
default_type: Object

models:
  skip: []
  flatten_parent_classes: false
  skip_nested: true      # skip models whose name contains a '.'

resource_modifiers: []
  # - pattern: "^CouponsController\\."
  #   method_annotations:
  #     - "@PreAuthorize(\"isAuthenticated()\")"
  #   prepended_parameters:
  #     - name: principal
  #       type: Principal
  #   appended_parameters:
  #     - name: locale
  #       type: Locale
  #       annotation: "@RequestHeader(\"Accept-Language\")"
"#
}
