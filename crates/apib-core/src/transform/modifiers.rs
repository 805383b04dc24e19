//! Pattern rules that inject parameters and annotations into matching actions.

use regex::Regex;

use crate::config::{ParameterSpec, ResourceModifierConfig};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::TransformError;
use crate::ir::{GroupDefinition, NormalizedName, ParameterBinding, ParameterDefinition};

use super::name_normalizer::normalize_name;

/// A compiled resource modifier rule.
#[derive(Debug, Clone)]
pub struct ResourceModifier {
    pattern: Regex,
    method_annotations: Option<Vec<String>>,
    prepended: Vec<ParameterDefinition>,
    appended: Vec<ParameterDefinition>,
}

impl ResourceModifier {
    /// Compile a configured rule. Parameter specs lacking a name or type are
    /// reported and dropped.
    pub fn compile(
        config: &ResourceModifierConfig,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, TransformError> {
        let pattern =
            Regex::new(&config.pattern).map_err(|source| TransformError::InvalidModifierPattern {
                pattern: config.pattern.clone(),
                source,
            })?;

        Ok(Self {
            pattern,
            method_annotations: config.method_annotations.clone(),
            prepended: injected_parameters(&config.pattern, &config.prepended_parameters, diagnostics),
            appended: injected_parameters(&config.pattern, &config.appended_parameters, diagnostics),
        })
    }

    /// Whether the rule applies to `ControllerClassName.actionName`.
    pub fn is_match(&self, full_name: &str) -> bool {
        self.pattern.is_match(full_name)
    }
}

/// Compile every configured rule, failing on the first invalid pattern.
pub fn compile_modifiers(
    configs: &[ResourceModifierConfig],
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ResourceModifier>, TransformError> {
    configs
        .iter()
        .map(|config| ResourceModifier::compile(config, diagnostics))
        .collect()
}

/// Apply rules in order to every action they match.
pub fn apply_resource_modifiers(groups: &mut [GroupDefinition], modifiers: &[ResourceModifier]) {
    if modifiers.is_empty() {
        return;
    }

    for group in groups.iter_mut() {
        let controller = group.controller_class_name.as_str();
        for action in group
            .resources
            .iter_mut()
            .flat_map(|resource| resource.actions.iter_mut())
        {
            let full_name = format!("{controller}.{}", action.name.camel_case);
            for modifier in modifiers.iter().filter(|m| m.is_match(&full_name)) {
                log::debug!("modifier {} matched {full_name}", modifier.pattern);

                let existing = std::mem::take(&mut action.parameters);
                action.parameters = modifier
                    .prepended
                    .iter()
                    .cloned()
                    .chain(existing)
                    .chain(modifier.appended.iter().cloned())
                    .collect();
                action.assign_delimiters();

                if let Some(ref annotations) = modifier.method_annotations {
                    action.extra_annotations = annotations.clone();
                }
            }
        }
    }
}

fn injected_parameters(
    pattern: &str,
    specs: &[ParameterSpec],
    diagnostics: &mut Diagnostics,
) -> Vec<ParameterDefinition> {
    specs
        .iter()
        .filter_map(|spec| {
            let present: fn(Option<&str>) -> Option<&str> = |value| value.map(str::trim).filter(|v| !v.is_empty());
            let (Some(name), Some(type_name)) =
                (present(spec.name.as_deref()), present(spec.type_name.as_deref()))
            else {
                diagnostics.error(
                    DiagnosticKind::InvalidModifierParameter,
                    format!(
                        "Ignoring parameter of resource modifier '{pattern}': both name and type are required (got {spec:?})"
                    ),
                );
                return None;
            };
            Some(ParameterDefinition {
                name: injected_name(name),
                type_name: type_name.to_string(),
                description: String::new(),
                required: true,
                default_value: String::new(),
                binding: ParameterBinding::Injected {
                    annotation: spec
                        .annotation
                        .as_deref()
                        .map(|a| a.strip_prefix('@').unwrap_or(a).to_string()),
                },
                leading_delimiter: false,
            })
        })
        .collect()
}

/// Injected names are Java identifiers already; keep them verbatim as camelCase.
fn injected_name(name: &str) -> NormalizedName {
    NormalizedName {
        camel_case: name.to_string(),
        ..normalize_name(name)
    }
}
