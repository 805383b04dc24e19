pub mod example_analyzer;
pub mod http_status;
pub mod models;
pub mod modifiers;
pub mod name_normalizer;
pub mod resources;
pub mod type_name;

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::ResourceModifierConfig;
use crate::diagnostics::Diagnostics;
use crate::error::TransformError;
use crate::ir::ApiModel;
use crate::parse::document::ApiDocument;

use self::modifiers::{apply_resource_modifiers, compile_modifiers};
use self::type_name::DEFAULT_OBJECT_TYPE;

/// Options controlling a single transform run.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Model names that are never extracted.
    pub skip_model_names: HashSet<String>,
    /// Merge ancestor fields into each model instead of recording a parent class.
    pub flatten_parent_classes: bool,
    /// Skip models whose name contains a `.`.
    pub skip_nested_models: bool,
    /// Placeholder for payloads and fields without type information.
    pub default_type: String,
    pub resource_modifiers: Vec<ResourceModifierConfig>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            skip_model_names: HashSet::new(),
            flatten_parent_classes: false,
            skip_nested_models: true,
            default_type: DEFAULT_OBJECT_TYPE.to_string(),
            resource_modifiers: Vec::new(),
        }
    }
}

/// Transform a parsed blueprint into the intermediate model, discarding diagnostics.
pub fn transform(
    document: &ApiDocument,
    options: &TransformOptions,
) -> Result<ApiModel, TransformError> {
    let mut diagnostics = Diagnostics::new();
    transform_with_diagnostics(document, options, &mut diagnostics)
}

/// Transform a parsed blueprint, recording warnings and skipped items in `diagnostics`.
pub fn transform_with_diagnostics(
    document: &ApiDocument,
    options: &TransformOptions,
    diagnostics: &mut Diagnostics,
) -> Result<ApiModel, TransformError> {
    // Phase 1: Compile modifier rules up front so a bad pattern fails fast
    let modifiers = compile_modifiers(&options.resource_modifiers, diagnostics)?;

    // Phase 2: Normalize groups, resources and actions
    let mut groups = resources::normalize_groups(&document.resource_groups, options, diagnostics);

    // Phase 3: Rewrite matching actions
    apply_resource_modifiers(&mut groups, &modifiers);

    // Phase 4: Extract models from the whole element tree
    let models = models::extract_models(document, options, diagnostics);

    let metadata: IndexMap<String, String> = document
        .metadata
        .iter()
        .map(|m| (m.name.clone(), m.value.clone()))
        .collect();

    let action_count: usize = groups
        .iter()
        .flat_map(|g| &g.resources)
        .map(|r| r.actions.len())
        .sum();
    log::info!(
        "Found {} controllers, {} actions and {} models",
        groups.len(),
        action_count,
        models.len()
    );

    Ok(ApiModel {
        name: document.name.clone(),
        description: document.description.trim().to_string(),
        metadata,
        groups,
        models,
    })
}
