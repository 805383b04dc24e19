//! Named data-structure definitions into model classes.

use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::ir::{FLATTEN_PARENT_CLASSES, Field, ModelDefinition};
use crate::parse::document::ApiDocument;
use crate::parse::element::{Element, MEMBER};

use super::TransformOptions;
use super::name_normalizer::normalize_name;
use super::type_name::type_name;

static MODEL_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\s*([a-zA-Z]+)\s*:\s*(.*)").expect("valid model option regex"));

/// Collect every named data structure in the document and resolve its fields
/// and inheritance.
pub fn extract_models(
    document: &ApiDocument,
    options: &TransformOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<ModelDefinition> {
    let mut definitions: IndexMap<String, &Element> = IndexMap::new();
    for element in &document.content {
        collect_definitions(element, options, &mut definitions, diagnostics);
    }

    let fields: IndexMap<&str, Vec<Field>> = definitions
        .iter()
        .map(|(name, element)| {
            (
                name.as_str(),
                own_fields(element, &options.default_type, diagnostics),
            )
        })
        .collect();

    let models: Vec<ModelDefinition> = definitions
        .iter()
        .map(|(name, element)| {
            let mut model = ModelDefinition {
                name: name.clone(),
                class_name: normalize_name(name).pascal_case,
                description: element.meta_description().map(|d| d.trim().to_string()),
                fields: Vec::new(),
                parent_class: None,
                options: parse_model_options(element, options.flatten_parent_classes),
            };
            if model.flattens_parent_classes() {
                model.fields = flattened_fields(name, &definitions, &fields, diagnostics);
            } else {
                model.fields = fields.get(name.as_str()).cloned().unwrap_or_default();
                model.parent_class = parent_name(name, element, &definitions)
                    .map(|parent| normalize_name(parent).pascal_case);
            }
            model
        })
        .collect();

    log::debug!("extracted {} models", models.len());
    models
}

/// Depth-first walk recording the children of every `dataStructure` element.
fn collect_definitions<'a>(
    element: &'a Element,
    options: &TransformOptions,
    definitions: &mut IndexMap<String, &'a Element>,
    diagnostics: &mut Diagnostics,
) {
    if !element.is_data_structure() {
        for child in element.children() {
            collect_definitions(child, options, definitions, diagnostics);
        }
        return;
    }

    for candidate in element.children() {
        let Some(name) = candidate.id() else {
            diagnostics.error(
                DiagnosticKind::UnnamedModel,
                format!(
                    "Failed to read name from data structure of kind '{}'",
                    candidate.element
                ),
            );
            continue;
        };
        if options.skip_model_names.contains(name)
            || (options.skip_nested_models && name.contains('.'))
        {
            log::debug!("skipping model {name}");
            continue;
        }
        if definitions.contains_key(name) {
            log::debug!("ignoring duplicate definition of model {name}");
            continue;
        }
        definitions.insert(name.to_string(), candidate);
    }
}

/// Options from `+ key: value` description lines, seeded with the run's
/// flattening choice.
fn parse_model_options(element: &Element, flatten_parent_classes: bool) -> IndexMap<String, String> {
    let mut options = IndexMap::new();
    options.insert(
        FLATTEN_PARENT_CLASSES.to_string(),
        flatten_parent_classes.to_string(),
    );

    if let Some(description) = element.meta_description() {
        for line in description.lines() {
            if let Some(caps) = MODEL_OPTION.captures(line) {
                options.insert(caps[1].to_string(), caps[2].trim().to_string());
            }
        }
    }
    options
}

fn own_fields(element: &Element, default_type: &str, diagnostics: &mut Diagnostics) -> Vec<Field> {
    element
        .children()
        .iter()
        .filter(|child| child.element == MEMBER)
        .filter_map(|member| {
            let content = member.member_content()?;
            let Some(key) = content.key.string_value() else {
                diagnostics.error(
                    DiagnosticKind::UnnamedField,
                    format!(
                        "Skipping field without a string key in data structure '{}'",
                        element.id().unwrap_or(&element.element)
                    ),
                );
                return None;
            };
            let type_name = content
                .value
                .as_ref()
                .map(type_name)
                .unwrap_or_else(|| default_type.to_string());
            Some(Field {
                name: normalize_name(key),
                type_name,
            })
        })
        .collect()
}

/// The name of the collected model this element extends, if any.
fn parent_name<'a>(
    name: &str,
    element: &'a Element,
    definitions: &IndexMap<String, &Element>,
) -> Option<&'a str> {
    let parent = element.element.as_str();
    (parent != name && definitions.contains_key(parent)).then_some(parent)
}

/// Own fields preceded by every ancestor's, deepest ancestor first.
fn flattened_fields(
    name: &str,
    definitions: &IndexMap<String, &Element>,
    fields: &IndexMap<&str, Vec<Field>>,
    diagnostics: &mut Diagnostics,
) -> Vec<Field> {
    let mut chain: Vec<&str> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = name;

    while let Some(&element) = definitions.get(current) {
        if !visited.insert(current) {
            diagnostics.warn(
                DiagnosticKind::CyclicInheritance,
                format!("Inheritance cycle detected while flattening model {name} at {current}"),
            );
            break;
        }
        chain.push(current);
        current = element.element.as_str();
    }

    chain
        .iter()
        .rev()
        .filter_map(|model| fields.get(model))
        .flatten()
        .cloned()
        .collect()
}
