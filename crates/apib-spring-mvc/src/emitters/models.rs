use minijinja::{Environment, context};

use apib_core::GeneratedFile;
use apib_core::ir::ModelDefinition;

use crate::generator::SpringConfig;
use crate::type_mapper::{java_identifier, java_type};

/// Emit `model/<Model>.java`. Models setting `wrapsClass` extend the wrapped
/// class instead of declaring fields.
pub fn emit_model(
    env: &Environment<'_>,
    model: &ModelDefinition,
    config: &SpringConfig,
) -> Result<GeneratedFile, minijinja::Error> {
    let fields: Vec<minijinja::Value> = model
        .fields
        .iter()
        .map(|field| {
            context! {
                name => java_identifier(&field.name.camel_case),
                accessor => field.name.pascal_case.clone(),
                type_name => java_type(&field.type_name),
            }
        })
        .collect();

    let model_ctx = context! {
        class_name => model.class_name.clone(),
        description => model.description.as_deref().map(strip_option_lines),
        parent_class => model.parent_class.clone(),
    };

    let content = match model.wraps_class() {
        Some(wraps_class) => env.get_template("model_wrapper.java.j2")?.render(context! {
            config => config,
            model => model_ctx,
            wraps_class => wraps_class,
        })?,
        None => env.get_template("model.java.j2")?.render(context! {
            config => config,
            model => model_ctx,
            fields => fields,
        })?,
    };

    Ok(GeneratedFile {
        path: format!("model/{}.java", model.class_name),
        content,
    })
}

/// Drop `+ key: value` option lines from a model description.
fn strip_option_lines(description: &str) -> String {
    description
        .lines()
        .filter(|line| !line.trim_start().starts_with('+'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
