pub mod controllers;
pub mod models;
pub mod services;

use minijinja::{Environment, context};

use apib_core::ir::{ActionDefinition, ParameterBinding, ParameterDefinition};

use crate::type_mapper::{java_identifier, java_string, java_type};

/// Template environment shared by every emitter.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("javadoc", javadoc);
    env.add_template(
        "controller.java.j2",
        include_str!("../../templates/controller.java.j2"),
    )?;
    env.add_template(
        "service.java.j2",
        include_str!("../../templates/service.java.j2"),
    )?;
    env.add_template("model.java.j2", include_str!("../../templates/model.java.j2"))?;
    env.add_template(
        "model_wrapper.java.j2",
        include_str!("../../templates/model_wrapper.java.j2"),
    )?;
    Ok(env)
}

/// Render text as the body lines of a Javadoc block, indented by `indent` spaces.
fn javadoc(text: String, indent: Option<usize>) -> String {
    let pad = " ".repeat(indent.unwrap_or(0));
    let escaped = text.replace("*/", "*\\/");
    let lines: Vec<String> = escaped
        .trim()
        .lines()
        .map(|line| match line.trim_end() {
            "" => format!("{pad} *"),
            line => format!("{pad} * {line}"),
        })
        .collect();
    if lines.is_empty() {
        format!("{pad} *")
    } else {
        lines.join("\n")
    }
}

/// Template context for one controller method and its service counterpart.
pub(crate) fn action_context(action: &ActionDefinition) -> minijinja::Value {
    let params: Vec<minijinja::Value> = action
        .parameters
        .iter()
        .map(|param| {
            context! {
                name => java_identifier(&param.name.camel_case),
                type_name => java_type(&param.type_name),
                delimiter => param.delimiter(),
                declaration => parameter_declaration(param),
            }
        })
        .collect();

    let body = action.request_body.as_ref().map(|body| {
        context! {
            name => format!("{}Body", body.name),
            type_name => java_type(&body.type_name),
            delimiter => body.delimiter(),
        }
    });

    context! {
        name => java_identifier(&action.name.camel_case),
        method => action.method.as_str(),
        uri_template => java_string(&action.uri_template),
        description => action.description.clone(),
        response_type => java_type(&action.response_type),
        annotations => action.extra_annotations.clone(),
        params => params,
        body => body,
    }
}

/// The annotated parameter as it appears in a controller signature.
fn parameter_declaration(param: &ParameterDefinition) -> String {
    let name = java_identifier(&param.name.camel_case);
    let type_name = java_type(&param.type_name);
    match &param.binding {
        ParameterBinding::Path => format!(
            "@PathVariable(\"{}\") {type_name} {name}",
            java_string(&param.name.original)
        ),
        ParameterBinding::Query => {
            let mut args = vec![format!("value = \"{}\"", java_string(&param.name.original))];
            if !param.required {
                args.push("required = false".to_string());
            }
            if !param.default_value.is_empty() {
                args.push(format!(
                    "defaultValue = \"{}\"",
                    java_string(&param.default_value)
                ));
            }
            format!("@RequestParam({}) {type_name} {name}", args.join(", "))
        }
        ParameterBinding::Injected {
            annotation: Some(annotation),
        } => format!("@{annotation} {type_name} {name}"),
        ParameterBinding::Injected { annotation: None } => format!("{type_name} {name}"),
    }
}
