//! Resource groups, resources and actions into controller-ready definitions.

use std::collections::HashSet;
use std::sync::LazyLock;

use heck::ToLowerCamelCase;
use regex::Regex;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::ir::{
    ActionDefinition, GroupDefinition, HttpMethod, ParameterBinding, ParameterDefinition,
    RequestBody, ResourceDefinition,
};
use crate::parse::resource::{Action, Parameter, Resource, ResourceGroup};

use super::TransformOptions;
use super::example_analyzer::{ActionContext, ExampleKind, infer_payload_type, resolve_payload_type};
use super::http_status::{select_response_status, success_status_codes};
use super::name_normalizer::{action_name_from_route, normalize_name};
use super::type_name::map_type;

static QUERY_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[?&]([^}]+)\}").expect("valid query group regex"));

static EXPANSION_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[?#&][^}]+\}").expect("valid expansion group regex"));

const UNDECLARED_PARAMETER_TYPE: &str = "String";

/// A URI template split into its path and the names of its query variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    /// The template with every `{?...}`, `{&...}` and `{#...}` group removed.
    pub path: String,
    pub query_names: Vec<String>,
}

impl UriTemplate {
    pub fn parse(template: &str) -> Self {
        let query_names = QUERY_GROUP
            .captures_iter(template)
            .flat_map(|caps| {
                caps[1]
                    .split(',')
                    .map(|name| name.trim().trim_end_matches('*').to_string())
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect();
        Self {
            path: EXPANSION_GROUP.replace_all(template, "").into_owned(),
            query_names,
        }
    }
}

/// Normalize every named resource group into a controller definition.
pub fn normalize_groups(
    groups: &[ResourceGroup],
    options: &TransformOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<GroupDefinition> {
    let mut result = Vec::with_capacity(groups.len());

    for group in groups {
        if group.name.trim().is_empty() {
            diagnostics.error(
                DiagnosticKind::UnnamedGroup,
                format!(
                    "Skipping resource group without a name ({} resources)",
                    group.resources.len()
                ),
            );
            continue;
        }

        let name = normalize_name(group.name.trim());
        let resources = group
            .resources
            .iter()
            .map(|resource| normalize_resource(resource, options, diagnostics))
            .collect();

        result.push(GroupDefinition {
            controller_class_name: format!("{}Controller", name.pascal_case),
            service_class_name: format!("{}ApiService", name.pascal_case),
            service_field_name: format!("{}ApiService", name.camel_case),
            description: group.description.trim().to_string(),
            name,
            resources,
        });
    }

    result
}

fn normalize_resource(
    resource: &Resource,
    options: &TransformOptions,
    diagnostics: &mut Diagnostics,
) -> ResourceDefinition {
    let actions = resource
        .actions
        .iter()
        .filter_map(|action| normalize_action(resource, action, options, diagnostics))
        .collect();

    ResourceDefinition {
        name: resource.name.clone(),
        description: resource.description.trim().to_string(),
        uri_template: UriTemplate::parse(&resource.uri_template).path,
        actions,
    }
}

/// Normalize one action. Returns `None` when its method cannot be mapped.
pub fn normalize_action(
    resource: &Resource,
    action: &Action,
    options: &TransformOptions,
    diagnostics: &mut Diagnostics,
) -> Option<ActionDefinition> {
    let raw_template = if action.attributes.uri_template.is_empty() {
        resource.uri_template.as_str()
    } else {
        action.attributes.uri_template.as_str()
    };
    let template = UriTemplate::parse(raw_template);

    let Some(method) = HttpMethod::parse(&action.method) else {
        diagnostics.error(
            DiagnosticKind::UnsupportedMethod,
            format!(
                "Skipping action '{}' with unsupported method '{}' on {}",
                action.name, action.method, raw_template
            ),
        );
        return None;
    };

    let ctx = ActionContext {
        resource,
        action,
        method: method.as_str(),
        uri_template: raw_template,
    };
    let default_type = options.default_type.as_str();

    let response_type = infer_payload_type(&ctx, ExampleKind::Response, default_type, diagnostics)
        .unwrap_or_else(|| {
            diagnostics.warn(
                DiagnosticKind::MissingResponseType,
                format!(
                    "Using default response type '{default_type}' for action {raw_template}. Did you forget the `+ Attributes (ReturnType)` section?"
                ),
            );
            default_type.to_string()
        });

    let request_body = if ctx.payloads(ExampleKind::Request).is_empty() {
        None
    } else {
        let type_name = resolve_payload_type(&ctx, ExampleKind::Request, default_type, diagnostics);
        Some(RequestBody {
            name: type_name.to_lower_camel_case(),
            type_name,
            leading_delimiter: false,
        })
    };

    let codes = success_status_codes(ctx.payloads(ExampleKind::Response));
    let status = select_response_status(&codes, raw_template, diagnostics);
    let extra_annotations = status
        .filter(|s| !s.is_default)
        .map(|s| vec![s.annotation()])
        .unwrap_or_default();

    let declared = if action.parameters.is_empty() {
        &resource.parameters
    } else {
        &action.parameters
    };
    let query_names: HashSet<&str> = template.query_names.iter().map(String::as_str).collect();
    let parameters = declared
        .iter()
        .map(|param| normalize_parameter(param, &query_names))
        .collect();

    let name = if action.name.trim().is_empty() {
        normalize_name(&action_name_from_route(method, &template.path))
    } else {
        normalize_name(action.name.trim())
    };

    let mut definition = ActionDefinition {
        name,
        resource_name: resource.name.clone(),
        method,
        description: action.description.trim().to_string(),
        uri_template: template.path,
        parameters,
        response_type,
        request_body,
        response_status: status.map(|s| s.code),
        extra_annotations,
    };
    definition.assign_delimiters();

    log::debug!(
        "normalized {} {} as {}",
        method.as_str(),
        definition.uri_template,
        definition.name.camel_case
    );

    Some(definition)
}

fn normalize_parameter(param: &Parameter, query_names: &HashSet<&str>) -> ParameterDefinition {
    let binding = if query_names.contains(param.name.as_str()) {
        ParameterBinding::Query
    } else {
        ParameterBinding::Path
    };
    let type_name = if param.type_name.trim().is_empty() {
        UNDECLARED_PARAMETER_TYPE.to_string()
    } else {
        map_type(param.type_name.trim())
    };

    ParameterDefinition {
        name: normalize_name(&param.name),
        type_name,
        description: param.description.trim().to_string(),
        required: param.required,
        default_value: param.default.clone(),
        binding,
        leading_delimiter: false,
    }
}
