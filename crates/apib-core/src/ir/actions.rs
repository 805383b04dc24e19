use serde::Serialize;

use super::types::NormalizedName;

/// HTTP method of an action. Limited to what Spring's `RequestMethod` can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Parse a method name, ignoring case and surrounding whitespace.
    pub fn parse(method: &str) -> Option<Self> {
        match method.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "PATCH" => Some(HttpMethod::Patch),
            "OPTIONS" => Some(HttpMethod::Options),
            "HEAD" => Some(HttpMethod::Head),
            "TRACE" => Some(HttpMethod::Trace),
            _ => None,
        }
    }
}

/// A resource and its normalized actions.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceDefinition {
    pub name: String,
    pub description: String,
    pub uri_template: String,
    pub actions: Vec<ActionDefinition>,
}

/// A fully normalized action, ready to become a controller method.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDefinition {
    pub name: NormalizedName,
    /// Name of the resource the action was declared on.
    pub resource_name: String,
    pub method: HttpMethod,
    pub description: String,
    /// URI template with `{?...}`, `{&...}` and `{#...}` groups removed.
    pub uri_template: String,
    pub parameters: Vec<ParameterDefinition>,
    pub response_type: String,
    pub request_body: Option<RequestBody>,
    /// The 2xx status chosen for the action, if any example named one.
    pub response_status: Option<u16>,
    pub extra_annotations: Vec<String>,
}

impl ActionDefinition {
    /// Recompute list-rendering delimiters from parameter positions.
    pub fn assign_delimiters(&mut self) {
        for (i, param) in self.parameters.iter_mut().enumerate() {
            param.leading_delimiter = i > 0;
        }
        let has_parameters = !self.parameters.is_empty();
        if let Some(ref mut body) = self.request_body {
            body.leading_delimiter = has_parameters;
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterDefinition {
    pub name: NormalizedName,
    pub type_name: String,
    pub description: String,
    pub required: bool,
    /// Empty when the parameter declares no default.
    pub default_value: String,
    pub binding: ParameterBinding,
    /// Whether a `, ` separator precedes this parameter in a parameter list.
    pub leading_delimiter: bool,
}

impl ParameterDefinition {
    pub fn delimiter(&self) -> &'static str {
        if self.leading_delimiter { ", " } else { "" }
    }
}

/// How a parameter is bound to the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterBinding {
    /// A URI path segment (`@PathVariable`).
    Path,
    /// A query-string parameter (`@RequestParam`).
    Query,
    /// Injected by a resource modifier; carries its own annotation, without the `@`.
    Injected { annotation: Option<String> },
}

/// The request body of an action.
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    /// Variable name (camelCase of the type).
    pub name: String,
    pub type_name: String,
    pub leading_delimiter: bool,
}

impl RequestBody {
    pub fn delimiter(&self) -> &'static str {
        if self.leading_delimiter { ", " } else { "" }
    }
}
