use serde::{Deserialize, Serialize};

use super::element::Element;

/// A group of resources (`# Group Coupons`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceGroup {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A resource: a URI template with the actions available on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "uriTemplate", default)]
    pub uri_template: String,

    /// Parameters shared by every action that declares none of its own.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub actions: Vec<Action>,

    #[serde(default)]
    pub content: Vec<Element>,
}

/// An HTTP operation on a resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub attributes: ActionAttributes,

    #[serde(default)]
    pub content: Vec<Element>,

    #[serde(default)]
    pub examples: Vec<TransactionExample>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionAttributes {
    #[serde(default)]
    pub relation: String,

    /// Empty when the action uses the resource's template.
    #[serde(rename = "uriTemplate", default)]
    pub uri_template: String,
}

/// A URI template parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type", default)]
    pub type_name: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub default: String,

    #[serde(default)]
    pub example: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ParameterValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub value: String,
}

/// Request and response examples of an action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionExample {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub requests: Vec<Payload>,

    #[serde(default)]
    pub responses: Vec<Payload>,
}

/// A single request or response example. For responses, `name` is the status code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub headers: Vec<Header>,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub schema: String,

    #[serde(default)]
    pub content: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    #[serde(default)]
    pub value: String,
}
