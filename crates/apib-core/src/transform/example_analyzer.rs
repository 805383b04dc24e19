//! Infers request and response payload types from an action's examples.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parse::element::Element;
use crate::parse::resource::{Action, Payload, Resource};

use super::type_name::type_name;

/// Which half of the examples to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKind {
    Request,
    Response,
}

/// An action together with its enclosing resource and effective URI template.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub resource: &'a Resource,
    pub action: &'a Action,
    pub method: &'a str,
    /// URI template after inheritance from the resource.
    pub uri_template: &'a str,
}

impl<'a> ActionContext<'a> {
    /// Sub-examples of the given kind from the first example block.
    pub fn payloads(&self, kind: ExampleKind) -> &'a [Payload] {
        match self.action.examples.first() {
            Some(example) => match kind {
                ExampleKind::Request => &example.requests,
                ExampleKind::Response => &example.responses,
            },
            None => &[],
        }
    }
}

/// Infer the payload type name of an action, or `None` when no example or
/// inline definition names one.
///
/// The first name found wins; later examples naming a different type only
/// produce a warning.
pub fn infer_payload_type(
    ctx: &ActionContext<'_>,
    kind: ExampleKind,
    default_type: &str,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    let mut name: Option<String> = None;

    for (idx, payload) in ctx.payloads(kind).iter().enumerate() {
        let Some(candidate) = name_from_contents(&payload.content) else {
            continue;
        };
        if candidate == default_type {
            continue;
        }
        let Some(expected) = name.as_deref() else {
            name = Some(candidate);
            continue;
        };
        if expected != candidate {
            diagnostics.warn(
                DiagnosticKind::ExampleTypeMismatch,
                format!(
                    "Action {} example #{} content typename doesn't match previous entry. Expected '{}' but got '{}'. Request: {} {}",
                    kind_label(kind),
                    idx + 1,
                    expected,
                    candidate,
                    ctx.method,
                    ctx.uri_template
                ),
            );
        }
    }

    let name = name.or_else(|| name_from_contents(&ctx.action.content))?;

    // A data structure declared on the resource under the same name takes precedence.
    let overridden = ctx
        .resource
        .content
        .iter()
        .find(|entry| entry.literal_name() == Some(name.as_str()))
        .and_then(|entry| {
            name_from_contents(std::slice::from_ref(entry))
                .or_else(|| name_from_contents(entry.children()))
        });

    Some(overridden.unwrap_or(name))
}

/// Like [`infer_payload_type`], falling back to `default_type`.
pub fn resolve_payload_type(
    ctx: &ActionContext<'_>,
    kind: ExampleKind,
    default_type: &str,
    diagnostics: &mut Diagnostics,
) -> String {
    infer_payload_type(ctx, kind, default_type, diagnostics)
        .unwrap_or_else(|| default_type.to_string())
}

/// The type named by the first `dataStructure` wrapping exactly one node.
fn name_from_contents(contents: &[Element]) -> Option<String> {
    contents
        .iter()
        .find_map(|content| match content.children() {
            [single] if content.is_data_structure() => Some(type_name(single)),
            _ => None,
        })
}

fn kind_label(kind: ExampleKind) -> &'static str {
    match kind {
        ExampleKind::Request => "request",
        ExampleKind::Response => "response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::element::ElementName;
    use crate::parse::resource::TransactionExample;

    fn wrapper(kind: &str) -> Element {
        Element::new("dataStructure").with_children(vec![Element::new(kind)])
    }

    fn payload(name: &str, content: Vec<Element>) -> Payload {
        Payload {
            name: name.to_string(),
            content,
            ..Payload::default()
        }
    }

    fn action_with_responses(responses: Vec<Payload>) -> Action {
        Action {
            name: "List".to_string(),
            method: "GET".to_string(),
            examples: vec![TransactionExample {
                responses,
                ..TransactionExample::default()
            }],
            ..Action::default()
        }
    }

    fn infer(resource: &Resource, action: &Action, diags: &mut Diagnostics) -> Option<String> {
        let ctx = ActionContext {
            resource,
            action,
            method: "GET",
            uri_template: "/widgets",
        };
        infer_payload_type(&ctx, ExampleKind::Response, "Object", diags)
    }

    #[test]
    fn test_first_name_wins_and_mismatch_warns() {
        let resource = Resource::default();
        let action = action_with_responses(vec![
            payload("200", vec![wrapper("Widget")]),
            payload("200", vec![wrapper("Gadget")]),
        ]);
        let mut diags = Diagnostics::new();

        assert_eq!(infer(&resource, &action, &mut diags).as_deref(), Some("Widget"));
        assert_eq!(diags.count(DiagnosticKind::ExampleTypeMismatch), 1);
        let message = &diags.entries()[0].message;
        assert!(message.contains("#2"));
        assert!(message.contains("Expected 'Widget' but got 'Gadget'"));
        assert!(message.contains("GET /widgets"));
    }

    #[test]
    fn test_matching_examples_do_not_warn() {
        let resource = Resource::default();
        let action = action_with_responses(vec![
            payload("200", vec![wrapper("Widget")]),
            payload("201", vec![wrapper("Widget")]),
        ]);
        let mut diags = Diagnostics::new();
        assert_eq!(infer(&resource, &action, &mut diags).as_deref(), Some("Widget"));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_placeholder_candidates_are_skipped() {
        let resource = Resource::default();
        let action = action_with_responses(vec![
            payload("200", vec![wrapper("object")]),
            payload("200", vec![wrapper("Widget")]),
        ]);
        let mut diags = Diagnostics::new();
        assert_eq!(infer(&resource, &action, &mut diags).as_deref(), Some("Widget"));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_wrapper_with_several_children_is_ignored() {
        let resource = Resource::default();
        let mut ds = wrapper("Widget");
        ds.content = Some(crate::parse::element::Content::Elements(vec![
            Element::new("Widget"),
            Element::new("Gadget"),
        ]));
        let action = action_with_responses(vec![payload("200", vec![ds])]);
        let mut diags = Diagnostics::new();
        assert_eq!(infer(&resource, &action, &mut diags), None);
    }

    #[test]
    fn test_falls_back_to_action_content() {
        let resource = Resource::default();
        let action = Action {
            content: vec![Element::new("copy"), wrapper("Widget"), wrapper("Gadget")],
            ..Action::default()
        };
        let mut diags = Diagnostics::new();
        assert_eq!(infer(&resource, &action, &mut diags).as_deref(), Some("Widget"));
    }

    #[test]
    fn test_nothing_found() {
        let resource = Resource::default();
        let action = Action::default();
        let mut diags = Diagnostics::new();
        assert_eq!(infer(&resource, &action, &mut diags), None);

        let ctx = ActionContext {
            resource: &resource,
            action: &action,
            method: "GET",
            uri_template: "/widgets",
        };
        assert_eq!(
            resolve_payload_type(&ctx, ExampleKind::Response, "Object", &mut diags),
            "Object"
        );
    }

    #[test]
    fn test_resource_level_definition_overrides() {
        let mut entry = Element::new("dataStructure")
            .with_children(vec![Element::new("array").with_children(vec![Element::new("Widget")])]);
        entry.name = Some(ElementName::Literal("Widgets".to_string()));
        let resource = Resource {
            content: vec![entry],
            ..Resource::default()
        };
        let action = action_with_responses(vec![payload("200", vec![wrapper("Widgets")])]);
        let mut diags = Diagnostics::new();
        assert_eq!(
            infer(&resource, &action, &mut diags).as_deref(),
            Some("List<Widget>")
        );
    }

    #[test]
    fn test_resource_level_match_without_type_keeps_name() {
        let mut entry = Element::new("dataStructure").with_children(vec![
            Element::new("Widget"),
            Element::new("Gadget"),
        ]);
        entry.name = Some(ElementName::Literal("Widgets".to_string()));
        let resource = Resource {
            content: vec![entry],
            ..Resource::default()
        };
        let action = action_with_responses(vec![payload("200", vec![wrapper("Widgets")])]);
        let mut diags = Diagnostics::new();
        assert_eq!(infer(&resource, &action, &mut diags).as_deref(), Some("Widgets"));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_requests_read_separately() {
        let resource = Resource::default();
        let action = Action {
            examples: vec![TransactionExample {
                requests: vec![payload("", vec![wrapper("Widget Base")])],
                responses: vec![payload("200", vec![wrapper("Widget")])],
                ..TransactionExample::default()
            }],
            ..Action::default()
        };
        let ctx = ActionContext {
            resource: &resource,
            action: &action,
            method: "POST",
            uri_template: "/widgets",
        };
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve_payload_type(&ctx, ExampleKind::Request, "Object", &mut diags),
            "WidgetBase"
        );
    }
}
