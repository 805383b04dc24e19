use serde::{Deserialize, Serialize};

/// Element kind wrapping a named data-structure definition.
pub const DATA_STRUCTURE: &str = "dataStructure";
/// Element kind of an object member (field).
pub const MEMBER: &str = "member";

/// A generic document node: data structures, members, values and the
/// categories that group them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub element: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ElementName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ElementMeta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// An element name: either a plain string or a symbol with its literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementName {
    Literal(String),
    Symbol {
        literal: String,
        #[serde(default)]
        variable: bool,
    },
}

impl ElementName {
    pub fn literal(&self) -> &str {
        match self {
            ElementName::Literal(s) => s,
            ElementName::Symbol { literal, .. } => literal,
        }
    }
}

/// Element metadata. `id` names a data-structure definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The `content` of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Child elements.
    Elements(Vec<Element>),
    /// A `member` element's key/value pair.
    Member(Box<MemberContent>),
    /// A scalar leaf (or any other value the parser emits).
    Value(serde_json::Value),
}

/// Key and value of an object member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberContent {
    pub key: Element,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Element>,
}

impl Element {
    /// A bare element of the given kind, with no content.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            element: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(ElementMeta::default).id = Some(id.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.content = Some(Content::Elements(children));
        self
    }

    pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.content = Some(Content::Value(value.into()));
        self
    }

    /// A `member` element with a string key and optional value element.
    pub fn member(key: impl Into<String>, value: Option<Element>) -> Self {
        let key: String = key.into();
        Self {
            element: MEMBER.to_string(),
            content: Some(Content::Member(Box::new(MemberContent {
                key: Element::new("string").with_value(key),
                value,
            }))),
            ..Self::default()
        }
    }

    /// Child elements, or an empty slice when the content is not a list.
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Some(Content::Elements(children)) => children,
            _ => &[],
        }
    }

    pub fn is_data_structure(&self) -> bool {
        self.element == DATA_STRUCTURE
    }

    /// The literal text of the element's `name`, if any.
    pub fn literal_name(&self) -> Option<&str> {
        self.name.as_ref().map(ElementName::literal)
    }

    /// The definition id from `meta.id`.
    pub fn id(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|m| m.id.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// Free-text description from `meta.description`, falling back to `description`.
    pub fn meta_description(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|m| m.description.as_deref())
            .or(self.description.as_deref())
    }

    pub fn member_content(&self) -> Option<&MemberContent> {
        match &self.content {
            Some(Content::Member(member)) => Some(member),
            _ => None,
        }
    }

    /// The scalar string content of the element, if it has one.
    pub fn string_value(&self) -> Option<&str> {
        match &self.content {
            Some(Content::Value(serde_json::Value::String(s))) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_variants() {
        let json = r#"[
            {"element": "array", "content": [{"element": "Coupon"}]},
            {"element": "member", "content": {"key": {"element": "string", "content": "id"}, "value": {"element": "string", "content": "250FF"}}},
            {"element": "number", "content": 25},
            {"element": "object", "content": null}
        ]"#;
        let elements: Vec<Element> = serde_json::from_str(json).unwrap();

        assert_eq!(elements[0].children().len(), 1);
        assert_eq!(elements[0].children()[0].element, "Coupon");

        let member = elements[1].member_content().expect("member content");
        assert_eq!(member.key.string_value(), Some("id"));
        assert_eq!(
            member.value.as_ref().and_then(Element::string_value),
            Some("250FF")
        );

        assert!(matches!(elements[2].content, Some(Content::Value(_))));
        assert!(elements[3].content.is_none());
        assert!(elements[3].children().is_empty());
    }

    #[test]
    fn test_element_name_forms() {
        let plain: Element =
            serde_json::from_str(r#"{"element": "dataStructure", "name": "Coupon"}"#).unwrap();
        assert_eq!(plain.literal_name(), Some("Coupon"));

        let symbol: Element = serde_json::from_str(
            r#"{"element": "dataStructure", "name": {"literal": "Coupon", "variable": false}}"#,
        )
        .unwrap();
        assert_eq!(symbol.literal_name(), Some("Coupon"));
    }

    #[test]
    fn test_empty_id_is_none() {
        let el: Element =
            serde_json::from_str(r#"{"element": "object", "meta": {"id": ""}}"#).unwrap();
        assert_eq!(el.id(), None);
        assert_eq!(Element::new("object").with_id("Coupon").id(), Some("Coupon"));
    }
}
