//! Input side: the AST emitted by the external API Blueprint parser.
//!
//! Parsing the blueprint markup itself is the parser's job. These types only
//! describe its output so it can be read from JSON or YAML; unknown keys are
//! ignored and missing collections default to empty.

pub mod document;
pub mod element;
pub mod resource;

use crate::error::ParseError;
use document::ApiDocument;

/// Read a parsed blueprint AST from JSON.
pub fn from_json(input: &str) -> Result<ApiDocument, ParseError> {
    let document: ApiDocument = serde_json::from_str(input)?;
    Ok(document)
}

/// Read a parsed blueprint AST from YAML.
pub fn from_yaml(input: &str) -> Result<ApiDocument, ParseError> {
    let document: ApiDocument = serde_yaml_ng::from_str(input)?;
    Ok(document)
}
