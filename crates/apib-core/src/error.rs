use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse AST YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse AST JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid resource modifier pattern `{pattern}`: {source}")]
    InvalidModifierPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
