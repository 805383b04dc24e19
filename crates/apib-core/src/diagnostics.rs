//! Warnings and data-integrity errors discovered while building the model.
//!
//! Nothing recorded here aborts a run. Each entry is logged the moment it is
//! recorded, so console output follows traversal order; the collected list
//! lets callers (and tests) inspect what happened afterwards.

use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The run continued using a documented fallback value.
    Warning,
    /// The offending item was skipped.
    Error,
}

/// What was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    ExampleTypeMismatch,
    MissingResponseType,
    MultipleSuccessStatuses,
    UnknownStatusCode,
    CyclicInheritance,
    UnnamedGroup,
    UnnamedModel,
    UnnamedField,
    UnsupportedMethod,
    InvalidModifierParameter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Collector threaded through every transform pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a consistency warning.
    pub fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            kind,
            message,
        });
    }

    /// Record a data-integrity error. The caller skips the offending item.
    pub fn error(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            kind,
            message,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }
}
