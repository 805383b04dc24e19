use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parse::resource::Payload;

/// A Spring `HttpStatus` constant for a 2xx code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub code: u16,
    pub name: &'static str,
    pub display_name: &'static str,
    /// Spring responds with this status when a handler carries no annotation.
    pub is_default: bool,
}

impl StatusDescriptor {
    const fn new(code: u16, name: &'static str, display_name: &'static str) -> Self {
        Self {
            code,
            name,
            display_name,
            is_default: false,
        }
    }

    /// The `@ResponseStatus` annotation selecting this status.
    pub fn annotation(&self) -> String {
        format!(
            "@ResponseStatus(org.springframework.http.HttpStatus.{})",
            self.name
        )
    }
}

const SUCCESS_STATUSES: &[StatusDescriptor] = &[
    StatusDescriptor {
        is_default: true,
        ..StatusDescriptor::new(200, "OK", "OK")
    },
    StatusDescriptor::new(201, "CREATED", "Created"),
    StatusDescriptor::new(202, "ACCEPTED", "Accepted"),
    StatusDescriptor::new(
        203,
        "NON_AUTHORITATIVE_INFORMATION",
        "Non-Authoritative Information",
    ),
    StatusDescriptor::new(204, "NO_CONTENT", "No Content"),
    StatusDescriptor::new(205, "RESET_CONTENT", "Reset Content"),
    StatusDescriptor::new(206, "PARTIAL_CONTENT", "Partial Content"),
    StatusDescriptor::new(207, "MULTI_STATUS", "Multi-Status"),
    StatusDescriptor::new(208, "ALREADY_REPORTED", "Already Reported"),
    StatusDescriptor::new(226, "IM_USED", "IM Used"),
];

/// Look up the descriptor for a status code.
pub fn from_status_code(code: u16) -> Option<&'static StatusDescriptor> {
    SUCCESS_STATUSES.iter().find(|s| s.code == code)
}

/// The 2xx status codes named by response examples, in declaration order.
///
/// A response name counts when it starts with a decimal number; anything
/// else is ignored.
pub fn success_status_codes(responses: &[Payload]) -> Vec<u16> {
    responses
        .iter()
        .filter_map(|r| leading_integer(&r.name))
        .filter(|code| (200..300).contains(code))
        .collect()
}

/// Pick the status to annotate an action with.
pub fn select_response_status(
    codes: &[u16],
    uri_template: &str,
    diagnostics: &mut Diagnostics,
) -> Option<&'static StatusDescriptor> {
    let &first = codes.first()?;
    if codes.len() > 1 {
        diagnostics.warn(
            DiagnosticKind::MultipleSuccessStatuses,
            format!(
                "More than 1 2xx return status defined for action {uri_template} - will use the first ({first})"
            ),
        );
    }
    let status = from_status_code(first);
    if status.is_none() {
        diagnostics.warn(
            DiagnosticKind::UnknownStatusCode,
            format!("Unknown status code {first} for action {uri_template}"),
        );
    }
    status
}

fn leading_integer(name: &str) -> Option<u16> {
    let trimmed = name.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(names: &[&str]) -> Vec<Payload> {
        names
            .iter()
            .map(|n| Payload {
                name: n.to_string(),
                ..Payload::default()
            })
            .collect()
    }

    #[test]
    fn test_only_2xx_codes_kept() {
        let codes = success_status_codes(&responses(&["200", "404", "abc", "299", "199", ""]));
        assert_eq!(codes, vec![200, 299]);
    }

    #[test]
    fn test_leading_digits_parsed() {
        let codes = success_status_codes(&responses(&["201 (application/json)"]));
        assert_eq!(codes, vec![201]);
    }

    #[test]
    fn test_default_status() {
        let ok = from_status_code(200).unwrap();
        assert!(ok.is_default);
        assert_eq!(ok.name, "OK");
        assert!(!from_status_code(201).unwrap().is_default);
        assert!(from_status_code(250).is_none());
    }

    #[test]
    fn test_annotation_text() {
        assert_eq!(
            from_status_code(204).unwrap().annotation(),
            "@ResponseStatus(org.springframework.http.HttpStatus.NO_CONTENT)"
        );
    }

    #[test]
    fn test_multiple_codes_use_first() {
        let mut diags = Diagnostics::new();
        let codes = success_status_codes(&responses(&["201", "204"]));
        assert_eq!(codes, vec![201, 204]);

        let status = select_response_status(&codes, "/coupons", &mut diags).unwrap();
        assert_eq!(status.code, 201);
        assert_eq!(diags.count(DiagnosticKind::MultipleSuccessStatuses), 1);
    }

    #[test]
    fn test_unknown_code_warns() {
        let mut diags = Diagnostics::new();
        assert!(select_response_status(&[299], "/coupons", &mut diags).is_none());
        assert_eq!(diags.count(DiagnosticKind::UnknownStatusCode), 1);
    }

    #[test]
    fn test_no_codes_no_status() {
        let mut diags = Diagnostics::new();
        assert!(select_response_status(&[], "/coupons", &mut diags).is_none());
        assert!(diags.is_empty());
    }
}
