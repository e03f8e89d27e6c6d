use axum::http::{HeaderMap, header};

/// How the inbound request should be answered on denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// API/background traffic: answered with a forbidden status + JSON body.
    Machine,
    /// Page load: answered with a rendered denial view.
    Interactive,
}

const X_REQUESTED_WITH: &str = "x-requested-with";

/// Classify a request from its headers.
///
/// `X-Requested-With: XMLHttpRequest` or a JSON-first `Accept` header marks
/// machine traffic; everything else is treated as an interactive page load.
pub fn classify(headers: &HeaderMap) -> RequestKind {
    let xhr = headers
        .get(X_REQUESTED_WITH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("xmlhttprequest"));
    if xhr {
        return RequestKind::Machine;
    }

    let json_first = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .and_then(|accept| accept.split(',').next())
        .is_some_and(|first| first.trim().contains("json"));

    if json_first {
        RequestKind::Machine
    } else {
        RequestKind::Interactive
    }
}
