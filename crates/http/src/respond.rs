use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;
use tracing::debug;

use warden_gate::{DenialOutcome, Gate};

use crate::classify::RequestKind;
use crate::messages::MessageSource;

/// Forbidden status + JSON body, for machine/background callers.
pub fn forbidden_response(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        axum::Json(json!({
            "error": "forbidden",
            "message": message,
        })),
    )
        .into_response()
}

/// Rendered denial view, for interactive page loads.
pub fn denial_page(message: &str) -> Response {
    let body = format!(
        "<!doctype html>\n<html>\n<head><title>403 Forbidden</title></head>\n\
         <body>\n<h1>403</h1>\n<p>{message}</p>\n</body>\n</html>\n"
    );
    (StatusCode::FORBIDDEN, Html(body)).into_response()
}

/// Resolve a denial into its terminating response.
///
/// A registered handler wins outright and neither default path runs.
/// Otherwise the request kind selects between the forbidden JSON body and
/// the rendered denial page, both carrying the same localized message.
pub fn denial_response(
    gate: &Gate<Response>,
    kind: RequestKind,
    messages: &dyn MessageSource,
) -> Response {
    match gate.denial() {
        DenialOutcome::Custom(response) => response,
        DenialOutcome::Default => {
            debug!(?kind, "authorization denied");
            let message = messages.denial_message();
            match kind {
                RequestKind::Machine => forbidden_response(&message),
                RequestKind::Interactive => denial_page(&message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::header;

    use warden_gate::EnforcementConfig;

    use super::*;
    use crate::messages::DefaultMessages;

    fn gate() -> Gate<Response> {
        Gate::new(Arc::new(EnforcementConfig::enabled()))
    }

    #[test]
    fn machine_denial_is_forbidden_json() {
        let response = denial_response(&gate(), RequestKind::Machine, &DefaultMessages);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("application/json"));
    }

    #[test]
    fn interactive_denial_is_a_rendered_page() {
        let response = denial_response(&gate(), RequestKind::Interactive, &DefaultMessages);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[test]
    fn registered_handler_replaces_both_defaults() {
        let gate = gate();
        gate.register_denial_handler(|| {
            (StatusCode::IM_A_TEAPOT, "handled").into_response()
        });

        let response = denial_response(&gate, RequestKind::Machine, &DefaultMessages);
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);

        let response = denial_response(&gate, RequestKind::Interactive, &DefaultMessages);
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
