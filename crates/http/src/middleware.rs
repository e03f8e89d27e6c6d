use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use warden_core::{PermissionExpr, RoleExpr};
use warden_gate::{Gate, ResolvedActor};

use crate::classify;
use crate::messages::MessageSource;
use crate::respond::denial_response;

/// Per-route authorization requirement.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// All listed permissions must be held.
    Permission(PermissionExpr),
    /// At least one listed role must be held.
    AnyRole(RoleExpr),
    /// None of the listed roles may be held.
    DenyRole(RoleExpr),
    /// No authorization required.
    Free,
}

/// Shared state for [`authorize`], cloned per route.
#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<Gate<Response>>,
    pub messages: Arc<dyn MessageSource>,
    pub requirement: Requirement,
}

impl GateState {
    pub fn new(
        gate: Arc<Gate<Response>>,
        messages: Arc<dyn MessageSource>,
        requirement: Requirement,
    ) -> Self {
        Self {
            gate,
            messages,
            requirement,
        }
    }
}

/// Route middleware: evaluate the requirement against the request's
/// [`ResolvedActor`] extension, short-circuiting with the denial response.
///
/// The identity layer is expected to insert the actor upstream; a missing
/// extension is evaluated as the anonymous actor, so every non-exempt check
/// fails closed.
pub async fn authorize(State(state): State<GateState>, req: Request, next: Next) -> Response {
    let anonymous = ResolvedActor::anonymous();
    let actor = req
        .extensions()
        .get::<ResolvedActor>()
        .unwrap_or(&anonymous);

    let decision = match &state.requirement {
        Requirement::Permission(expr) => state.gate.check_permission(actor, expr.clone()),
        Requirement::AnyRole(roles) => state.gate.allow(actor, roles.clone()),
        Requirement::DenyRole(roles) => state.gate.deny(actor, roles.clone()),
        Requirement::Free => state.gate.free(),
    };

    match decision {
        Ok(()) => next.run(req).await,
        Err(_denied) => {
            let kind = classify::classify(req.headers());
            denial_response(&state.gate, kind, state.messages.as_ref())
        }
    }
}
