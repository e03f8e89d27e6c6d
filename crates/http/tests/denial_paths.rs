//! Black-box tests for the HTTP denial boundary.
//!
//! Each test drives a tiny router through the `authorize` middleware with
//! tower's `oneshot`, the same router shape a host would build.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router, middleware};
use tower::ServiceExt;

use warden_core::{PermissionExpr, Role, RoleExpr};
use warden_gate::{EnforcementConfig, Gate, ResolvedActor};
use warden_http::{DefaultMessages, GateState, Requirement, authorize};

fn state(gate: Arc<Gate<Response>>, requirement: Requirement) -> GateState {
    GateState::new(gate, Arc::new(DefaultMessages), requirement)
}

fn app(state: GateState, actor: Option<ResolvedActor>) -> Router {
    let router = Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(middleware::from_fn_with_state(state, authorize));

    // The Extension layer stands in for the host's identity middleware.
    match actor {
        Some(actor) => router.layer(Extension(actor)),
        None => router,
    }
}

fn fresh_gate() -> Arc<Gate<Response>> {
    Arc::new(Gate::new(Arc::new(EnforcementConfig::enabled())))
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

#[tokio::test]
async fn granted_permission_reaches_the_handler() {
    warden_observability::init();

    let actor = ResolvedActor::anonymous().with_permissions(["posts.edit"]);
    let state = state(
        fresh_gate(),
        Requirement::Permission(PermissionExpr::from("posts.edit")),
    );

    let response = app(state, Some(actor))
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn machine_denial_is_forbidden_json_with_the_message() {
    let actor = ResolvedActor::anonymous().with_roles(["editor"]);
    let state = state(fresh_gate(), Requirement::AnyRole(RoleExpr::from(["viewer"])));

    let request = Request::get("/")
        .header("x-requested-with", "XMLHttpRequest")
        .body(Body::empty())
        .unwrap();
    let response = app(state, Some(actor)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));
    assert!(body_string(response).await.contains("Permission denied"));
}

#[tokio::test]
async fn interactive_denial_renders_the_error_page() {
    let actor = ResolvedActor::anonymous().with_roles(["editor"]);
    let state = state(fresh_gate(), Requirement::AnyRole(RoleExpr::from(["viewer"])));

    let request = Request::get("/")
        .header(header::ACCEPT, "text/html,application/xhtml+xml")
        .body(Body::empty())
        .unwrap();
    let response = app(state, Some(actor)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(body_string(response).await.contains("Permission denied"));
}

#[tokio::test]
async fn registered_handler_owns_the_denial() {
    let gate = fresh_gate();
    gate.register_denial_handler(|| {
        (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response()
    });

    let actor = ResolvedActor::anonymous();
    let state = state(gate, Requirement::Permission(PermissionExpr::from("posts.edit")));

    let response = app(state, Some(actor))
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_string(response).await, "maintenance");
}

#[tokio::test]
async fn missing_actor_extension_fails_closed() {
    let state = state(
        fresh_gate(),
        Requirement::Permission(PermissionExpr::from("posts.edit")),
    );

    let response = app(state, None)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn free_route_skips_actor_resolution_entirely() {
    let state = state(fresh_gate(), Requirement::Free);

    let response = app(state, None)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn deny_list_blocks_the_listed_role_but_not_administrators() {
    let requirement = Requirement::DenyRole(RoleExpr::from(["banned"]));

    let banned = ResolvedActor::anonymous().with_roles(["banned"]);
    let response = app(state(fresh_gate(), requirement.clone()), Some(banned))
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = ResolvedActor::anonymous().with_roles([Role::ADMINISTRATOR, Role::new("banned")]);
    let response = app(state(fresh_gate(), requirement), Some(admin))
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
