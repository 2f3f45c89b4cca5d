//! Axum router wiring (HTTP glue over store + engine).
//!
//! Transport shapes only; all semantics live in `store` and `engine`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    routing::post,
    Json, Router,
};
use serde_json::json;

use tagwarden_core::error::{ClientCode, TagWardenError};
use tagwarden_core::policy::PolicyDraft;

use crate::store::PolicyStore;

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/policies",
            get(list_policies).post(upsert_policy).delete(clear_policies),
        )
        .route("/apply", post(apply))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}

/// JSON error envelope keyed by stable client code.
struct ApiError(TagWardenError);

impl From<TagWardenError> for ApiError {
    fn from(e: TagWardenError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": { "code": code.as_str(), "message": self.0.to_string() }
        }));
        (status, body).into_response()
    }
}

async fn list_policies(State(state): State<AppState>) -> Response {
    Json(json!({ "policies": state.store().list() })).into_response()
}

async fn upsert_policy(
    State(state): State<AppState>,
    Json(draft): Json<PolicyDraft>,
) -> Result<Response, ApiError> {
    let stored = state.store().upsert(draft)?;
    state.metrics().policy_upserts.inc();
    Ok(Json(json!({ "policy": stored })).into_response())
}

async fn clear_policies(State(state): State<AppState>) -> Response {
    state.store().clear();
    state.metrics().policy_clears.inc();
    Json(json!({ "ok": true })).into_response()
}

async fn apply(State(state): State<AppState>) -> Result<Response, ApiError> {
    let applied = state.engine().apply().await?;
    Ok(Json(json!({ "applied": applied })).into_response())
}
