use crate::domain::entities::User;
use crate::domain::errors::Failure;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{FindUserUseCase, ParseProbeUseCase};
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::Value;

// Index endpoint; the probe literal never parses, so this always raises.
#[tracing::instrument(name = "index", skip_all)]
pub async fn index() -> Result<String, Failure> {
    let value = ParseProbeUseCase::default().execute()?;
    tracing::debug!(value, "probe parsed");
    Ok("ok 200".to_string())
}

// Lookup that raises on a miss and lets the dispatcher answer.
#[tracing::instrument(name = "show_user", skip_all, fields(user_id = id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Failure> {
    let use_case = FindUserUseCase {
        repository: state.repository(),
    };

    let user = use_case.execute(id).await?;
    tracing::debug!(user_id = user.id, "user found");

    // Serialize up front so a write fault is dispatched like any other failure.
    let body = serde_json::to_value(&user)?;
    Ok(Json(body))
}

// Lookup that answers a miss itself with an empty 404.
#[tracing::instrument(name = "show_user_v2", skip_all, fields(user_id = id))]
pub async fn show_v2(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, StatusCode> {
    let use_case = FindUserUseCase {
        repository: state.repository(),
    };

    use_case.find(id).await.map(Json).ok_or_else(|| {
        tracing::debug!("user not found");
        StatusCode::NOT_FOUND
    })
}

// Router fallback for anything that is not mapped.
pub async fn route_not_found(method: Method, uri: Uri) -> Failure {
    Failure::route_not_found(method.as_str(), uri.path())
}
