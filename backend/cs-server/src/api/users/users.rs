//! Name registry endpoints used by device clients
//!
//! - `POST /api/user/check-name` answers whether a name is free for an identity
//! - `POST /api/user/sync` binds an identity to a name, once
//! - `GET /api/user/{identity}` resolves an identity to its profile

use crate::api::validation::{parse_identity, require_text};
use crate::{ApiError, ApiResult, AppState};

use cs_core::{CheckNameRequest, CheckNameResponse, Profile, SyncRequest, SyncResponse};
use cs_db::{BindOutcome, NameRegistryRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::info;

/// POST /api/user/check-name
pub async fn check_name(
    State(state): State<AppState>,
    payload: Result<Json<CheckNameRequest>, JsonRejection>,
) -> ApiResult<Json<CheckNameResponse>> {
    let Json(req) = payload?;
    require_text("name", &req.name, state.validation.max_name_length)?;

    let repo = NameRegistryRepository::new(state.pool.clone());
    let available = repo.check_availability(&req.name, &req.identity).await?;

    Ok(Json(CheckNameResponse {
        available,
        error: (!available).then(|| format!("Name '{}' is already taken", req.name)),
    }))
}

/// POST /api/user/sync
///
/// Binding is one-time: a second sync with the same name is an idempotent
/// success, a different name is ALREADY_BOUND.
pub async fn sync_user(
    State(state): State<AppState>,
    payload: Result<Json<SyncRequest>, JsonRejection>,
) -> ApiResult<Json<SyncResponse>> {
    let Json(req) = payload?;
    let identity = parse_identity(&req.identity)?;
    require_text("name", &req.name, state.validation.max_name_length)?;
    require_text("class", &req.class, state.validation.max_class_length)?;

    let repo = NameRegistryRepository::new(state.pool.clone());
    match repo.bind(&identity, &req.name, &req.class).await? {
        BindOutcome::Bound(user) => {
            info!("Bound {} to '{}' ({})", identity, user.name, user.class);
            Ok(Json(SyncResponse {
                success: true,
                user,
            }))
        }
        BindOutcome::AlreadyOwned(user) => Ok(Json(SyncResponse {
            success: true,
            user,
        })),
        BindOutcome::NameConflict => Err(ApiError::name_conflict(format!(
            "Name '{}' is already taken",
            req.name
        ))),
        BindOutcome::AlreadyBound { existing } => Err(ApiError::already_bound(format!(
            "Identity is already bound to '{}'",
            existing.name
        ))),
    }
}

/// GET /api/user/{identity}
pub async fn get_user(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> ApiResult<Json<Profile>> {
    let identity = parse_identity(&identity)?;

    let repo = NameRegistryRepository::new(state.pool.clone());
    let profile = repo
        .resolve(&identity)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Identity {} is not bound", identity)))?;

    Ok(Json(profile))
}
