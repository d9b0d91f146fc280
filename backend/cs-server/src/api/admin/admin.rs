//! Administrative overrides of the one-time binding rule.

use crate::api::validation::parse_identity;
use crate::{AdminToken, ApiError, ApiResult, AppState};

use cs_core::{Profile, ReleaseResponse, SetRoleRequest};
use cs_db::NameRegistryRepository;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::info;

/// POST /api/admin/user/{identity}/release
///
/// Deletes the binding so the name is free again. The device keeps its token
/// and cached profile until it is reconciled or reset.
pub async fn release_user(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> ApiResult<Json<ReleaseResponse>> {
    let identity = parse_identity(&identity)?;

    let repo = NameRegistryRepository::new(state.pool.clone());
    if !repo.release(&identity).await? {
        return Err(ApiError::not_found(format!(
            "Identity {} is not bound",
            identity
        )));
    }

    info!("Admin released binding for {}", identity);

    Ok(Json(ReleaseResponse {
        success: true,
        identity,
    }))
}

/// PUT /api/admin/user/{identity}/role
pub async fn set_user_role(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(identity): Path<String>,
    payload: Result<Json<SetRoleRequest>, JsonRejection>,
) -> ApiResult<Json<Profile>> {
    let identity = parse_identity(&identity)?;
    let Json(req) = payload?;

    let repo = NameRegistryRepository::new(state.pool.clone());
    let profile = repo
        .set_role(&identity, req.role)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Identity {} is not bound", identity)))?;

    info!("Admin set role of {} to {}", identity, req.role.as_str());

    Ok(Json(profile))
}
