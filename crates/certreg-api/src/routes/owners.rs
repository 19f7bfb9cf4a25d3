//! # Owner Routes
//!
//! Per-owner query endpoints.
//!
//! ## Endpoints
//!
//! - `GET /v1/owners/:owner/certificates/count` — number of certificates
//!   an owner has registered (0 for an unknown owner; absence is not an
//!   error here, unlike the certificate lookup).

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use certreg_core::OwnerId;

use crate::error::AppError;
use crate::state::AppState;

/// Per-owner certificate count response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OwnerCountResponse {
    /// The queried owner identifier.
    pub owner: String,
    /// Number of certificates this owner has registered.
    pub count: u64,
}

/// Build the owners router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/v1/owners/:owner/certificates/count",
        get(get_certificate_count),
    )
}

/// GET /v1/owners/:owner/certificates/count — Per-owner certificate count.
#[utoipa::path(
    get,
    path = "/v1/owners/{owner}/certificates/count",
    params(("owner" = String, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Certificate count", body = OwnerCountResponse),
        (status = 422, description = "Malformed owner identifier", body = crate::error::ErrorBody),
    ),
    tag = "owners"
)]
pub async fn get_certificate_count(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<OwnerCountResponse>, AppError> {
    let owner = OwnerId::new(owner)?;
    Ok(Json(OwnerCountResponse {
        count: state.registry.owner_count(&owner),
        owner: owner.to_string(),
    }))
}
