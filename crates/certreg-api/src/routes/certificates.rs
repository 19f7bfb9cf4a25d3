//! # Certificate Routes
//!
//! Registration and lookup endpoints keyed by certificate hash.
//!
//! ## Endpoints
//!
//! - `POST /v1/certificates` — register a certificate (one-time binding)
//! - `GET /v1/certificates/:hash` — owner/timestamp lookup
//! - `GET /v1/certificates/:hash/exists` — existence check

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use certreg_core::{CertificateHash, OwnerId};
use certreg_ledger::CertificateRecord;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// Request to register a certificate.
///
/// The owner is an explicit field rather than being derived from the
/// transport: the bearer token authenticates the client, the `owner`
/// field names the principal the certificate is bound to.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterCertificateRequest {
    /// Certificate hash, 64 hex characters.
    pub hash: String,
    /// Identifier of the registering principal.
    pub owner: String,
}

impl Validate for RegisterCertificateRequest {
    fn validate(&self) -> Result<(), String> {
        if self.hash.trim().is_empty() {
            return Err("hash must not be empty".to_string());
        }
        if self.owner.trim().is_empty() {
            return Err("owner must not be empty".to_string());
        }
        Ok(())
    }
}

/// A registered certificate as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateResponse {
    /// Certificate hash, lowercase hex.
    pub hash: String,
    /// The principal that registered the certificate.
    pub owner: String,
    /// When the registration was accepted (ISO8601, UTC).
    pub registered_at: String,
    /// The same instant as Unix epoch seconds.
    pub registered_at_epoch: i64,
}

impl CertificateResponse {
    fn from_record(hash: &CertificateHash, record: &CertificateRecord) -> Self {
        Self {
            hash: hash.to_hex(),
            owner: record.owner.to_string(),
            registered_at: record.registered_at.to_iso8601(),
            registered_at_epoch: record.registered_at.epoch_secs(),
        }
    }
}

/// Existence check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExistsResponse {
    /// Certificate hash, lowercase hex.
    pub hash: String,
    /// Whether the hash has been registered.
    pub exists: bool,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the certificates router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/certificates", post(register_certificate))
        .route("/v1/certificates/:hash", get(get_certificate))
        .route("/v1/certificates/:hash/exists", get(certificate_exists))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/certificates — Register a certificate.
#[utoipa::path(
    post,
    path = "/v1/certificates",
    request_body = RegisterCertificateRequest,
    responses(
        (status = 201, description = "Certificate registered", body = CertificateResponse),
        (status = 409, description = "Hash already registered", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed hash or owner", body = crate::error::ErrorBody),
    ),
    tag = "certificates"
)]
pub async fn register_certificate(
    State(state): State<AppState>,
    body: Result<Json<RegisterCertificateRequest>, JsonRejection>,
) -> Result<(axum::http::StatusCode, Json<CertificateResponse>), AppError> {
    let req = extract_validated_json(body)?;
    let hash = CertificateHash::parse(&req.hash)?;
    let owner = OwnerId::new(req.owner)?;

    let record = state.registry.register(hash, owner)?;
    tracing::info!(%hash, owner = %record.owner, "certificate registered");

    Ok((
        axum::http::StatusCode::CREATED,
        Json(CertificateResponse::from_record(&hash, &record)),
    ))
}

/// GET /v1/certificates/:hash — Look up owner and registration time.
#[utoipa::path(
    get,
    path = "/v1/certificates/{hash}",
    params(("hash" = String, Path, description = "Certificate hash (64 hex characters)")),
    responses(
        (status = 200, description = "Certificate found", body = CertificateResponse),
        (status = 404, description = "Hash not registered", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed hash", body = crate::error::ErrorBody),
    ),
    tag = "certificates"
)]
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<CertificateResponse>, AppError> {
    let hash = CertificateHash::parse(&hash)?;
    let record = state.registry.owner_of(&hash)?;
    Ok(Json(CertificateResponse::from_record(&hash, &record)))
}

/// GET /v1/certificates/:hash/exists — Check whether a hash is registered.
#[utoipa::path(
    get,
    path = "/v1/certificates/{hash}/exists",
    params(("hash" = String, Path, description = "Certificate hash (64 hex characters)")),
    responses(
        (status = 200, description = "Existence result", body = ExistsResponse),
        (status = 422, description = "Malformed hash", body = crate::error::ErrorBody),
    ),
    tag = "certificates"
)]
pub async fn certificate_exists(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<ExistsResponse>, AppError> {
    let hash = CertificateHash::parse(&hash)?;
    Ok(Json(ExistsResponse {
        hash: hash.to_hex(),
        exists: state.registry.exists(&hash),
    }))
}
