//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CERTREG API — Certificate Registry",
        version = "0.1.0",
        description = "Append-only, content-addressed certificate ownership ledger: one-time registration, existence checks, owner lookups, and per-owner counts.",
        license(name = "BUSL-1.1")
    ),
    paths(
        // Certificates
        crate::routes::certificates::register_certificate,
        crate::routes::certificates::get_certificate,
        crate::routes::certificates::certificate_exists,
        // Owners
        crate::routes::owners::get_certificate_count,
    ),
    components(schemas(
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // Certificate DTOs
        crate::routes::certificates::RegisterCertificateRequest,
        crate::routes::certificates::CertificateResponse,
        crate::routes::certificates::ExistsResponse,
        // Owner DTOs
        crate::routes::owners::OwnerCountResponse,
    )),
    tags(
        (name = "certificates", description = "Certificate registration and lookup"),
        (name = "owners", description = "Per-owner queries"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_contains_all_operations() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/v1/certificates"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/certificates/{hash}"));
        assert!(paths
            .iter()
            .any(|p| p.as_str() == "/v1/certificates/{hash}/exists"));
        assert!(paths
            .iter()
            .any(|p| p.as_str() == "/v1/owners/{owner}/certificates/count"));
    }
}
