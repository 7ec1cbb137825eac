//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::geo::haversine_km;
use crate::server::state::AppState;
use crate::shipping::{pricing, Address, Quote, ShippingConfig};

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/shipping/calculate", post(calculate_handler))
        .route("/api/shipping/config", get(shipping_config_handler))
        .route(
            "/api/admin/shipping",
            get(admin_get_shipping_handler).put(admin_put_shipping_handler),
        )
        .route("/api/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,

    /// Field-level validation failures, when applicable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// One field-level validation failure
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (code, fields) = match &err {
            Error::InvalidCoordinates(_) => ("INVALID_COORDINATES", Vec::new()),
            Error::InvalidShippingConfig(errors) => (
                "INVALID_CONFIG",
                errors
                    .iter()
                    .map(|e| FieldError {
                        field: e.field().to_string(),
                        reason: e.to_string(),
                    })
                    .collect(),
            ),
            Error::Config(_) => ("CONFIG_ERROR", Vec::new()),
            _ => ("INTERNAL_ERROR", Vec::new()),
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
            fields,
        }
    }
}

/// Calculate request body
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Destination address; must carry lat/lng
    pub address: Address,
}

/// Shipping quote endpoint
///
/// POST /api/shipping/calculate
async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<Quote>, ApiError> {
    let dest = req.address.coordinates().map_err(ApiError::from)?;

    // One snapshot for the whole request: distance and pricing must not
    // mix two configurations if an admin replace lands mid-flight.
    let config = state.store.get();
    let distance = haversine_km(config.store_coordinates(), dest);

    Ok(Json(pricing::quote(distance, &config)))
}

/// Current shipping configuration (public read)
///
/// GET /api/shipping/config
async fn shipping_config_handler(State(state): State<Arc<AppState>>) -> Json<ShippingConfig> {
    Json((*state.store.get()).clone())
}

/// Current shipping configuration (admin; authorization is enforced by the
/// reverse proxy / auth layer in front of this service)
///
/// GET /api/admin/shipping
async fn admin_get_shipping_handler(State(state): State<Arc<AppState>>) -> Json<ShippingConfig> {
    Json((*state.store.get()).clone())
}

/// Replace the shipping configuration
///
/// PUT /api/admin/shipping
///
/// Takes a full configuration value; on validation failure the response
/// lists every bad field and the previous configuration stays active.
async fn admin_put_shipping_handler(
    State(state): State<Arc<AppState>>,
    Json(candidate): Json<ShippingConfig>,
) -> Result<Json<ShippingConfig>, ApiError> {
    let installed = state.store.replace(candidate).map_err(ApiError::from)?;
    Ok(Json((*installed).clone()))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
