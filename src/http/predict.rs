//! Soil health prediction endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::soil::{SoilHealthVerdict, SoilSample};

/// Route for the prediction endpoint.
pub const PREDICT_PATH: &str = "/soil-health/predict";

/// Relay one sample upstream and return the verdict as-is.
pub async fn predict_soil_health(
    State(state): State<AppState>,
    payload: Result<Json<SoilSample>, JsonRejection>,
) -> Result<Json<SoilHealthVerdict>, ApiError> {
    let Json(sample) = payload?;
    let verdict = state.relay.predict(&sample).await?;
    Ok(Json(verdict))
}
