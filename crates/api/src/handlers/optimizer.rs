//! Handler for the host group efficiency endpoint.

use axum::extract::State;
use axum::Json;

use mta_core::{classifier, threshold};

use crate::error::AppResult;
use crate::response::OptimizerResponse;
use crate::state::AppState;

/// GET /mta-hosting-optimizer
///
/// Resolves the threshold from configuration on every call and returns the
/// names of host groups with at most that many active addresses.
pub async fn get_inefficient_hosts(
    State(state): State<AppState>,
) -> AppResult<Json<OptimizerResponse>> {
    let key = state.config.threshold_key.as_str();
    let threshold = threshold::resolve_threshold(state.config_source.as_ref(), key)?;

    let result = classifier::classify(&state.inventory, threshold);
    tracing::debug!(threshold, inefficient = result.len(), "Classified host groups");

    Ok(Json(OptimizerResponse::success(result)))
}
