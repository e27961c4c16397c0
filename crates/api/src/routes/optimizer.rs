use axum::routing::get;
use axum::Router;

use crate::handlers::optimizer;
use crate::state::AppState;

/// Path of the optimizer endpoint.
pub const OPTIMIZER_PATH: &str = "/mta-hosting-optimizer";

/// Mount the optimizer route. Only GET is accepted.
pub fn router() -> Router<AppState> {
    Router::new().route(OPTIMIZER_PATH, get(optimizer::get_inefficient_hosts))
}
