//! Router assembly for the catalog service

use crate::core::service::ShipService;
use crate::server::rest::{
    AppState, count_ships, create_ship, delete_ship, get_ship, list_ships, update_ship,
};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router
///
/// Ship routes live under `/rest/ships`; health probes at `/health` and
/// `/healthz`. Requests are traced and CORS is permissive, matching a
/// service that sits behind its own front end.
pub fn build_router(ships: Arc<ShipService>) -> Router {
    let state = AppState { ships };

    let ship_routes = Router::new()
        .route("/rest/ships", get(list_ships).post(create_ship))
        .route("/rest/ships/count", get(count_ships))
        .route(
            "/rest/ships/{id}",
            get(get_ship).post(update_ship).delete(delete_ship),
        )
        .with_state(state);

    health_routes()
        .merge(ship_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "spacedock"
    }))
}
