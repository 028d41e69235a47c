use axum::{routing::get, Router};

use crate::state::AppState;

pub const PLACEHOLDER: &str = "factions: not implemented yet";

pub fn factions_routes() -> Router<AppState> {
    Router::new()
        .route("/factions", get(list_factions))
        .route("/factions/", get(list_factions))
}

pub async fn list_factions() -> &'static str {
    PLACEHOLDER
}
