use axum::{routing::get, Router};

use crate::state::AppState;

pub const PLACEHOLDER: &str = "rosters: not implemented yet";

pub fn rosters_routes() -> Router<AppState> {
    Router::new()
        .route("/rosters", get(list_rosters))
        .route("/rosters/", get(list_rosters))
}

pub async fn list_rosters() -> &'static str {
    PLACEHOLDER
}
