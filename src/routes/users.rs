use axum::{routing::get, Router};

use crate::state::AppState;

pub const PLACEHOLDER: &str = "users: not implemented yet";

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/", get(list_users))
}

pub async fn list_users() -> &'static str {
    PLACEHOLDER
}
