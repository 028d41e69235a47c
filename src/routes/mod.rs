//! Stateless stub resources. They hold no data and answer with fixed text.

pub mod factions;
pub mod rosters;
pub mod users;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(factions::factions_routes())
        .merge(rosters::rosters_routes())
        .merge(users::users_routes())
}
