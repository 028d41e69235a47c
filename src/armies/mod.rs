mod dto;
pub mod errors;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use repo::{ArmyStore, PgArmyStore};
pub use services::ArmyService;

pub fn router() -> Router<AppState> {
    handlers::army_routes()
}
