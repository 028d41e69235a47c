use std::sync::Arc;

use sqlx::PgPool;

use crate::armies::{ArmyService, ArmyStore, PgArmyStore};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub armies: ArmyService,
}

impl AppState {
    pub fn init(config: &AppConfig, db: PgPool) -> Self {
        let store = Arc::new(PgArmyStore::new(db, config.query_timeout())) as Arc<dyn ArmyStore>;
        Self::from_parts(store)
    }

    pub fn from_parts(store: Arc<dyn ArmyStore>) -> Self {
        Self {
            armies: ArmyService::new(store),
        }
    }

    #[cfg(test)]
    pub fn fake() -> (Self, Arc<crate::armies::repo::memory::MemoryArmyStore>) {
        let store = Arc::new(crate::armies::repo::memory::MemoryArmyStore::default());
        (Self::from_parts(store.clone()), store)
    }
}
