use std::sync::Arc;

use super::errors::ArmyResult;
use super::repo::ArmyStore;
use super::repo_types::{Army, ArmyChanges, NewArmy};

/// Seam between handlers and the store. Forwards every call unchanged.
#[derive(Clone)]
pub struct ArmyService {
    store: Arc<dyn ArmyStore>,
}

impl ArmyService {
    pub fn new(store: Arc<dyn ArmyStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> ArmyResult<Vec<Army>> {
        self.store.list().await
    }

    pub async fn create(&self, army: NewArmy) -> ArmyResult<Army> {
        self.store.create(army).await
    }

    pub async fn update(&self, id: i64, changes: ArmyChanges) -> ArmyResult<Army> {
        self.store.update(id, changes).await
    }

    pub async fn delete(&self, id: i64) -> ArmyResult<()> {
        self.store.delete(id).await
    }
}
