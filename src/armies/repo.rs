use std::{future::Future, time::Duration};

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::errors::{ArmyError, ArmyResult};
use super::repo_types::{Army, ArmyChanges, NewArmy};

#[async_trait]
pub trait ArmyStore: Send + Sync {
    async fn list(&self) -> ArmyResult<Vec<Army>>;
    async fn create(&self, army: NewArmy) -> ArmyResult<Army>;
    async fn update(&self, id: i64, changes: ArmyChanges) -> ArmyResult<Army>;
    async fn delete(&self, id: i64) -> ArmyResult<()>;
}

/// Postgres-backed store. Every call is one statement bounded by `timeout`.
#[derive(Clone)]
pub struct PgArmyStore {
    db: PgPool,
    timeout: Duration,
}

impl PgArmyStore {
    pub fn new(db: PgPool, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    async fn bounded<T, F>(&self, fut: F) -> ArmyResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => res.map_err(ArmyError::from),
            Err(_) => Err(ArmyError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl ArmyStore for PgArmyStore {
    async fn list(&self) -> ArmyResult<Vec<Army>> {
        let rows = self
            .bounded(
                sqlx::query_as::<_, Army>(
                    r#"
                    SELECT id, title, description, user_id, created_at, modified_at, is_deleted
                    FROM army
                    WHERE is_deleted = false
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.db),
            )
            .await?;
        debug!(count = rows.len(), "armies listed");
        Ok(rows)
    }

    async fn create(&self, army: NewArmy) -> ArmyResult<Army> {
        let created = self
            .bounded(
                sqlx::query_as::<_, Army>(
                    r#"
                    INSERT INTO army (title, description, user_id, created_at, modified_at, is_deleted)
                    VALUES ($1, $2, $3, NOW(), NOW(), false)
                    RETURNING id, title, description, user_id, created_at, modified_at, is_deleted
                    "#,
                )
                .bind(&army.name)
                .bind(&army.description)
                .bind(army.user_id)
                .fetch_one(&self.db),
            )
            .await?;
        debug!(id = created.id, user_id = created.user_id, "army created");
        Ok(created)
    }

    async fn update(&self, id: i64, changes: ArmyChanges) -> ArmyResult<Army> {
        let updated = self
            .bounded(
                sqlx::query_as::<_, Army>(
                    r#"
                    UPDATE army
                    SET title = $1, description = $2, modified_at = NOW()
                    WHERE id = $3 AND is_deleted = false
                    RETURNING id, title, description, user_id, created_at, modified_at, is_deleted
                    "#,
                )
                .bind(&changes.name)
                .bind(&changes.description)
                .bind(id)
                .fetch_optional(&self.db),
            )
            .await?;
        updated.ok_or(ArmyError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> ArmyResult<()> {
        let res = self
            .bounded(
                sqlx::query("UPDATE army SET is_deleted = true WHERE id = $1")
                    .bind(id)
                    .execute(&self.db),
            )
            .await?;
        debug!(id, rows = res.rows_affected(), "army soft-deleted");
        Ok(())
    }
}
