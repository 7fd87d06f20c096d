use async_trait::async_trait;
use chrono::Utc;
use rusqlite::OptionalExtension;

use super::PlanStore;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::TrainingPlan;

pub const PLAN_KEY: &str = "training-plan";

#[derive(Clone)]
pub struct PlanRepository {
    pool: DbPool,
}

impl PlanRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanStore for PlanRepository {
    async fn load_plan(&self) -> Result<Option<TrainingPlan>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let data: Option<String> = conn
                .query_row(
                    "SELECT data FROM training_plans WHERE key = ?",
                    [PLAN_KEY],
                    |row| row.get(0),
                )
                .optional()?;

            Ok(data.and_then(|json| match serde_json::from_str(&json) {
                Ok(plan) => Some(plan),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable stored plan: {}", e);
                    None
                }
            }))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn save_plan(&self, plan: &TrainingPlan) -> Result<()> {
        let pool = self.pool.clone();
        let plan_id = plan.id.clone();
        let data = serde_json::to_string(plan)?;
        let now = Utc::now();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO training_plans (key, plan_id, data, updated_at) VALUES (?, ?, ?, ?)
                 ON CONFLICT(key) DO UPDATE SET
                    plan_id = excluded.plan_id,
                    data = excluded.data,
                    updated_at = excluded.updated_at",
                rusqlite::params![PLAN_KEY, plan_id, data, now],
            )?;
            tracing::debug!("Saved plan {}", plan_id);
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn delete_plan(&self) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM training_plans WHERE key = ?", [PLAN_KEY])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
