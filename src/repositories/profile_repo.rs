use async_trait::async_trait;
use chrono::Utc;
use rusqlite::OptionalExtension;

use super::ProfileStore;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::UserProfile;

pub const PROFILE_KEY: &str = "user-profile";

#[derive(Clone)]
pub struct ProfileRepository {
    pool: DbPool,
}

impl ProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn load_profile(&self) -> Result<Option<UserProfile>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let data: Option<String> = conn
                .query_row(
                    "SELECT data FROM profiles WHERE key = ?",
                    [PROFILE_KEY],
                    |row| row.get(0),
                )
                .optional()?;

            // An unreadable stored profile counts as no profile.
            Ok(data.and_then(|json| match serde_json::from_str(&json) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable stored profile: {}", e);
                    None
                }
            }))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let pool = self.pool.clone();
        let data = serde_json::to_string(profile)?;
        let now = Utc::now();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO profiles (key, data, updated_at) VALUES (?, ?, ?)
                 ON CONFLICT(key) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
                rusqlite::params![PROFILE_KEY, data, now],
            )?;
            tracing::debug!("Saved profile");
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn delete_profile(&self) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM profiles WHERE key = ?", [PROFILE_KEY])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
