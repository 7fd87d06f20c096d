use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};

use super::WorkoutStore;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CompletedWorkout, FromSqliteRow};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn insert(conn: &Connection, workout: &CompletedWorkout) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO completed_workouts
            (id, planned_workout_id, date, workout_type, name, distance, duration,
             avg_hr, avg_pace, rpe, notes, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        rusqlite::params![
            workout.id,
            workout.planned_workout_id,
            workout.date,
            workout.workout_type.as_str(),
            workout.name,
            workout.distance,
            workout.duration,
            workout.avg_hr,
            workout.avg_pace,
            workout.rpe,
            workout.notes,
            workout.created_at,
        ],
    )
}

#[async_trait]
impl WorkoutStore for WorkoutRepository {
    async fn load_workouts(&self) -> Result<Vec<CompletedWorkout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM completed_workouts ORDER BY date DESC, created_at DESC",
            )?;
            let workouts = stmt
                .query_map([], CompletedWorkout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn save_workouts(&self, workouts: &[CompletedWorkout]) -> Result<()> {
        let pool = self.pool.clone();
        let workouts = workouts.to_vec();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM completed_workouts", [])?;
            for workout in &workouts {
                insert(&tx, workout)?;
            }
            tx.commit()?;
            tracing::debug!("Replaced workout log with {} entries", workouts.len());
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn find_workout(&self, id: &str) -> Result<Option<CompletedWorkout>> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM completed_workouts WHERE id = ?")?;
            let result = stmt
                .query_row([&id], CompletedWorkout::from_row)
                .optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn add_workout(&self, workout: &CompletedWorkout) -> Result<()> {
        let pool = self.pool.clone();
        let workout = workout.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            insert(&conn, &workout)?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn update_workout(&self, workout: &CompletedWorkout) -> Result<bool> {
        let pool = self.pool.clone();
        let workout = workout.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE completed_workouts SET
                    planned_workout_id = ?, date = ?, workout_type = ?, name = ?,
                    distance = ?, duration = ?, avg_hr = ?, avg_pace = ?, rpe = ?, notes = ?
                 WHERE id = ?",
                rusqlite::params![
                    workout.planned_workout_id,
                    workout.date,
                    workout.workout_type.as_str(),
                    workout.name,
                    workout.distance,
                    workout.duration,
                    workout.avg_hr,
                    workout.avg_pace,
                    workout.rpe,
                    workout.notes,
                    workout.id,
                ],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    async fn delete_workout(&self, id: &str) -> Result<bool> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM completed_workouts WHERE id = ?", [&id])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
