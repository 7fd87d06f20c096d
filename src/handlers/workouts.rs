use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::calculations::calculate_pace;
use crate::error::{AppError, Result};
use crate::models::{CompletedWorkout, CreateCompletedWorkout};
use crate::plans::mark_workout_completed;
use crate::repositories::{PlanStore, WorkoutStore};

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_store: Arc<dyn WorkoutStore>,
    pub plan_store: Arc<dyn PlanStore>,
}

/// Validate a submitted log entry and derive its average pace.
pub fn build_workout(
    input: CreateCompletedWorkout,
    id: String,
    created_at: DateTime<Utc>,
) -> Result<CompletedWorkout> {
    if !(1..=10).contains(&input.rpe) {
        return Err(AppError::Validation("RPE must be between 1 and 10".to_string()));
    }
    if !input.distance.is_finite() || input.distance < 0.0 {
        return Err(AppError::Validation("Distance cannot be negative".to_string()));
    }
    if !input.duration.is_finite() || input.duration <= 0.0 {
        return Err(AppError::Validation("Duration must be positive".to_string()));
    }

    Ok(CompletedWorkout {
        id,
        planned_workout_id: input.planned_workout_id,
        date: input.date,
        workout_type: input.workout_type,
        name: input
            .name
            .unwrap_or_else(|| input.workout_type.label().to_string()),
        distance: input.distance,
        duration: input.duration,
        avg_hr: input.avg_hr,
        avg_pace: calculate_pace(input.distance, input.duration),
        rpe: input.rpe,
        notes: input.notes,
        created_at,
    })
}

/// Mark the planned workout a log entry fulfils. A stale link is not an error.
async fn link_to_plan(
    plan_store: &dyn PlanStore,
    workout: &CompletedWorkout,
    plan_week: Option<u8>,
) -> Result<()> {
    let Some(planned_id) = workout.planned_workout_id.as_deref() else {
        return Ok(());
    };
    let Some(plan) = plan_store.load_plan().await? else {
        tracing::debug!("No plan to link workout {} to", workout.id);
        return Ok(());
    };

    let week = plan_week.or_else(|| {
        plan.weeks
            .iter()
            .find(|week| week.workouts.iter().any(|w| w.id == planned_id))
            .map(|week| week.week_number)
    });

    match week {
        Some(week) => {
            let plan = mark_workout_completed(&plan, week, planned_id, &workout.id);
            plan_store.save_plan(&plan).await?;
            tracing::debug!("Marked planned workout {} completed", planned_id);
        }
        None => tracing::debug!("Planned workout {} not in current plan", planned_id),
    }
    Ok(())
}

/// Runs after the workout is stored, so a failed plan write must not fail
/// the request.
async fn link_to_plan_logged(
    plan_store: &dyn PlanStore,
    workout: &CompletedWorkout,
    plan_week: Option<u8>,
) {
    if let Err(e) = link_to_plan(plan_store, workout, plan_week).await {
        tracing::warn!(
            "Workout {} saved but its planned workout was not marked completed: {}",
            workout.id,
            e
        );
    }
}

pub async fn list(State(state): State<WorkoutsState>) -> Result<Json<Vec<CompletedWorkout>>> {
    Ok(Json(state.workout_store.load_workouts().await?))
}

pub async fn show(
    State(state): State<WorkoutsState>,
    Path(id): Path<String>,
) -> Result<Json<CompletedWorkout>> {
    let workout = state
        .workout_store
        .find_workout(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;
    Ok(Json(workout))
}

pub async fn create(
    State(state): State<WorkoutsState>,
    Json(input): Json<CreateCompletedWorkout>,
) -> Result<(StatusCode, Json<CompletedWorkout>)> {
    let plan_week = input.plan_week;
    let workout = build_workout(input, Uuid::new_v4().to_string(), Utc::now())?;

    state.workout_store.add_workout(&workout).await?;
    link_to_plan_logged(state.plan_store.as_ref(), &workout, plan_week).await;

    tracing::info!("Logged {} workout on {}", workout.workout_type.as_str(), workout.date);
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn update(
    State(state): State<WorkoutsState>,
    Path(id): Path<String>,
    Json(input): Json<CreateCompletedWorkout>,
) -> Result<Json<CompletedWorkout>> {
    let existing = state
        .workout_store
        .find_workout(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

    let plan_week = input.plan_week;
    let workout = build_workout(input, existing.id, existing.created_at)?;

    if !state.workout_store.update_workout(&workout).await? {
        return Err(AppError::NotFound("Workout not found".to_string()));
    }
    if workout.planned_workout_id != existing.planned_workout_id {
        link_to_plan_logged(state.plan_store.as_ref(), &workout, plan_week).await;
    }

    Ok(Json(workout))
}

pub async fn delete(
    State(state): State<WorkoutsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.workout_store.delete_workout(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Workout not found".to_string()))
    }
}
