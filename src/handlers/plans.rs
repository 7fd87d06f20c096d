use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, Result};
use crate::models::{CompletePlannedWorkout, CreatePlan, PlannedWorkoutUpdate, TrainingPlan};
use crate::plans::{
    generate_plan, mark_workout_completed, update_workout_in_plan, TemplateInfo, PLAN_TEMPLATES,
};
use crate::repositories::PlanStore;

#[derive(Clone)]
pub struct PlanState {
    pub plan_store: Arc<dyn PlanStore>,
}

async fn load_existing(state: &PlanState) -> Result<TrainingPlan> {
    state
        .plan_store
        .load_plan()
        .await?
        .ok_or_else(|| AppError::NotFound("No training plan".to_string()))
}

fn ensure_workout_exists(plan: &TrainingPlan, week: u8, workout_id: &str) -> Result<()> {
    let found = plan
        .week(week)
        .map(|w| w.workouts.iter().any(|workout| workout.id == workout_id))
        .unwrap_or(false);

    if found {
        Ok(())
    } else {
        Err(AppError::NotFound(format!(
            "Workout {} not found in week {}",
            workout_id, week
        )))
    }
}

pub async fn templates() -> Json<&'static [TemplateInfo]> {
    Json(PLAN_TEMPLATES)
}

pub async fn show(State(state): State<PlanState>) -> Result<Json<TrainingPlan>> {
    Ok(Json(load_existing(&state).await?))
}

pub async fn create(
    State(state): State<PlanState>,
    Json(input): Json<CreatePlan>,
) -> Result<(StatusCode, Json<TrainingPlan>)> {
    let plan = generate_plan(input.template, input.start_date);
    state.plan_store.save_plan(&plan).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

pub async fn delete(State(state): State<PlanState>) -> Result<StatusCode> {
    if state.plan_store.delete_plan().await? {
        tracing::info!("Deleted training plan");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_workout(
    State(state): State<PlanState>,
    Path((week, workout_id)): Path<(u8, String)>,
    Json(update): Json<PlannedWorkoutUpdate>,
) -> Result<Json<TrainingPlan>> {
    let plan = load_existing(&state).await?;
    ensure_workout_exists(&plan, week, &workout_id)?;

    let plan = update_workout_in_plan(&plan, week, &workout_id, &update);
    state.plan_store.save_plan(&plan).await?;
    Ok(Json(plan))
}

pub async fn complete_workout(
    State(state): State<PlanState>,
    Path((week, workout_id)): Path<(u8, String)>,
    Json(input): Json<CompletePlannedWorkout>,
) -> Result<Json<TrainingPlan>> {
    let plan = load_existing(&state).await?;
    ensure_workout_exists(&plan, week, &workout_id)?;

    let plan = mark_workout_completed(&plan, week, &workout_id, &input.completed_workout_id);
    state.plan_store.save_plan(&plan).await?;
    Ok(Json(plan))
}
