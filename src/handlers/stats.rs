use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::Result;
use crate::repositories::{PlanStore, ProfileStore, WorkoutStore};
use crate::stats::{build_report, StatsReport};

#[derive(Clone)]
pub struct StatsState {
    pub workout_store: Arc<dyn WorkoutStore>,
    pub profile_store: Arc<dyn ProfileStore>,
    pub plan_store: Arc<dyn PlanStore>,
}

pub async fn index(State(state): State<StatsState>) -> Result<Json<StatsReport>> {
    let workouts = state.workout_store.load_workouts().await?;
    let zones = state
        .profile_store
        .load_profile()
        .await?
        .map(|profile| profile.zones)
        .unwrap_or_default();
    let plan = state.plan_store.load_plan().await?;
    let today = chrono::Local::now().date_naive();

    Ok(Json(build_report(&workouts, &zones, plan.as_ref(), today)))
}
