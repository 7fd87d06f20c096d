use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::calculations::{
    format_hr_range, format_pace, format_pace_range, format_time, threshold_hr_range,
    threshold_pace,
};
use crate::error::Result;
use crate::models::{CompletedWorkout, PlannedWorkout, RaceResult, TrainingPlan, TrainingWeek};
use crate::plans::templates::PLAN_WEEKS;
use crate::plans::workouts::day_name;
use crate::repositories::{PlanStore, ProfileStore, WorkoutStore};
use crate::stats::{last_seven_days, rpe_label, PeriodSummary};

const RECENT_WORKOUTS: usize = 5;

#[derive(Clone)]
pub struct DashboardState {
    pub workout_store: Arc<dyn WorkoutStore>,
    pub profile_store: Arc<dyn ProfileStore>,
    pub plan_store: Arc<dyn PlanStore>,
}

#[derive(Serialize)]
pub struct RecentWorkout {
    #[serde(flatten)]
    pub workout: CompletedWorkout,
    pub pace: String,
    pub rpe_label: &'static str,
}

#[derive(Serialize)]
pub struct ScheduledWorkout {
    #[serde(flatten)]
    pub workout: PlannedWorkout,
    pub day_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct CurrentWeek {
    pub week_number: u8,
    pub focus: String,
    pub workouts: Vec<ScheduledWorkout>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub has_profile: bool,
    pub has_plan: bool,
    pub last_seven_days: PeriodSummary,
    pub recent_workouts: Vec<RecentWorkout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_hr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_race: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_week: Option<CurrentWeek>,
}

/// Plan week `today` falls in, if the plan is running.
pub fn current_week(plan: &TrainingPlan, today: NaiveDate) -> Option<&TrainingWeek> {
    let days = (today - plan.start_date).num_days();
    if days < 0 {
        return None;
    }
    let week_number = u8::try_from(days / 7 + 1).ok()?;
    if week_number > PLAN_WEEKS {
        return None;
    }
    plan.week(week_number)
}

/// A plan week with each workout's weekday name and calendar date.
pub fn schedule_week(plan: &TrainingPlan, week: &TrainingWeek) -> CurrentWeek {
    CurrentWeek {
        week_number: week.week_number,
        focus: week.focus.clone(),
        workouts: week
            .workouts
            .iter()
            .map(|w| ScheduledWorkout {
                workout: w.clone(),
                day_name: day_name(w.day),
                date: plan.workout_date(week.week_number, w.day),
            })
            .collect(),
    }
}

/// e.g. `10K in 45:00`
pub fn describe_race(race: &RaceResult) -> String {
    format!(
        "{} in {}",
        race.distance.label(),
        format_time(race.time_in_seconds)
    )
}

pub async fn index(State(state): State<DashboardState>) -> Result<Json<DashboardResponse>> {
    let workouts = state.workout_store.load_workouts().await?;
    let profile = state.profile_store.load_profile().await?;
    let plan = state.plan_store.load_plan().await?;
    let today = chrono::Local::now().date_naive();

    let threshold_hr = profile
        .as_ref()
        .and_then(|p| threshold_hr_range(&p.zones))
        .map(|(min, max)| format_hr_range(min, max));
    let threshold_pace = profile
        .as_ref()
        .and_then(|p| threshold_pace(&p.pace_zones))
        .map(|zone| format_pace_range(zone.min_pace, zone.max_pace));

    let recent_workouts = workouts
        .iter()
        .take(RECENT_WORKOUTS)
        .map(|w| RecentWorkout {
            workout: w.clone(),
            pace: format_pace(w.avg_pace),
            rpe_label: rpe_label(w.rpe),
        })
        .collect();

    Ok(Json(DashboardResponse {
        has_profile: profile.as_ref().is_some_and(|p| p.has_zones()),
        has_plan: plan.is_some(),
        last_seven_days: last_seven_days(&workouts, today),
        recent_workouts,
        threshold_hr,
        threshold_pace,
        recent_race: profile
            .as_ref()
            .and_then(|p| p.recent_race())
            .map(|race| describe_race(&race)),
        current_week: plan
            .as_ref()
            .and_then(|p| current_week(p, today).map(|week| schedule_week(p, week))),
    }))
}
