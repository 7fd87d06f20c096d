use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{dashboard, health, plans, profile, stats, workouts};

pub fn create_router(
    profile_state: profile::ProfileState,
    plan_state: plans::PlanState,
    workouts_state: workouts::WorkoutsState,
    stats_state: stats::StatsState,
    dashboard_state: dashboard::DashboardState,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Profile and zone calculator
        .route("/api/zones/estimate", get(profile::estimate_max_hr))
        .route("/api/profile", get(profile::show).delete(profile::delete))
        .route("/api/profile/calculate", post(profile::calculate))
        .with_state(profile_state)
        // Training plan
        .route("/api/plan/templates", get(plans::templates))
        .route(
            "/api/plan",
            get(plans::show).post(plans::create).delete(plans::delete),
        )
        .route(
            "/api/plan/weeks/{week}/workouts/{id}",
            patch(plans::update_workout),
        )
        .route(
            "/api/plan/weeks/{week}/workouts/{id}/complete",
            post(plans::complete_workout),
        )
        .with_state(plan_state)
        // Workout log
        .route("/api/workouts", get(workouts::list).post(workouts::create))
        .route(
            "/api/workouts/{id}",
            get(workouts::show)
                .put(workouts::update)
                .delete(workouts::delete),
        )
        .with_state(workouts_state)
        // Stats
        .route("/api/stats", get(stats::index))
        .with_state(stats_state)
        .route("/api/dashboard", get(dashboard::index))
        .with_state(dashboard_state)
}
