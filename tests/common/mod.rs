#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use paceplan::config::DEFAULT_RACE_MAX_HR_ESTIMATE;
use paceplan::db::{create_memory_pool, DbPool};
use paceplan::handlers::{dashboard, plans, profile, stats, workouts};
use paceplan::migrations::run_migrations_for_tests;
use paceplan::repositories::{
    MemoryStore, PlanRepository, PlanStore, ProfileRepository, ProfileStore, WorkoutRepository,
    WorkoutStore,
};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

fn build_router(
    profile_store: Arc<dyn ProfileStore>,
    plan_store: Arc<dyn PlanStore>,
    workout_store: Arc<dyn WorkoutStore>,
) -> Router {
    let profile_state = profile::ProfileState {
        profile_store: profile_store.clone(),
        race_max_hr_estimate: DEFAULT_RACE_MAX_HR_ESTIMATE,
    };
    let plan_state = plans::PlanState {
        plan_store: plan_store.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_store: workout_store.clone(),
        plan_store: plan_store.clone(),
    };
    let stats_state = stats::StatsState {
        workout_store: workout_store.clone(),
        profile_store: profile_store.clone(),
        plan_store: plan_store.clone(),
    };
    let dashboard_state = dashboard::DashboardState {
        workout_store,
        profile_store,
        plan_store,
    };

    paceplan::routes::create_router(
        profile_state,
        plan_state,
        workouts_state,
        stats_state,
        dashboard_state,
    )
}

/// Router backed by the SQLite repositories.
pub fn create_test_app(pool: DbPool) -> Router {
    build_router(
        Arc::new(ProfileRepository::new(pool.clone())),
        Arc::new(PlanRepository::new(pool.clone())),
        Arc::new(WorkoutRepository::new(pool)),
    )
}

/// Router backed by a single in-memory store.
pub fn create_memory_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    build_router(store.clone(), store.clone(), store)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Send a request expecting `status` and return the JSON body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    status: StatusCode,
) -> Value {
    let response = send(app, method, uri, body).await;
    assert_eq!(response.status(), status, "{} {}", method, uri);
    body_json(response).await
}
