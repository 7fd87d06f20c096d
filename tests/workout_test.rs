mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn easy_run(date: &str) -> Value {
    json!({
        "date": date,
        "type": "easy",
        "distance": 8.0,
        "duration": 48.0,
        "avg_hr": 142,
        "rpe": 4
    })
}

#[tokio::test]
async fn test_create_workout_derives_pace() {
    let app = common::create_test_app(common::setup_test_db());

    let body = common::send_json(
        &app,
        "POST",
        "/api/workouts",
        Some(easy_run("2024-05-01")),
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(body["avg_pace"], 360.0);
    assert_eq!(body["name"], "Easy Run");
    assert_eq!(body["avg_hr"], 142);
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_form_strings_are_accepted() {
    let app = common::create_test_app(common::setup_test_db());

    let body = common::send_json(
        &app,
        "POST",
        "/api/workouts",
        Some(json!({
            "date": "2024-05-02",
            "type": "long",
            "name": "",
            "distance": 16.0,
            "duration": 96.0,
            "avg_hr": "",
            "rpe": 6,
            "notes": ""
        })),
        StatusCode::CREATED,
    )
    .await;

    assert!(body.get("avg_hr").is_none());
    assert!(body.get("notes").is_none());
    assert_eq!(body["type"], "long");
}

#[tokio::test]
async fn test_rpe_out_of_range_returns_400() {
    let app = common::create_test_app(common::setup_test_db());

    for rpe in [0, 11] {
        let mut workout = easy_run("2024-05-01");
        workout["rpe"] = json!(rpe);
        let response = common::send(&app, "POST", "/api/workouts", Some(workout)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let list = common::send_json(&app, "GET", "/api/workouts", None, StatusCode::OK).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = common::create_test_app(common::setup_test_db());

    for date in ["2024-05-01", "2024-05-10", "2024-05-05"] {
        common::send_json(&app, "POST", "/api/workouts", Some(easy_run(date)), StatusCode::CREATED)
            .await;
    }

    let list = common::send_json(&app, "GET", "/api/workouts", None, StatusCode::OK).await;
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-05-10", "2024-05-05", "2024-05-01"]);
}

#[tokio::test]
async fn test_update_and_delete_workout() {
    let app = common::create_test_app(common::setup_test_db());
    let created = common::send_json(
        &app,
        "POST",
        "/api/workouts",
        Some(easy_run("2024-05-01")),
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/workouts/{}", created["id"].as_str().unwrap());

    let mut edited = easy_run("2024-05-01");
    edited["distance"] = json!(10.0);
    edited["notes"] = json!("windy");
    let updated = common::send_json(&app, "PUT", &uri, Some(edited), StatusCode::OK).await;

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["avg_pace"], 288.0);
    assert_eq!(updated["notes"], "windy");

    let fetched = common::send_json(&app, "GET", &uri, None, StatusCode::OK).await;
    assert_eq!(fetched, updated);

    let response = common::send(&app, "DELETE", &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = common::send(&app, "GET", &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = common::send(&app, "DELETE", &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_workout_returns_404() {
    let app = common::create_memory_app();

    let response = common::send(
        &app,
        "PUT",
        "/api/workouts/missing",
        Some(easy_run("2024-05-01")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logging_planned_workout_marks_it_completed() {
    let app = common::create_test_app(common::setup_test_db());
    let plan = common::send_json(
        &app,
        "POST",
        "/api/plan",
        Some(json!({"template": "5k", "start_date": "2024-06-03"})),
        StatusCode::CREATED,
    )
    .await;
    let planned_id = plan["weeks"][2]["workouts"][1]["id"].as_str().unwrap().to_string();

    let mut workout = easy_run("2024-06-18");
    workout["type"] = json!("threshold");
    workout["planned_workout_id"] = json!(planned_id);
    let logged =
        common::send_json(&app, "POST", "/api/workouts", Some(workout), StatusCode::CREATED).await;

    let stored = common::send_json(&app, "GET", "/api/plan", None, StatusCode::OK).await;
    let planned = &stored["weeks"][2]["workouts"][1];
    assert_eq!(planned["completed"], true);
    assert_eq!(planned["completed_workout_id"], logged["id"]);
    assert_eq!(stored["weeks"][2]["workouts"][0]["completed"], false);
}

#[tokio::test]
async fn test_stale_plan_link_is_ignored() {
    let app = common::create_test_app(common::setup_test_db());

    let mut workout = easy_run("2024-06-18");
    workout["planned_workout_id"] = json!("no-such-workout");

    let logged =
        common::send_json(&app, "POST", "/api/workouts", Some(workout), StatusCode::CREATED).await;
    assert_eq!(logged["planned_workout_id"], "no-such-workout");
}
