use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::calculations::{
    estimate_max_hr_from_age, pace_zones_from_race, parse_time_to_seconds, vdot,
    zones_from_lactate_threshold_hr, zones_from_max_hr,
};
use crate::error::{AppError, Result};
use crate::models::{CalculateProfile, CalculationMethod, RaceResult, UserProfile, ZoneSource};
use crate::repositories::ProfileStore;

#[derive(Clone)]
pub struct ProfileState {
    pub profile_store: Arc<dyn ProfileStore>,
    pub race_max_hr_estimate: u32,
}

#[derive(Deserialize)]
pub struct EstimateQuery {
    age: Option<f64>,
}

#[derive(Serialize)]
pub struct EstimateResponse {
    pub age: f64,
    pub max_hr: u32,
}

/// Turn calculator input into a complete profile, rejecting input the
/// calculators would silently accept.
pub fn build_profile(input: &CalculateProfile, race_max_hr_estimate: u32) -> Result<UserProfile> {
    match input.method {
        CalculationMethod::MaxHr => {
            let max_hr = input
                .max_hr
                .filter(|hr| *hr > 0)
                .ok_or_else(|| AppError::Validation("Enter a valid max heart rate".to_string()))?;
            Ok(UserProfile {
                source: ZoneSource::MaxHr { max_hr },
                zones: zones_from_max_hr(max_hr).to_vec(),
                pace_zones: Vec::new(),
            })
        }
        CalculationMethod::Lthr => {
            let lactate_threshold_hr =
                input.lactate_threshold_hr.filter(|hr| *hr > 0).ok_or_else(|| {
                    AppError::Validation("Enter a valid lactate threshold heart rate".to_string())
                })?;
            Ok(UserProfile {
                source: ZoneSource::LactateThreshold {
                    lactate_threshold_hr,
                },
                zones: zones_from_lactate_threshold_hr(lactate_threshold_hr).to_vec(),
                pace_zones: Vec::new(),
            })
        }
        CalculationMethod::Race => {
            let distance = input
                .race_distance
                .ok_or_else(|| AppError::Validation("Choose a race distance".to_string()))?;
            let time_in_seconds = input
                .race_time
                .as_deref()
                .map(parse_time_to_seconds)
                .unwrap_or(0);
            if time_in_seconds == 0 {
                return Err(AppError::Validation(
                    "Enter a race time as mm:ss or h:mm:ss".to_string(),
                ));
            }

            let race = RaceResult {
                distance,
                time_in_seconds,
            };
            tracing::debug!(
                "Race {} in {}s gives VDOT {:.1}",
                distance.as_str(),
                time_in_seconds,
                vdot(&race)
            );

            // HR zones on this path come from a fixed estimate, not from the race.
            Ok(UserProfile {
                source: ZoneSource::Race { race },
                zones: zones_from_max_hr(race_max_hr_estimate).to_vec(),
                pace_zones: pace_zones_from_race(&race).to_vec(),
            })
        }
    }
}

pub async fn show(State(state): State<ProfileState>) -> Result<Json<UserProfile>> {
    let profile = state
        .profile_store
        .load_profile()
        .await?
        .ok_or_else(|| AppError::NotFound("No profile saved".to_string()))?;
    Ok(Json(profile))
}

pub async fn calculate(
    State(state): State<ProfileState>,
    Json(input): Json<CalculateProfile>,
) -> Result<Json<UserProfile>> {
    let profile = build_profile(&input, state.race_max_hr_estimate)?;
    state.profile_store.save_profile(&profile).await?;

    tracing::info!("Calculated zones with method {:?}", input.method);
    Ok(Json(profile))
}

pub async fn delete(State(state): State<ProfileState>) -> Result<StatusCode> {
    if state.profile_store.delete_profile().await? {
        tracing::info!("Deleted profile");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn estimate_max_hr(Query(query): Query<EstimateQuery>) -> Result<Json<EstimateResponse>> {
    let age = query
        .age
        .filter(|age| *age > 0.0 && *age <= 120.0)
        .ok_or_else(|| AppError::BadRequest("age must be between 1 and 120".to_string()))?;

    Ok(Json(EstimateResponse {
        age,
        max_hr: estimate_max_hr_from_age(age),
    }))
}
