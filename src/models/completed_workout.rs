use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{Deserialize, Deserializer, Serialize};

use super::{FromSqliteRow, WorkoutType};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u32),
    Text(String),
}

/// Deserialize an optional heart rate sent either as a number or as a form string.
/// Empty or non-numeric strings become `None` instead of failing.
fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match opt {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Treat `""` as an absent value for optional text fields.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkout {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_workout_id: Option<String>,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub name: String,
    /// Kilometres
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<u32>,
    /// Seconds per km, derived from distance and duration
    pub avg_pace: f64,
    pub rpe: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for CompletedWorkout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let workout_type: String = row.get("workout_type")?;
        Ok(Self {
            id: row.get("id")?,
            planned_workout_id: row.get("planned_workout_id")?,
            date: row.get("date")?,
            workout_type: WorkoutType::parse(&workout_type),
            name: row.get("name")?,
            distance: row.get("distance")?,
            duration: row.get("duration")?,
            avg_hr: row.get("avg_hr")?,
            avg_pace: row.get("avg_pace")?,
            rpe: row.get("rpe")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Log entry as submitted by the user; `avg_pace` is derived server side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompletedWorkout {
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub workout_type: WorkoutType,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    pub distance: f64,
    pub duration: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub avg_hr: Option<u32>,
    pub rpe: u8,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub planned_workout_id: Option<String>,
    /// Week of the stored plan holding `planned_workout_id`.
    #[serde(default)]
    pub plan_week: Option<u8>,
}
