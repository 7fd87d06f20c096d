use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Easy,
    Threshold,
    Long,
    Recovery,
    Rest,
    Tempo,
    Intervals,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 7] = [
        WorkoutType::Easy,
        WorkoutType::Threshold,
        WorkoutType::Long,
        WorkoutType::Recovery,
        WorkoutType::Rest,
        WorkoutType::Tempo,
        WorkoutType::Intervals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "easy",
            WorkoutType::Threshold => "threshold",
            WorkoutType::Long => "long",
            WorkoutType::Recovery => "recovery",
            WorkoutType::Rest => "rest",
            WorkoutType::Tempo => "tempo",
            WorkoutType::Intervals => "intervals",
        }
    }

    /// Unknown tags fall back to `Easy`.
    pub fn parse(s: &str) -> Self {
        match s {
            "threshold" => WorkoutType::Threshold,
            "long" => WorkoutType::Long,
            "recovery" => WorkoutType::Recovery,
            "rest" => WorkoutType::Rest,
            "tempo" => WorkoutType::Tempo,
            "intervals" => WorkoutType::Intervals,
            _ => WorkoutType::Easy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "Easy Run",
            WorkoutType::Threshold => "Threshold",
            WorkoutType::Long => "Long Run",
            WorkoutType::Recovery => "Recovery",
            WorkoutType::Rest => "Rest Day",
            WorkoutType::Tempo => "Tempo Run",
            WorkoutType::Intervals => "Intervals",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "#3b82f6",
            WorkoutType::Threshold => "#f97316",
            WorkoutType::Long => "#22c55e",
            WorkoutType::Recovery => "#a855f7",
            WorkoutType::Rest => "#6b7280",
            WorkoutType::Tempo => "#eab308",
            WorkoutType::Intervals => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanTemplate {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half")]
    HalfMarathon,
    #[serde(rename = "general")]
    General,
}

impl PlanTemplate {
    pub const ALL: [PlanTemplate; 4] = [
        PlanTemplate::FiveK,
        PlanTemplate::TenK,
        PlanTemplate::HalfMarathon,
        PlanTemplate::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTemplate::FiveK => "5k",
            PlanTemplate::TenK => "10k",
            PlanTemplate::HalfMarathon => "half",
            PlanTemplate::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    pub id: String,
    /// 0 = Monday, 6 = Sunday
    pub day: u8,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub name: String,
    pub description: String,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_duration: Option<f64>,
    /// Kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_distance: Option<f64>,
    /// e.g. "4x8min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_zone: Option<u8>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_workout_id: Option<String>,
}

impl PlannedWorkout {
    pub fn apply(&mut self, update: &PlannedWorkoutUpdate) {
        if let Some(workout_type) = update.workout_type {
            self.workout_type = workout_type;
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(duration) = update.target_duration {
            self.target_duration = Some(duration);
        }
        if let Some(distance) = update.target_distance {
            self.target_distance = Some(distance);
        }
        if let Some(intervals) = &update.intervals {
            self.intervals = Some(intervals.clone());
        }
        if let Some(zone) = update.target_zone {
            self.target_zone = Some(zone);
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(id) = &update.completed_workout_id {
            self.completed_workout_id = Some(id.clone());
        }
    }
}

/// Partial edit of a planned workout. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlannedWorkoutUpdate {
    #[serde(default, rename = "type")]
    pub workout_type: Option<WorkoutType>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_duration: Option<f64>,
    #[serde(default)]
    pub target_distance: Option<f64>,
    #[serde(default)]
    pub intervals: Option<String>,
    #[serde(default)]
    pub target_zone: Option<u8>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub completed_workout_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingWeek {
    pub week_number: u8,
    pub focus: String,
    pub workouts: Vec<PlannedWorkout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: String,
    pub name: String,
    pub template: PlanTemplate,
    pub start_date: NaiveDate,
    pub weeks: Vec<TrainingWeek>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainingPlan {
    pub fn week(&self, week_number: u8) -> Option<&TrainingWeek> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    /// Calendar date a week/day slot falls on.
    pub fn workout_date(&self, week_number: u8, day: u8) -> Option<NaiveDate> {
        if week_number == 0 {
            return None;
        }
        let offset = u64::from(week_number - 1) * 7 + u64::from(day);
        self.start_date.checked_add_days(Days::new(offset))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlan {
    pub template: PlanTemplate,
    pub start_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct CompletePlannedWorkout {
    pub completed_workout_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_type_as_str_parse() {
        for workout_type in WorkoutType::ALL {
            assert_eq!(WorkoutType::parse(workout_type.as_str()), workout_type);
        }
        assert_eq!(WorkoutType::parse("unknown"), WorkoutType::Easy);
        assert_eq!(WorkoutType::parse(""), WorkoutType::Easy);
    }

    #[test]
    fn test_workout_type_labels() {
        assert_eq!(WorkoutType::Rest.label(), "Rest Day");
        assert_eq!(WorkoutType::Threshold.color(), "#f97316");
    }

    #[test]
    fn test_template_serde_tags() {
        let json = serde_json::to_string(&PlanTemplate::General).unwrap();
        assert_eq!(json, "\"general\"");
        let parsed: PlanTemplate = serde_json::from_str("\"5k\"").unwrap();
        assert_eq!(parsed, PlanTemplate::FiveK);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut workout = PlannedWorkout {
            id: "w1".to_string(),
            day: 0,
            workout_type: WorkoutType::Easy,
            name: "Easy Run".to_string(),
            description: "Easy aerobic run in Zone 2".to_string(),
            target_duration: Some(45.0),
            target_distance: None,
            intervals: None,
            target_zone: Some(2),
            completed: false,
            completed_workout_id: None,
        };

        workout.apply(&PlannedWorkoutUpdate {
            target_distance: Some(9.5),
            name: Some("Morning Run".to_string()),
            ..Default::default()
        });

        assert_eq!(workout.name, "Morning Run");
        assert_eq!(workout.target_distance, Some(9.5));
        assert_eq!(workout.target_duration, Some(45.0));
        assert_eq!(workout.description, "Easy aerobic run in Zone 2");
        assert!(!workout.completed);
    }

    #[test]
    fn test_workout_date() {
        let plan = TrainingPlan {
            id: "p".to_string(),
            name: "General Fitness".to_string(),
            template: PlanTemplate::General,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            weeks: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(
            plan.workout_date(1, 0),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
        assert_eq!(
            plan.workout_date(2, 6),
            NaiveDate::from_ymd_opt(2024, 3, 17)
        );
        assert_eq!(plan.workout_date(0, 0), None);
    }
}
