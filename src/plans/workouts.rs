//! Threshold-session catalog and planned-workout builders.

use serde::Serialize;
use uuid::Uuid;

use crate::models::{PlannedWorkout, WorkoutType};

/// 10 min warmup plus 10 min cooldown.
pub const WARMUP_COOLDOWN_MINUTES: f64 = 20.0;

#[derive(Debug, Clone, Serialize)]
pub struct ThresholdWorkout {
    pub id: &'static str,
    pub name: &'static str,
    pub intervals: u32,
    /// Minutes per interval
    pub duration: f64,
    /// Minutes of easy jogging between intervals
    pub rest: f64,
    pub description: &'static str,
}

pub const THRESHOLD_WORKOUTS: &[ThresholdWorkout] = &[
    ThresholdWorkout {
        id: "threshold-4x8",
        name: "4x8 min Threshold",
        intervals: 4,
        duration: 8.0,
        rest: 2.0,
        description: "4 intervals of 8 minutes at threshold pace with 2 min easy jog recovery. Total: 32 min at threshold.",
    },
    ThresholdWorkout {
        id: "threshold-5x6",
        name: "5x6 min Threshold",
        intervals: 5,
        duration: 6.0,
        rest: 2.0,
        description: "5 intervals of 6 minutes at threshold pace with 2 min easy jog recovery. Total: 30 min at threshold.",
    },
    ThresholdWorkout {
        id: "threshold-3x10",
        name: "3x10 min Threshold",
        intervals: 3,
        duration: 10.0,
        rest: 3.0,
        description: "3 intervals of 10 minutes at threshold pace with 3 min easy jog recovery. Total: 30 min at threshold.",
    },
    ThresholdWorkout {
        id: "threshold-6x5",
        name: "6x5 min Threshold",
        intervals: 6,
        duration: 5.0,
        rest: 1.5,
        description: "6 intervals of 5 minutes at threshold pace with 90 sec easy jog recovery. Total: 30 min at threshold.",
    },
    ThresholdWorkout {
        id: "threshold-2x15",
        name: "2x15 min Threshold",
        intervals: 2,
        duration: 15.0,
        rest: 5.0,
        description: "2 intervals of 15 minutes at threshold pace with 5 min easy jog recovery. Total: 30 min at threshold.",
    },
];

pub fn threshold_workout(id: &str) -> Option<&'static ThresholdWorkout> {
    THRESHOLD_WORKOUTS.iter().find(|w| w.id == id)
}

/// Session length in minutes. Rest only sits between intervals.
pub fn threshold_duration(workout: &ThresholdWorkout) -> f64 {
    let work = f64::from(workout.intervals) * workout.duration;
    let rest = f64::from(workout.intervals.saturating_sub(1)) * workout.rest;
    WARMUP_COOLDOWN_MINUTES + work + rest
}

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES.get(usize::from(day)).copied().unwrap_or("")
}

pub fn planned_workout(
    day: u8,
    workout_type: WorkoutType,
    name: &str,
    description: &str,
) -> PlannedWorkout {
    PlannedWorkout {
        id: Uuid::new_v4().to_string(),
        day,
        workout_type,
        name: name.to_string(),
        description: description.to_string(),
        target_duration: None,
        target_distance: None,
        intervals: None,
        target_zone: None,
        completed: false,
        completed_workout_id: None,
    }
}

fn with_target(mut workout: PlannedWorkout, minutes: f64, zone: u8) -> PlannedWorkout {
    workout.target_duration = Some(minutes);
    workout.target_zone = Some(zone);
    workout
}

pub fn easy_run(day: u8, minutes: f64) -> PlannedWorkout {
    with_target(
        planned_workout(day, WorkoutType::Easy, "Easy Run", "Easy aerobic run in Zone 2"),
        minutes,
        2,
    )
}

pub fn recovery_run(day: u8, minutes: f64) -> PlannedWorkout {
    with_target(
        planned_workout(
            day,
            WorkoutType::Recovery,
            "Recovery Run",
            "Very easy recovery jog in Zone 1",
        ),
        minutes,
        1,
    )
}

pub fn long_run(day: u8, minutes: f64) -> PlannedWorkout {
    with_target(
        planned_workout(
            day,
            WorkoutType::Long,
            "Long Run",
            "Long easy run for aerobic development",
        ),
        minutes,
        2,
    )
}

pub fn rest_day(day: u8) -> PlannedWorkout {
    planned_workout(
        day,
        WorkoutType::Rest,
        "Rest Day",
        "Complete rest or light stretching",
    )
}

pub fn threshold_session(day: u8, workout: &ThresholdWorkout) -> PlannedWorkout {
    let mut planned = with_target(
        planned_workout(day, WorkoutType::Threshold, workout.name, workout.description),
        threshold_duration(workout),
        4,
    );
    planned.intervals = Some(format!("{}x{}min", workout.intervals, workout.duration));
    planned
}
