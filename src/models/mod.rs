pub mod completed_workout;
pub mod from_row;
pub mod plan;
pub mod profile;

pub use completed_workout::{CompletedWorkout, CreateCompletedWorkout};
pub use from_row::FromSqliteRow;
pub use plan::{
    CompletePlannedWorkout, CreatePlan, PlanTemplate, PlannedWorkout, PlannedWorkoutUpdate,
    TrainingPlan, TrainingWeek, WorkoutType,
};
pub use profile::{
    CalculateProfile, CalculationMethod, HrZone, PaceZone, RaceDistance, RaceResult, UserProfile,
    ZoneSource,
};
