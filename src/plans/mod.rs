pub mod templates;
pub mod workouts;

pub use templates::{
    generate_plan, generate_week, mark_workout_completed, template_info, update_workout_in_plan,
    TemplateInfo, PLAN_TEMPLATES,
};
pub use workouts::{threshold_duration, threshold_workout, ThresholdWorkout, THRESHOLD_WORKOUTS};
