pub mod dashboard;
pub mod health;
pub mod plans;
pub mod profile;
pub mod stats;
pub mod workouts;
