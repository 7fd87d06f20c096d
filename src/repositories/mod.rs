//! Persistence for the three entity types the core produces.
//!
//! Handlers only see the store traits, so the SQLite repositories can be
//! swapped for [`memory::MemoryStore`] in tests. Profile and plan writes
//! overwrite the whole value; there is no partial merge at this layer.

pub mod memory;
pub mod plan_repo;
pub mod profile_repo;
pub mod workout_repo;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CompletedWorkout, TrainingPlan, UserProfile};

pub use memory::MemoryStore;
pub use plan_repo::PlanRepository;
pub use profile_repo::ProfileRepository;
pub use workout_repo::WorkoutRepository;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load_profile(&self) -> Result<Option<UserProfile>>;

    async fn save_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Returns whether a profile was removed.
    async fn delete_profile(&self) -> Result<bool>;
}

#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn load_plan(&self) -> Result<Option<TrainingPlan>>;

    async fn save_plan(&self, plan: &TrainingPlan) -> Result<()>;

    /// Returns whether a plan was removed.
    async fn delete_plan(&self) -> Result<bool>;
}

#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// All logged workouts, newest date first. Empty when nothing is stored.
    async fn load_workouts(&self) -> Result<Vec<CompletedWorkout>>;

    /// Replace the whole collection.
    async fn save_workouts(&self, workouts: &[CompletedWorkout]) -> Result<()>;

    async fn find_workout(&self, id: &str) -> Result<Option<CompletedWorkout>>;

    async fn add_workout(&self, workout: &CompletedWorkout) -> Result<()>;

    /// Returns `false` when no workout has that id.
    async fn update_workout(&self, workout: &CompletedWorkout) -> Result<bool>;

    async fn delete_workout(&self, id: &str) -> Result<bool>;
}
