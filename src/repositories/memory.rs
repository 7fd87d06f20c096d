use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{PlanStore, ProfileStore, WorkoutStore};
use crate::error::Result;
use crate::models::{CompletedWorkout, TrainingPlan, UserProfile};

/// Process-local store with the same semantics as the SQLite repositories.
#[derive(Default)]
pub struct MemoryStore {
    profile: Mutex<Option<UserProfile>>,
    plan: Mutex<Option<TrainingPlan>>,
    workouts: Mutex<Vec<CompletedWorkout>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_newest_first(workouts: &mut [CompletedWorkout]) {
    workouts.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn load_profile(&self) -> Result<Option<UserProfile>> {
        Ok(self.profile.lock().await.clone())
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        *self.profile.lock().await = Some(profile.clone());
        Ok(())
    }

    async fn delete_profile(&self) -> Result<bool> {
        Ok(self.profile.lock().await.take().is_some())
    }
}

#[async_trait]
impl PlanStore for MemoryStore {
    async fn load_plan(&self) -> Result<Option<TrainingPlan>> {
        Ok(self.plan.lock().await.clone())
    }

    async fn save_plan(&self, plan: &TrainingPlan) -> Result<()> {
        *self.plan.lock().await = Some(plan.clone());
        Ok(())
    }

    async fn delete_plan(&self) -> Result<bool> {
        Ok(self.plan.lock().await.take().is_some())
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn load_workouts(&self) -> Result<Vec<CompletedWorkout>> {
        let mut workouts = self.workouts.lock().await.clone();
        sort_newest_first(&mut workouts);
        Ok(workouts)
    }

    async fn save_workouts(&self, workouts: &[CompletedWorkout]) -> Result<()> {
        *self.workouts.lock().await = workouts.to_vec();
        Ok(())
    }

    async fn find_workout(&self, id: &str) -> Result<Option<CompletedWorkout>> {
        Ok(self
            .workouts
            .lock()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn add_workout(&self, workout: &CompletedWorkout) -> Result<()> {
        self.workouts.lock().await.push(workout.clone());
        Ok(())
    }

    async fn update_workout(&self, workout: &CompletedWorkout) -> Result<bool> {
        let mut workouts = self.workouts.lock().await;
        match workouts.iter_mut().find(|w| w.id == workout.id) {
            Some(existing) => {
                *existing = workout.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_workout(&self, id: &str) -> Result<bool> {
        let mut workouts = self.workouts.lock().await;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        Ok(workouts.len() < before)
    }
}
