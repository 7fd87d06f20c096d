//! Eight-week plan generation.
//!
//! The four templates share one week builder. They differ only in the slot
//! pattern laid over Monday..Sunday and in how easy and long run durations
//! scale with the week number.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::workouts::{
    easy_run, long_run, recovery_run, rest_day, threshold_session, THRESHOLD_WORKOUTS,
};
use crate::models::{PlanTemplate, PlannedWorkout, PlannedWorkoutUpdate, TrainingPlan, TrainingWeek};

pub const PLAN_WEEKS: u8 = 8;
pub const RECOVERY_WEEK: u8 = 5;
pub const TAPER_WEEK: u8 = 8;

/// The half marathon template's mid-week easy run is this much shorter.
const SHORT_EASY_OFFSET_MINUTES: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Easy,
    ShortEasy,
    Recovery,
    Threshold,
    /// Degrades to an easy run on recovery and taper weeks.
    SecondThreshold,
    Long,
    Rest,
}

/// Minutes for a run type: `base + per_week * week` on loading weeks, fixed
/// values on the recovery and taper weeks.
#[derive(Debug, Clone, Copy)]
struct DurationScale {
    base: f64,
    per_week: f64,
    recovery: f64,
    taper: f64,
}

impl DurationScale {
    fn minutes(&self, week: &WeekKind) -> f64 {
        match week {
            WeekKind::Recovery => self.recovery,
            WeekKind::Taper => self.taper,
            WeekKind::Loading(n) => self.base + self.per_week * f64::from(*n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekKind {
    Loading(u8),
    Recovery,
    Taper,
}

impl WeekKind {
    fn of(week_number: u8) -> Self {
        match week_number {
            RECOVERY_WEEK => WeekKind::Recovery,
            TAPER_WEEK => WeekKind::Taper,
            n => WeekKind::Loading(n),
        }
    }

    fn is_reduced(&self) -> bool {
        !matches!(self, WeekKind::Loading(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: PlanTemplate,
    pub name: &'static str,
    pub description: &'static str,
    pub weekly_volume: &'static str,
    pub threshold_sessions: u8,
    #[serde(skip)]
    slots: [Slot; 7],
    #[serde(skip)]
    easy: DurationScale,
    #[serde(skip)]
    long: DurationScale,
    #[serde(skip)]
    recovery_minutes: f64,
}

pub const PLAN_TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        id: PlanTemplate::FiveK,
        name: "5K Focus",
        description: "Build speed and VO2max for 5K racing while maintaining aerobic base.",
        weekly_volume: "40-60 km/week",
        threshold_sessions: 2,
        slots: [
            Slot::Easy,
            Slot::Threshold,
            Slot::Recovery,
            Slot::SecondThreshold,
            Slot::Rest,
            Slot::Long,
            Slot::Rest,
        ],
        easy: DurationScale {
            base: 40.0,
            per_week: 1.0,
            recovery: 35.0,
            taper: 30.0,
        },
        long: DurationScale {
            base: 60.0,
            per_week: 3.0,
            recovery: 50.0,
            taper: 40.0,
        },
        recovery_minutes: 25.0,
    },
    TemplateInfo {
        id: PlanTemplate::TenK,
        name: "10K Focus",
        description: "Develop threshold capacity and aerobic endurance for 10K performance.",
        weekly_volume: "50-70 km/week",
        threshold_sessions: 2,
        slots: [
            Slot::Easy,
            Slot::Threshold,
            Slot::Recovery,
            Slot::Easy,
            Slot::SecondThreshold,
            Slot::Long,
            Slot::Rest,
        ],
        easy: DurationScale {
            base: 45.0,
            per_week: 1.0,
            recovery: 40.0,
            taper: 35.0,
        },
        long: DurationScale {
            base: 75.0,
            per_week: 3.0,
            recovery: 60.0,
            taper: 50.0,
        },
        recovery_minutes: 30.0,
    },
    TemplateInfo {
        id: PlanTemplate::HalfMarathon,
        name: "Half Marathon Focus",
        description: "Build endurance and threshold capacity for half marathon racing.",
        weekly_volume: "60-80 km/week",
        threshold_sessions: 2,
        slots: [
            Slot::Easy,
            Slot::Threshold,
            Slot::ShortEasy,
            Slot::Recovery,
            Slot::SecondThreshold,
            Slot::Long,
            Slot::Rest,
        ],
        easy: DurationScale {
            base: 50.0,
            per_week: 1.0,
            recovery: 45.0,
            taper: 40.0,
        },
        long: DurationScale {
            base: 90.0,
            per_week: 5.0,
            recovery: 70.0,
            taper: 60.0,
        },
        recovery_minutes: 30.0,
    },
    TemplateInfo {
        id: PlanTemplate::General,
        name: "General Fitness",
        description: "Build a strong aerobic base with threshold training. Great for base building.",
        weekly_volume: "40-60 km/week",
        threshold_sessions: 1,
        slots: [
            Slot::Easy,
            Slot::Threshold,
            Slot::Recovery,
            Slot::Easy,
            Slot::Rest,
            Slot::Long,
            Slot::Rest,
        ],
        easy: DurationScale {
            base: 45.0,
            per_week: 2.0,
            recovery: 40.0,
            taper: 35.0,
        },
        long: DurationScale {
            base: 70.0,
            per_week: 5.0,
            recovery: 60.0,
            taper: 50.0,
        },
        recovery_minutes: 30.0,
    },
];

pub fn template_info(template: PlanTemplate) -> &'static TemplateInfo {
    let index = match template {
        PlanTemplate::FiveK => 0,
        PlanTemplate::TenK => 1,
        PlanTemplate::HalfMarathon => 2,
        PlanTemplate::General => 3,
    };
    &PLAN_TEMPLATES[index]
}

pub fn week_focus(week_number: u8) -> &'static str {
    match week_number {
        1 => "Introduction / Base",
        2 | 3 | 6 => "Building",
        4 | 7 => "Peak Load",
        5 => "Recovery",
        8 => "Taper / Race",
        _ => "",
    }
}

/// Catalog indices of the first and second threshold sessions of a week.
pub fn threshold_indices(week_number: u8) -> (usize, usize) {
    let count = THRESHOLD_WORKOUTS.len();
    let week = usize::from(week_number);
    (week.saturating_sub(1) % count, week % count)
}

pub fn generate_week(week_number: u8, template: PlanTemplate) -> TrainingWeek {
    let info = template_info(template);
    let kind = WeekKind::of(week_number);
    let easy_minutes = info.easy.minutes(&kind);
    let (first, second) = threshold_indices(week_number);

    let workouts = info
        .slots
        .iter()
        .zip(0u8..)
        .map(|(slot, day)| match slot {
            Slot::Easy => easy_run(day, easy_minutes),
            Slot::ShortEasy => easy_run(day, easy_minutes - SHORT_EASY_OFFSET_MINUTES),
            Slot::Recovery => recovery_run(day, info.recovery_minutes),
            Slot::Threshold => threshold_session(day, &THRESHOLD_WORKOUTS[first]),
            Slot::SecondThreshold if kind.is_reduced() => easy_run(day, easy_minutes),
            Slot::SecondThreshold => threshold_session(day, &THRESHOLD_WORKOUTS[second]),
            Slot::Long => long_run(day, info.long.minutes(&kind)),
            Slot::Rest => rest_day(day),
        })
        .collect();

    TrainingWeek {
        week_number,
        focus: week_focus(week_number).to_string(),
        workouts,
    }
}

pub fn generate_plan(template: PlanTemplate, start_date: NaiveDate) -> TrainingPlan {
    let now = Utc::now();
    let plan = TrainingPlan {
        id: Uuid::new_v4().to_string(),
        name: template_info(template).name.to_string(),
        template,
        start_date,
        weeks: (1..=PLAN_WEEKS)
            .map(|week| generate_week(week, template))
            .collect(),
        created_at: now,
        updated_at: now,
    };

    tracing::info!(
        "Generated {} plan {} starting {}",
        template.as_str(),
        plan.id,
        start_date
    );
    plan
}

/// Copy of `plan` with one workout edited. Unknown week or workout ids leave
/// the weeks untouched; `updated_at` is refreshed either way.
pub fn update_workout_in_plan(
    plan: &TrainingPlan,
    week_number: u8,
    workout_id: &str,
    update: &PlannedWorkoutUpdate,
) -> TrainingPlan {
    update_workout_in_plan_at(plan, week_number, workout_id, update, Utc::now())
}

pub fn update_workout_in_plan_at(
    plan: &TrainingPlan,
    week_number: u8,
    workout_id: &str,
    update: &PlannedWorkoutUpdate,
    now: DateTime<Utc>,
) -> TrainingPlan {
    let mut updated = plan.clone();
    updated.updated_at = now;

    if let Some(workout) = find_workout_mut(&mut updated, week_number, workout_id) {
        workout.apply(update);
    }
    updated
}

fn find_workout_mut<'a>(
    plan: &'a mut TrainingPlan,
    week_number: u8,
    workout_id: &str,
) -> Option<&'a mut PlannedWorkout> {
    plan.weeks
        .iter_mut()
        .find(|w| w.week_number == week_number)?
        .workouts
        .iter_mut()
        .find(|w| w.id == workout_id)
}

pub fn mark_workout_completed(
    plan: &TrainingPlan,
    week_number: u8,
    workout_id: &str,
    completed_workout_id: &str,
) -> TrainingPlan {
    update_workout_in_plan(
        plan,
        week_number,
        workout_id,
        &PlannedWorkoutUpdate {
            completed: Some(true),
            completed_workout_id: Some(completed_workout_id.to_string()),
            ..Default::default()
        },
    )
}
