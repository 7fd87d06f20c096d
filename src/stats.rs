//! Aggregates over logged workouts for the statistics and dashboard views.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::calculations::zone_for_hr;
use crate::models::{CompletedWorkout, HrZone, TrainingPlan, WorkoutType};

pub const WEEKLY_VOLUME_WEEKS: usize = 8;
pub const MONTHLY_SUMMARY_MONTHS: usize = 6;
pub const PACE_PROGRESS_POINTS: usize = 20;
const CALENDAR_DAYS: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyVolume {
    pub week_start: NaiveDate,
    pub distance: f64,
    pub duration: f64,
    pub workout_count: u32,
    pub avg_rpe: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// `YYYY-MM`
    pub month: String,
    pub workout_count: u32,
    pub distance: f64,
    pub duration: f64,
    pub avg_rpe: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCount {
    pub workout_type: WorkoutType,
    pub label: &'static str,
    pub color: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCount {
    pub zone: u8,
    pub name: String,
    pub color: String,
    pub workouts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacePoint {
    pub date: NaiveDate,
    pub pace: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub distance: f64,
    pub duration: f64,
    pub workout_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub is_current_month: bool,
    pub has_completed: bool,
    pub has_planned: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub total_workouts: usize,
    pub weekly_volume: Vec<WeeklyVolume>,
    pub monthly_summary: Vec<MonthlySummary>,
    pub type_distribution: Vec<TypeCount>,
    pub zone_distribution: Vec<ZoneCount>,
    pub pace_progress: Vec<PacePoint>,
    pub calendar: Vec<CalendarDay>,
}

#[derive(Default)]
struct Totals {
    distance: f64,
    duration: f64,
    count: u32,
    rpe: u32,
}

impl Totals {
    fn add(&mut self, workout: &CompletedWorkout) {
        self.distance += workout.distance;
        self.duration += workout.duration;
        self.count += 1;
        self.rpe += u32::from(workout.rpe);
    }

    fn avg_rpe(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            f64::from(self.rpe) / f64::from(self.count)
        }
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Most recent weeks with any activity, oldest first.
pub fn weekly_volume(workouts: &[CompletedWorkout]) -> Vec<WeeklyVolume> {
    let mut weeks: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for workout in workouts {
        weeks.entry(week_start(workout.date)).or_default().add(workout);
    }

    let skip = weeks.len().saturating_sub(WEEKLY_VOLUME_WEEKS);
    weeks
        .into_iter()
        .skip(skip)
        .map(|(week_start, totals)| WeeklyVolume {
            week_start,
            distance: totals.distance,
            duration: totals.duration,
            workout_count: totals.count,
            avg_rpe: totals.avg_rpe(),
        })
        .collect()
}

/// Most recent months with any activity, newest first.
pub fn monthly_summary(workouts: &[CompletedWorkout]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<(i32, u32), Totals> = BTreeMap::new();
    for workout in workouts {
        months
            .entry((workout.date.year(), workout.date.month()))
            .or_default()
            .add(workout);
    }

    months
        .into_iter()
        .rev()
        .take(MONTHLY_SUMMARY_MONTHS)
        .map(|((year, month), totals)| MonthlySummary {
            month: format!("{:04}-{:02}", year, month),
            workout_count: totals.count,
            distance: totals.distance,
            duration: totals.duration,
            avg_rpe: totals.avg_rpe(),
        })
        .collect()
}

pub fn type_distribution(workouts: &[CompletedWorkout]) -> Vec<TypeCount> {
    WorkoutType::ALL
        .iter()
        .filter_map(|workout_type| {
            let count = workouts
                .iter()
                .filter(|w| w.workout_type == *workout_type)
                .count() as u32;
            (count > 0).then(|| TypeCount {
                workout_type: *workout_type,
                label: workout_type.label(),
                color: workout_type.color(),
                count,
            })
        })
        .collect()
}

/// Workouts per HR zone by average heart rate. Workouts without an average
/// HR, or whose HR falls between zones, are not counted.
pub fn zone_distribution(workouts: &[CompletedWorkout], zones: &[HrZone]) -> Vec<ZoneCount> {
    let mut counts: BTreeMap<u8, u32> = BTreeMap::new();
    for avg_hr in workouts.iter().filter_map(|w| w.avg_hr) {
        if let Some(zone) = zone_for_hr(avg_hr, zones) {
            *counts.entry(zone.zone).or_default() += 1;
        }
    }

    zones
        .iter()
        .map(|z| ZoneCount {
            zone: z.zone,
            name: format!("Z{}", z.zone),
            color: z.color.clone(),
            workouts: counts.get(&z.zone).copied().unwrap_or(0),
        })
        .collect()
}

/// Average pace of easy and long runs over time, oldest first.
pub fn pace_progress(workouts: &[CompletedWorkout]) -> Vec<PacePoint> {
    let mut points: Vec<PacePoint> = workouts
        .iter()
        .filter(|w| matches!(w.workout_type, WorkoutType::Easy | WorkoutType::Long))
        .map(|w| PacePoint {
            date: w.date,
            pace: w.avg_pace,
        })
        .collect();
    points.sort_by_key(|p| p.date);

    let skip = points.len().saturating_sub(PACE_PROGRESS_POINTS);
    points.split_off(skip)
}

/// Totals for workouts dated within the 7 days up to `today`.
pub fn last_seven_days(workouts: &[CompletedWorkout], today: NaiveDate) -> PeriodSummary {
    let since = today.checked_sub_days(Days::new(7)).unwrap_or(today);
    workouts
        .iter()
        .filter(|w| w.date >= since)
        .fold(PeriodSummary::default(), |mut summary, w| {
            summary.distance += w.distance;
            summary.duration += w.duration;
            summary.workout_count += 1;
            summary
        })
}

/// Six Monday-aligned weeks covering the month of `today`.
pub fn calendar(
    today: NaiveDate,
    workouts: &[CompletedWorkout],
    plan: Option<&TrainingPlan>,
) -> Vec<CalendarDay> {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let start = week_start(first_of_month);
    let planned = plan.map(planned_dates).unwrap_or_default();

    (0..CALENDAR_DAYS)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| CalendarDay {
            date,
            day: date.day(),
            is_current_month: date.month() == today.month() && date.year() == today.year(),
            has_completed: workouts.iter().any(|w| w.date == date),
            has_planned: planned.contains(&date),
        })
        .collect()
}

/// Dates of every non-rest workout in the plan.
fn planned_dates(plan: &TrainingPlan) -> Vec<NaiveDate> {
    plan.weeks
        .iter()
        .flat_map(|week| {
            week.workouts
                .iter()
                .filter(|w| w.workout_type != WorkoutType::Rest)
                .filter_map(|w| plan.workout_date(week.week_number, w.day))
        })
        .collect()
}

pub fn rpe_label(rpe: u8) -> &'static str {
    match rpe {
        1 => "Very Light",
        2 | 3 => "Light",
        4 | 5 => "Moderate",
        6 => "Somewhat Hard",
        7 => "Hard",
        8 | 9 => "Very Hard",
        10 => "Maximum",
        _ => "",
    }
}

pub fn build_report(
    workouts: &[CompletedWorkout],
    zones: &[HrZone],
    plan: Option<&TrainingPlan>,
    today: NaiveDate,
) -> StatsReport {
    StatsReport {
        total_workouts: workouts.len(),
        weekly_volume: weekly_volume(workouts),
        monthly_summary: monthly_summary(workouts),
        type_distribution: type_distribution(workouts),
        zone_distribution: zone_distribution(workouts, zones),
        pace_progress: pace_progress(workouts),
        calendar: calendar(today, workouts, plan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::zones_from_max_hr;
    use crate::models::PlanTemplate;
    use crate::plans::generate_plan;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workout(
        date: NaiveDate,
        workout_type: WorkoutType,
        distance: f64,
        duration: f64,
        rpe: u8,
    ) -> CompletedWorkout {
        CompletedWorkout {
            id: format!("{}-{}", date, distance),
            planned_workout_id: None,
            date,
            workout_type,
            name: workout_type.label().to_string(),
            distance,
            duration,
            avg_hr: None,
            avg_pace: duration * 60.0 / distance,
            rpe,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-05-01 is a Wednesday
        assert_eq!(week_start(date(2024, 5, 1)), date(2024, 4, 29));
        assert_eq!(week_start(date(2024, 4, 29)), date(2024, 4, 29));
        // Sunday belongs to the preceding Monday
        assert_eq!(week_start(date(2024, 5, 5)), date(2024, 4, 29));
    }

    #[test]
    fn test_weekly_volume_groups_by_week() {
        let workouts = vec![
            workout(date(2024, 5, 1), WorkoutType::Easy, 8.0, 48.0, 4),
            workout(date(2024, 5, 5), WorkoutType::Long, 16.0, 100.0, 6),
            workout(date(2024, 5, 7), WorkoutType::Threshold, 12.0, 58.0, 8),
        ];

        let weeks = weekly_volume(&workouts);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, date(2024, 4, 29));
        assert_eq!(weeks[0].distance, 24.0);
        assert_eq!(weeks[0].duration, 148.0);
        assert_eq!(weeks[0].workout_count, 2);
        assert_eq!(weeks[0].avg_rpe, 5.0);
        assert_eq!(weeks[1].week_start, date(2024, 5, 6));
    }

    #[test]
    fn test_weekly_volume_keeps_last_eight_weeks() {
        let workouts: Vec<CompletedWorkout> = (0..10)
            .map(|i| workout(date(2024, 1, 1) + Days::new(i * 7), WorkoutType::Easy, 5.0, 30.0, 3))
            .collect();

        let weeks = weekly_volume(&workouts);
        assert_eq!(weeks.len(), 8);
        assert_eq!(weeks[0].week_start, date(2024, 1, 15));
        assert_eq!(weeks[7].week_start, date(2024, 3, 4));
    }

    #[test]
    fn test_monthly_summary_newest_first() {
        let workouts = vec![
            workout(date(2024, 3, 10), WorkoutType::Easy, 10.0, 60.0, 4),
            workout(date(2024, 4, 2), WorkoutType::Easy, 5.0, 30.0, 3),
            workout(date(2024, 4, 20), WorkoutType::Threshold, 12.0, 58.0, 8),
        ];

        let months = monthly_summary(&workouts);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "2024-04");
        assert_eq!(months[0].workout_count, 2);
        assert_eq!(months[0].distance, 17.0);
        assert_eq!(months[0].avg_rpe, 5.5);
        assert_eq!(months[1].month, "2024-03");
    }

    #[test]
    fn test_monthly_summary_limits_to_six() {
        let workouts: Vec<CompletedWorkout> = (1..=9)
            .map(|m| workout(date(2024, m, 15), WorkoutType::Easy, 5.0, 30.0, 3))
            .collect();

        let months = monthly_summary(&workouts);
        assert_eq!(months.len(), 6);
        assert_eq!(months[0].month, "2024-09");
        assert_eq!(months[5].month, "2024-04");
    }

    #[test]
    fn test_type_distribution() {
        let workouts = vec![
            workout(date(2024, 5, 1), WorkoutType::Easy, 8.0, 48.0, 4),
            workout(date(2024, 5, 2), WorkoutType::Easy, 8.0, 48.0, 4),
            workout(date(2024, 5, 3), WorkoutType::Threshold, 12.0, 58.0, 8),
        ];

        let distribution = type_distribution(&workouts);
        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution[0].workout_type, WorkoutType::Easy);
        assert_eq!(distribution[0].count, 2);
        assert_eq!(distribution[0].label, "Easy Run");
        assert_eq!(distribution[1].count, 1);
    }

    #[test]
    fn test_zone_distribution_counts_by_avg_hr() {
        let zones = zones_from_max_hr(190);
        let mut easy = workout(date(2024, 5, 1), WorkoutType::Easy, 8.0, 48.0, 4);
        easy.avg_hr = Some(125);
        let mut threshold = workout(date(2024, 5, 2), WorkoutType::Threshold, 12.0, 58.0, 8);
        threshold.avg_hr = Some(165);
        let mut sprint = workout(date(2024, 5, 3), WorkoutType::Intervals, 6.0, 30.0, 9);
        sprint.avg_hr = Some(200);
        let no_hr = workout(date(2024, 5, 4), WorkoutType::Easy, 5.0, 30.0, 3);

        let distribution = zone_distribution(&[easy, threshold, sprint, no_hr], &zones);
        let counts: Vec<u32> = distribution.iter().map(|z| z.workouts).collect();
        assert_eq!(counts, vec![0, 1, 0, 1, 1]);
        assert_eq!(distribution[0].name, "Z1");
    }

    #[test]
    fn test_zone_distribution_without_zones_is_empty() {
        let workouts = vec![workout(date(2024, 5, 1), WorkoutType::Easy, 8.0, 48.0, 4)];
        assert!(zone_distribution(&workouts, &[]).is_empty());
    }

    #[test]
    fn test_pace_progress_only_easy_and_long_sorted() {
        let workouts = vec![
            workout(date(2024, 5, 9), WorkoutType::Long, 16.0, 96.0, 6),
            workout(date(2024, 5, 1), WorkoutType::Easy, 10.0, 55.0, 4),
            workout(date(2024, 5, 3), WorkoutType::Threshold, 12.0, 58.0, 8),
        ];

        let points = pace_progress(&workouts);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date(2024, 5, 1));
        assert_eq!(points[0].pace, 330.0);
        assert_eq!(points[1].pace, 360.0);
    }

    #[test]
    fn test_pace_progress_keeps_last_twenty() {
        let workouts: Vec<CompletedWorkout> = (0..25)
            .map(|i| workout(date(2024, 1, 1) + Days::new(i), WorkoutType::Easy, 5.0, 30.0, 3))
            .collect();

        let points = pace_progress(&workouts);
        assert_eq!(points.len(), 20);
        assert_eq!(points[0].date, date(2024, 1, 6));
    }

    #[test]
    fn test_last_seven_days() {
        let today = date(2024, 5, 10);
        let workouts = vec![
            workout(date(2024, 5, 10), WorkoutType::Easy, 8.0, 48.0, 4),
            workout(date(2024, 5, 3), WorkoutType::Easy, 6.0, 36.0, 4),
            workout(date(2024, 5, 2), WorkoutType::Long, 20.0, 120.0, 6),
        ];

        let summary = last_seven_days(&workouts, today);
        assert_eq!(summary.workout_count, 2);
        assert_eq!(summary.distance, 14.0);
        assert_eq!(summary.duration, 84.0);
    }

    #[test]
    fn test_calendar_marks_completed_and_planned() {
        // May 2024 starts on a Wednesday; the grid starts Monday April 29.
        let today = date(2024, 5, 15);
        let workouts = vec![workout(date(2024, 5, 2), WorkoutType::Easy, 8.0, 48.0, 4)];
        let plan = generate_plan(PlanTemplate::General, date(2024, 5, 6));

        let days = calendar(today, &workouts, Some(&plan));
        assert_eq!(days.len(), 42);
        assert_eq!(days[0].date, date(2024, 4, 29));
        assert!(!days[0].is_current_month);
        assert!(days[2].is_current_month);

        let may2 = days.iter().find(|d| d.date == date(2024, 5, 2)).unwrap();
        assert!(may2.has_completed);
        assert!(!may2.has_planned);

        // Plan week 1: Monday easy run, Friday rest
        let may6 = days.iter().find(|d| d.date == date(2024, 5, 6)).unwrap();
        assert!(may6.has_planned);
        let may10 = days.iter().find(|d| d.date == date(2024, 5, 10)).unwrap();
        assert!(!may10.has_planned);
    }

    #[test]
    fn test_calendar_without_plan() {
        let days = calendar(date(2024, 2, 10), &[], None);
        assert_eq!(days.len(), 42);
        assert!(days.iter().all(|d| !d.has_planned && !d.has_completed));
    }

    #[test]
    fn test_rpe_labels() {
        assert_eq!(rpe_label(1), "Very Light");
        assert_eq!(rpe_label(5), "Moderate");
        assert_eq!(rpe_label(6), "Somewhat Hard");
        assert_eq!(rpe_label(10), "Maximum");
        assert_eq!(rpe_label(0), "");
        assert_eq!(rpe_label(11), "");
    }

    #[test]
    fn test_build_report_empty() {
        let report = build_report(&[], &zones_from_max_hr(185), None, date(2024, 5, 1));
        assert_eq!(report.total_workouts, 0);
        assert!(report.weekly_volume.is_empty());
        assert!(report.monthly_summary.is_empty());
        assert_eq!(report.zone_distribution.len(), 5);
        assert_eq!(report.calendar.len(), 42);
    }
}
