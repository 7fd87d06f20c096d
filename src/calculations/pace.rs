//! VDOT and training paces after Jack Daniels' running formula.
//!
//! Inputs are trusted: a non-positive race time or an absurd VDOT produce
//! meaningless numbers rather than errors.

use crate::models::{PaceZone, RaceResult};

// VO2 cost of running at velocity v (m/min): C + B*v + A*v^2
const VO2_A: f64 = 0.000104;
const VO2_B: f64 = 0.182258;
const VO2_C: f64 = -4.6;

/// Used when the inverse quadratic has no real root.
pub const FALLBACK_VELOCITY: f64 = 200.0;

struct PaceBand {
    zone_type: &'static str,
    description: &'static str,
    intensity_min: f64,
    intensity_max: f64,
}

const PACE_BANDS: [PaceBand; 5] = [
    PaceBand {
        zone_type: "Easy",
        description: "Conversational pace for base building (Zone 1-2)",
        intensity_min: 0.59,
        intensity_max: 0.74,
    },
    PaceBand {
        zone_type: "Long Run",
        description: "Slightly slower than easy, sustainable for 90+ min",
        intensity_min: 0.55,
        intensity_max: 0.65,
    },
    PaceBand {
        zone_type: "Marathon",
        description: "Goal marathon pace (Zone 3)",
        intensity_min: 0.75,
        intensity_max: 0.84,
    },
    PaceBand {
        zone_type: "Threshold",
        description: "Lactate threshold pace for threshold sessions (Zone 4)",
        intensity_min: 0.83,
        intensity_max: 0.88,
    },
    PaceBand {
        zone_type: "Interval",
        description: "VO2max intervals, hard efforts (Zone 5)",
        intensity_min: 0.95,
        intensity_max: 1.0,
    },
];

/// Fraction of VO2max sustainable for a race lasting `time_minutes`.
fn percent_vo2max(time_minutes: f64) -> f64 {
    0.8 + 0.1894393 * (-0.012778 * time_minutes).exp()
        + 0.2989558 * (-0.1932605 * time_minutes).exp()
}

fn vo2_at_velocity(velocity: f64) -> f64 {
    VO2_C + VO2_B * velocity + VO2_A * velocity * velocity
}

pub fn vdot(race: &RaceResult) -> f64 {
    let time_minutes = f64::from(race.time_in_seconds) / 60.0;
    let velocity = race.distance.meters() / time_minutes;
    vo2_at_velocity(velocity) / percent_vo2max(time_minutes)
}

/// Velocity (m/min) whose VO2 cost equals `vo2`, i.e. the positive root of
/// `A*v^2 + B*v + (C - vo2) = 0`.
pub fn velocity_for_vo2(vo2: f64) -> f64 {
    let c = VO2_C - vo2;
    let discriminant = VO2_B * VO2_B - 4.0 * VO2_A * c;
    if discriminant < 0.0 {
        return FALLBACK_VELOCITY;
    }
    (-VO2_B + discriminant.sqrt()) / (2.0 * VO2_A)
}

/// Seconds per km at `velocity` m/min.
fn pace_for_velocity(velocity: f64) -> f64 {
    1000.0 / velocity * 60.0
}

/// The five pace zones for a VDOT, each rounded to whole seconds per km.
pub fn pace_zones_from_vdot(vdot: f64) -> [PaceZone; 5] {
    PACE_BANDS.map(|band| {
        let slow = velocity_for_vo2(vdot * band.intensity_min);
        let fast = velocity_for_vo2(vdot * band.intensity_max);
        PaceZone {
            zone_type: band.zone_type.to_string(),
            description: band.description.to_string(),
            min_pace: pace_for_velocity(fast).round(),
            max_pace: pace_for_velocity(slow).round(),
        }
    })
}

pub fn pace_zones_from_race(race: &RaceResult) -> [PaceZone; 5] {
    pace_zones_from_vdot(vdot(race))
}

pub fn threshold_pace(pace_zones: &[PaceZone]) -> Option<&PaceZone> {
    pace_zones.iter().find(|p| p.zone_type == "Threshold")
}

/// `m:ss` for a pace in seconds per km.
pub fn format_pace(seconds_per_km: f64) -> String {
    let total = seconds_per_km.round().max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn format_pace_range(min_pace: f64, max_pace: f64) -> String {
    format!("{} - {} /km", format_pace(min_pace), format_pace(max_pace))
}

/// Parses `mm:ss` or `h:mm:ss`. Anything else yields 0, which callers treat
/// as "no valid input".
pub fn parse_time_to_seconds(time: &str) -> u32 {
    let parts: Option<Vec<u32>> = time
        .trim()
        .split(':')
        .map(|part| part.trim().parse::<u32>().ok())
        .collect();

    let total = match parts.as_deref() {
        Some([minutes, seconds]) => minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(*seconds)),
        Some([hours, minutes, seconds]) => hours
            .checked_mul(3600)
            .zip(minutes.checked_mul(60))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(*seconds)),
        _ => None,
    };
    // Out-of-range totals are as unusable as malformed text.
    total.unwrap_or(0)
}

/// `h:mm:ss` when at least an hour, `m:ss` otherwise.
pub fn format_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Average pace in seconds per km; 0 when there is no distance.
pub fn calculate_pace(distance_km: f64, duration_minutes: f64) -> f64 {
    if distance_km <= 0.0 {
        return 0.0;
    }
    duration_minutes * 60.0 / distance_km
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RaceDistance;

    fn race(distance: RaceDistance, time_in_seconds: u32) -> RaceResult {
        RaceResult {
            distance,
            time_in_seconds,
        }
    }

    #[test]
    fn test_vdot_10k_45_minutes() {
        let value = vdot(&race(RaceDistance::TenK, 2700));
        assert!((value - 45.263).abs() < 0.01, "vdot was {}", value);
    }

    #[test]
    fn test_vdot_5k_20_minutes() {
        let value = vdot(&race(RaceDistance::FiveK, 1200));
        assert!((value - 49.806).abs() < 0.01, "vdot was {}", value);
    }

    #[test]
    fn test_vdot_half_marathon() {
        let value = vdot(&race(RaceDistance::HalfMarathon, 6300));
        assert!((value - 42.635).abs() < 0.01, "vdot was {}", value);
    }

    #[test]
    fn test_pace_zones_for_10k_45_minutes() {
        let zones = pace_zones_from_race(&race(RaceDistance::TenK, 2700));

        let summary: Vec<(&str, f64, f64)> = zones
            .iter()
            .map(|z| (z.zone_type.as_str(), z.min_pace, z.max_pace))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Easy", 318.0, 381.0),
                ("Long Run", 353.0, 402.0),
                ("Marathon", 287.0, 315.0),
                ("Threshold", 277.0, 290.0),
                ("Interval", 249.0, 260.0),
            ]
        );
    }

    #[test]
    fn test_threshold_pace_formatted() {
        let zones = pace_zones_from_race(&race(RaceDistance::TenK, 2700));
        let threshold = threshold_pace(&zones).unwrap();

        assert_eq!(format_pace(threshold.min_pace), "4:37");
        assert_eq!(format_pace(threshold.max_pace), "4:50");
        assert_eq!(
            format_pace_range(threshold.min_pace, threshold.max_pace),
            "4:37 - 4:50 /km"
        );
    }

    #[test]
    fn test_velocity_fallback_on_negative_discriminant() {
        assert_eq!(velocity_for_vo2(-200.0), FALLBACK_VELOCITY);
        let zones = pace_zones_from_vdot(-1000.0);
        assert!(zones.iter().all(|z| z.min_pace == 300.0 && z.max_pace == 300.0));
    }

    #[test]
    fn test_velocity_inverts_vo2_cost() {
        let velocity = 250.0;
        let vo2 = vo2_at_velocity(velocity);
        assert!((velocity_for_vo2(vo2) - velocity).abs() < 1e-6);
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(300.0), "5:00");
        assert_eq!(format_pace(277.0), "4:37");
        assert_eq!(format_pace(65.0), "1:05");
        // Never renders 60 seconds.
        assert_eq!(format_pace(299.6), "5:00");
    }

    #[test]
    fn test_parse_time_to_seconds() {
        assert_eq!(parse_time_to_seconds("25:30"), 1530);
        assert_eq!(parse_time_to_seconds("1:45:00"), 6300);
        assert_eq!(parse_time_to_seconds(" 45:00 "), 2700);
        assert_eq!(parse_time_to_seconds("garbage"), 0);
        assert_eq!(parse_time_to_seconds("25:xx"), 0);
        assert_eq!(parse_time_to_seconds(""), 0);
        assert_eq!(parse_time_to_seconds("1:2:3:4"), 0);
        assert_eq!(parse_time_to_seconds("1500"), 0);
    }

    #[test]
    fn test_parse_time_overflow_yields_zero() {
        assert_eq!(parse_time_to_seconds("99999999:00"), 0);
        assert_eq!(parse_time_to_seconds("4294967295:00"), 0);
        assert_eq!(parse_time_to_seconds("2000000:00:00"), 0);
        assert_eq!(parse_time_to_seconds("1:4294967295:00"), 0);
        assert_eq!(parse_time_to_seconds("71582788:15"), 4_294_967_295);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1530), "25:30");
        assert_eq!(format_time(6300), "1:45:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(3605), "1:00:05");
    }

    #[test]
    fn test_calculate_pace() {
        assert_eq!(calculate_pace(10.0, 50.0), 300.0);
        assert_eq!(calculate_pace(0.0, 50.0), 0.0);
        assert_eq!(calculate_pace(-1.0, 50.0), 0.0);
    }

    #[test]
    fn test_threshold_pace_missing() {
        let zones = pace_zones_from_vdot(45.0);
        assert!(threshold_pace(&zones[..2]).is_none());
    }
}
