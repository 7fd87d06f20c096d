//! Heart-rate zones for the five-zone threshold training model.
//!
//! Every bound is `round(percent / 100 * max_hr)` computed on its own, so the
//! table is contiguous by intent only. Zones built here share their boundary
//! values, but a stored or hand-edited table may contain gaps, which
//! [`zone_for_hr`] reports as `None`.

use crate::models::HrZone;

/// LTHR sits at roughly this fraction of max HR.
pub const LTHR_FRACTION_OF_MAX: f64 = 0.90;

#[derive(Debug, Clone, Copy)]
struct ZoneDefinition {
    zone: u8,
    name: &'static str,
    description: &'static str,
    color: &'static str,
    min_percent: u8,
    max_percent: u8,
}

impl ZoneDefinition {
    fn with_max_hr(self, max_hr: u32) -> HrZone {
        HrZone {
            zone: self.zone,
            name: self.name.to_string(),
            description: self.description.to_string(),
            color: self.color.to_string(),
            min_hr: percent_of(self.min_percent, max_hr),
            max_hr: percent_of(self.max_percent, max_hr),
        }
    }
}

const ZONE_DEFINITIONS: [ZoneDefinition; 5] = [
    ZoneDefinition {
        zone: 1,
        name: "Recovery",
        description: "Very easy, conversational pace. Active recovery.",
        color: "#22c55e",
        min_percent: 50,
        max_percent: 60,
    },
    ZoneDefinition {
        zone: 2,
        name: "Easy / Aerobic",
        description: "Easy running, can hold a conversation. Base building.",
        color: "#3b82f6",
        min_percent: 60,
        max_percent: 70,
    },
    ZoneDefinition {
        zone: 3,
        name: "Tempo",
        description: "Moderate effort, comfortably hard. Marathon pace.",
        color: "#eab308",
        min_percent: 70,
        max_percent: 80,
    },
    ZoneDefinition {
        zone: 4,
        name: "Threshold",
        description: "Hard effort at lactate threshold. Key zone for threshold sessions.",
        color: "#f97316",
        min_percent: 80,
        max_percent: 90,
    },
    ZoneDefinition {
        zone: 5,
        name: "VO2max",
        description: "Very hard, near maximum effort. Short intervals.",
        color: "#ef4444",
        min_percent: 90,
        max_percent: 100,
    },
];

fn percent_of(percent: u8, max_hr: u32) -> u32 {
    (f64::from(percent) / 100.0 * f64::from(max_hr)).round() as u32
}

/// Five zones from a max heart rate.
///
/// `max_hr` must be positive; it is not checked here.
pub fn zones_from_max_hr(max_hr: u32) -> [HrZone; 5] {
    ZONE_DEFINITIONS.map(|def| def.with_max_hr(max_hr))
}

/// Max HR estimated as `round(lthr / 0.90)`. An approximation, not a measurement.
pub fn max_hr_from_lthr(lactate_threshold_hr: u32) -> u32 {
    (f64::from(lactate_threshold_hr) / LTHR_FRACTION_OF_MAX).round() as u32
}

pub fn zones_from_lactate_threshold_hr(lactate_threshold_hr: u32) -> [HrZone; 5] {
    zones_from_max_hr(max_hr_from_lthr(lactate_threshold_hr))
}

/// Tanaka formula: `208 - 0.7 * age`. Saturates at 0 for absurd ages.
pub fn estimate_max_hr_from_age(age: f64) -> u32 {
    (208.0 - 0.7 * age).round().max(0.0) as u32
}

/// Zone containing `hr`.
///
/// Above every zone clamps to the top one, below every zone clamps to the
/// bottom one. A rate that falls between two zones' bounds yields `None`.
pub fn zone_for_hr(hr: u32, zones: &[HrZone]) -> Option<&HrZone> {
    if let Some(zone) = zones.iter().find(|z| hr >= z.min_hr && hr <= z.max_hr) {
        return Some(zone);
    }

    let (first, last) = (zones.first()?, zones.last()?);
    if hr > last.max_hr {
        return Some(last);
    }
    if hr < first.min_hr {
        return Some(first);
    }
    None
}

/// Zone 4 bounds.
pub fn threshold_hr_range(zones: &[HrZone]) -> Option<(u32, u32)> {
    zones
        .iter()
        .find(|z| z.zone == 4)
        .map(|z| (z.min_hr, z.max_hr))
}

pub fn format_hr_range(min: u32, max: u32) -> String {
    format!("{} - {} bpm", min, max)
}
