pub mod pace;
pub mod zones;

pub use pace::{
    calculate_pace, format_pace, format_pace_range, format_time, pace_zones_from_race,
    pace_zones_from_vdot, parse_time_to_seconds, threshold_pace, vdot,
};
pub use zones::{
    estimate_max_hr_from_age, format_hr_range, threshold_hr_range, zone_for_hr,
    zones_from_lactate_threshold_hr, zones_from_max_hr,
};
