use serde::{Deserialize, Serialize};

/// Race distances accepted by the VDOT calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half")]
    HalfMarathon,
}

impl RaceDistance {
    pub fn meters(&self) -> f64 {
        match self {
            RaceDistance::FiveK => 5000.0,
            RaceDistance::TenK => 10000.0,
            RaceDistance::HalfMarathon => 21097.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RaceDistance::FiveK => "5k",
            RaceDistance::TenK => "10k",
            RaceDistance::HalfMarathon => "half",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RaceDistance::FiveK => "5K",
            RaceDistance::TenK => "10K",
            RaceDistance::HalfMarathon => "Half Marathon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub distance: RaceDistance,
    pub time_in_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrZone {
    pub zone: u8,
    pub name: String,
    pub description: String,
    pub color: String,
    pub min_hr: u32,
    pub max_hr: u32,
}

/// Pace band in seconds per km. `min_pace` is the faster bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceZone {
    #[serde(rename = "type")]
    pub zone_type: String,
    pub description: String,
    pub min_pace: f64,
    pub max_pace: f64,
}

/// Where the zones of a profile came from. Exactly one source is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ZoneSource {
    MaxHr { max_hr: u32 },
    LactateThreshold { lactate_threshold_hr: u32 },
    Race { race: RaceResult },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub source: ZoneSource,
    pub zones: Vec<HrZone>,
    pub pace_zones: Vec<PaceZone>,
}

impl UserProfile {
    pub fn max_hr(&self) -> Option<u32> {
        match self.source {
            ZoneSource::MaxHr { max_hr } => Some(max_hr),
            _ => None,
        }
    }

    pub fn lactate_threshold_hr(&self) -> Option<u32> {
        match self.source {
            ZoneSource::LactateThreshold {
                lactate_threshold_hr,
            } => Some(lactate_threshold_hr),
            _ => None,
        }
    }

    pub fn recent_race(&self) -> Option<RaceResult> {
        match self.source {
            ZoneSource::Race { race } => Some(race),
            _ => None,
        }
    }

    pub fn has_zones(&self) -> bool {
        !self.zones.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    MaxHr,
    Lthr,
    Race,
}

/// Calculator input. Only the fields belonging to `method` are read.
#[derive(Debug, Deserialize)]
pub struct CalculateProfile {
    pub method: CalculationMethod,
    #[serde(default)]
    pub max_hr: Option<u32>,
    #[serde(default)]
    pub lactate_threshold_hr: Option<u32>,
    #[serde(default)]
    pub race_distance: Option<RaceDistance>,
    #[serde(default)]
    pub race_time: Option<String>,
}
