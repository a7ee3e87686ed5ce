use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// whether the reachability search measured travel from the origin (outbound) or
/// to the origin (inbound). inbound searches report negative durations.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDirection {
    Inbound,
    Outbound,
}

impl AnalysisDirection {
    /// a negative search horizon denotes an inbound search
    pub fn from_max_travel_time(max_travel_time_hours: i64) -> AnalysisDirection {
        if max_travel_time_hours < 0 {
            AnalysisDirection::Inbound
        } else {
            AnalysisDirection::Outbound
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            AnalysisDirection::Inbound => -1.0,
            AnalysisDirection::Outbound => 1.0,
        }
    }

    /// flips the sign of an inbound duration so travel times compare against positive buckets
    pub fn normalize(&self, duration_minutes: f64) -> f64 {
        duration_minutes * self.sign()
    }
}

impl Display for AnalysisDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisDirection::Inbound => write!(f, "inbound"),
            AnalysisDirection::Outbound => write!(f, "outbound"),
        }
    }
}
