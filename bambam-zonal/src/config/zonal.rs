use super::{JourneyColumns, MetricsColumns};
use crate::{algorithm::bucketing::BucketingParameters, model::ZonalError};
use serde::{Deserialize, Serialize};

/// defines behaviors for a data zone accessibility analysis
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct ZonalAnalysisConfiguration {
    /// search horizon of the reachability analysis in hours. negative for inbound searches.
    pub max_travel_time_hours: i64,
    /// width of each travel time bucket in minutes
    pub bin_width_minutes: u32,
    pub reference_years: ReferenceYears,
    pub metrics_columns: MetricsColumns,
    pub journey_columns: JourneyColumns,
    /// the network location the reachability search started from, if known
    pub origin: Option<Origin>,
    pub parallelize: bool,
}

impl Default for ZonalAnalysisConfiguration {
    fn default() -> Self {
        Self {
            max_travel_time_hours: -1,
            bin_width_minutes: 30,
            reference_years: ReferenceYears::default(),
            metrics_columns: MetricsColumns::default(),
            journey_columns: JourneyColumns::default(),
            origin: None,
            parallelize: true,
        }
    }
}

impl ZonalAnalysisConfiguration {
    pub fn bucketing_parameters(&self) -> BucketingParameters {
        BucketingParameters {
            max_travel_time_hours: self.max_travel_time_hours,
            bin_width_minutes: self.bin_width_minutes,
            parallelize: self.parallelize,
        }
    }
}

impl TryFrom<&String> for ZonalAnalysisConfiguration {
    type Error = ZonalError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZonalError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ZonalError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZonalError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ZonalError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ZonalError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

/// labels of the two census years whose populations and access domains are compared.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ReferenceYears {
    pub year_a: u16,
    pub year_b: u16,
}

impl Default for ReferenceYears {
    fn default() -> Self {
        Self {
            year_a: 2020,
            year_b: 2016,
        }
    }
}

/// starting (outbound) or ending (inbound) point of the reachability search
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Origin {
    pub latitude: f64,
    pub longitude: f64,
}
