use serde::{Deserialize, Serialize};

/// column positions of the fields read from each row of the zone metrics table.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MetricsColumns {
    pub zone_code: usize,
    pub population_a: usize,
    pub population_b: usize,
    pub access_domain_a: usize,
    pub access_domain_b: usize,
    pub access_rank_a: usize,
}

impl Default for MetricsColumns {
    fn default() -> Self {
        Self {
            zone_code: 0,
            population_a: 1,
            population_b: 2,
            access_domain_a: 3,
            access_domain_b: 4,
            access_rank_a: 7,
        }
    }
}

/// names of the columns of a journeys file.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct JourneyColumns {
    pub latitude: String,
    pub longitude: String,
    pub duration_minutes: String,
}

impl Default for JourneyColumns {
    fn default() -> Self {
        Self {
            latitude: String::from("lat"),
            longitude: String::from("lon"),
            duration_minutes: String::from("duration_minutes"),
        }
    }
}
