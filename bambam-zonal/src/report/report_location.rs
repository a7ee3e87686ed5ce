use crate::model::journey::Journey;
use serde::{Deserialize, Serialize};

/// a journey end point as written to the location tables.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Journey> for ReportLocation {
    fn from(value: &Journey) -> Self {
        ReportLocation {
            latitude: value.latitude(),
            longitude: value.longitude(),
        }
    }
}
