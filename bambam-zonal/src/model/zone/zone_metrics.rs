use serde::{Deserialize, Serialize};

/// population and geographic access domain values of a data zone for the two
/// reference years of an analysis (A, the current year and B, the earlier year).
/// values stay at their defaults for zones that have no row in the metrics table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneMetrics {
    pub population_a: u64,
    pub population_b: u64,
    pub access_domain_a: i64,
    pub access_domain_b: i64,
    /// only published for reference year A
    pub access_rank_a: Option<i64>,
}
