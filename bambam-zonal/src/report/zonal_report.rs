use super::ReportLocation;
use crate::{
    algorithm::bucketing::BucketingResult,
    model::{
        journey::{Journey, JourneyKey},
        zone::{DataZone, ZoneCode},
        ZonalError,
    },
};
use std::collections::{BTreeMap, HashSet};

/// per-zone lookup tables and journey location lists derived from a bucketing result.
///
/// every map is keyed by the zones that were matched to a representative journey,
/// including zones whose travel time fell beyond the last bucket boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZonalReport {
    /// representative travel time in non-negative minutes
    pub durations: BTreeMap<ZoneCode, f64>,
    pub access_domain_a: BTreeMap<ZoneCode, i64>,
    pub access_domain_b: BTreeMap<ZoneCode, i64>,
    /// zones without a published rank have no entry
    pub access_rank_a: BTreeMap<ZoneCode, i64>,
    /// every journey location, in journey order
    pub all_locations: Vec<ReportLocation>,
    /// representative journey locations, once per distinct journey, in order of first use
    pub used_locations: Vec<ReportLocation>,
}

impl ZonalReport {
    /// builds the report tables.
    ///
    /// # Arguments
    ///
    /// * `zones`    - the zones the result was computed over
    /// * `journeys` - the journeys the result was computed over
    /// * `result`   - assignment state of the bucketing engine
    ///
    /// # Returns
    ///
    /// * the report, or an error if the result refers to zones or journeys not in the inputs
    pub fn new(
        zones: &[DataZone],
        journeys: &[Journey],
        result: &BucketingResult,
    ) -> Result<ZonalReport, ZonalError> {
        let mut report = ZonalReport {
            all_locations: journeys.iter().map(ReportLocation::from).collect(),
            ..Default::default()
        };
        let mut used: HashSet<JourneyKey> = HashSet::new();
        for assignment in result.assignments.iter() {
            let zone = zones.get(assignment.zone_index).ok_or_else(|| {
                ZonalError::InternalError(format!(
                    "assignment refers to zone {} of {}",
                    assignment.zone_index,
                    zones.len()
                ))
            })?;
            let journey = journeys.get(assignment.journey_index).ok_or_else(|| {
                ZonalError::InternalError(format!(
                    "assignment refers to journey {} of {}",
                    assignment.journey_index,
                    journeys.len()
                ))
            })?;
            let code = zone.code().clone();
            let metrics = zone.metrics();
            report
                .durations
                .insert(code.clone(), journey.duration_minutes().abs());
            report
                .access_domain_a
                .insert(code.clone(), metrics.access_domain_a);
            report
                .access_domain_b
                .insert(code.clone(), metrics.access_domain_b);
            if let Some(rank) = metrics.access_rank_a {
                report.access_rank_a.insert(code, rank);
            }
            if used.insert(journey.key()) {
                report.used_locations.push(ReportLocation::from(journey));
            }
        }
        Ok(report)
    }
}
