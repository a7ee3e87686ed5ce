use super::{
    journey_index::first_contained_scan, AnalysisDirection, BucketBoundaries, BucketScan,
    JourneyIndex, PopulationTotals,
};
use crate::model::{
    journey::Journey,
    zone::{DataZone, ZoneCode},
    ZonalError,
};
use kdam::tqdm;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// parameters of the travel time bucketing
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketingParameters {
    /// search horizon in hours, negative for inbound searches
    pub max_travel_time_hours: i64,
    pub bin_width_minutes: u32,
    /// run the zone containment search on the rayon thread pool
    pub parallelize: bool,
}

/// the representative journey of a zone and the bucket the zone's population went to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneAssignment {
    /// position of the zone in the zone collection
    pub zone_index: usize,
    /// position of the representative journey in the journey sequence
    pub journey_index: usize,
    /// None when the travel time exceeds every bucket boundary
    pub boundary: Option<u32>,
}

/// assignment state and per-bucket population totals of one analysis run.
#[derive(Clone, Debug)]
pub struct BucketingResult {
    pub direction: AnalysisDirection,
    pub boundaries: BucketBoundaries,
    /// one entry per assigned zone code, in zone order
    pub assignments: Vec<ZoneAssignment>,
    pub totals: PopulationTotals,
}

impl BucketingResult {
    /// assignments whose travel time was beyond the search horizon
    pub fn dropped(&self) -> impl Iterator<Item = &ZoneAssignment> {
        self.assignments.iter().filter(|a| a.boundary.is_none())
    }
}

/// assigns zones to travel time buckets and sums their populations per bucket.
///
/// each zone takes the first journey (in input order) located inside it as its
/// representative. a zone code is assigned at most once: when several zones share a code,
/// only the first of them with a contained journey is used. the zone's populations are added
/// to the smallest bucket boundary covering the representative's travel time, and to no other
/// bucket, so the totals form a histogram rather than a cumulative curve.
///
/// # Arguments
///
/// * `zones`    - data zones with joined metrics
/// * `journeys` - journeys in the discovery order of the reachability search
/// * `params`   - search horizon, bucket width, parallelism. the parallel search queries a
///   spatial index of the journeys, the sequential one scans them in order; both pick the
///   same representatives
///
/// # Returns
///
/// * the assignment state and the population totals, or an error if the parameters are invalid
pub fn calculate_populations(
    zones: &[DataZone],
    journeys: &[Journey],
    params: &BucketingParameters,
) -> Result<BucketingResult, ZonalError> {
    let direction = AnalysisDirection::from_max_travel_time(params.max_travel_time_hours);
    let boundaries = BucketBoundaries::new(params.max_travel_time_hours, params.bin_width_minutes)?;
    log::info!(
        "{} analysis over {} zones and {} journeys with {} buckets of {} minutes",
        direction,
        zones.len(),
        journeys.len(),
        boundaries.len(),
        boundaries.bin_width_minutes()
    );

    let representatives: Vec<Option<usize>> = if params.parallelize {
        let index = JourneyIndex::new(journeys);
        zones
            .par_iter()
            .map(|zone| index.first_contained(zone, journeys))
            .collect()
    } else {
        let matched: Vec<Option<usize>> = tqdm!(zones.iter(), desc = "matching journeys to zones")
            .map(|zone| first_contained_scan(zone, journeys))
            .collect();
        eprintln!();
        matched
    };

    let mut totals = PopulationTotals::new(&boundaries);
    let mut assigned_codes: HashSet<&ZoneCode> = HashSet::new();
    let mut assignments = vec![];
    for (zone_index, (zone, representative)) in zones.iter().zip(representatives).enumerate() {
        let Some(journey_index) = representative else {
            continue;
        };
        if !assigned_codes.insert(zone.code()) {
            continue;
        }
        let journey = &journeys[journey_index];
        let boundary = BucketScan::new(&boundaries, direction).scan(zone, journey, &mut totals);
        if boundary.is_none() {
            log::debug!(
                "zone {} travel time {} is beyond the {} minute horizon",
                zone.code(),
                journey.duration_minutes(),
                boundaries.limit_minutes()
            );
        }
        assignments.push(ZoneAssignment {
            zone_index,
            journey_index,
            boundary,
        });
    }

    let result = BucketingResult {
        direction,
        boundaries,
        assignments,
        totals,
    };
    log::info!(
        "matched {} of {} zones to a journey, {} beyond the search horizon",
        result.assignments.len(),
        zones.len(),
        result.dropped().count()
    );
    Ok(result)
}
