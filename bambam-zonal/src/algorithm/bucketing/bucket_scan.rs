use super::{AnalysisDirection, BucketBoundaries, PopulationTotals};
use crate::model::{
    journey::{Journey, JourneyKey},
    zone::DataZone,
};
use std::collections::HashSet;

/// the bucket scan for one zone assignment. walks the boundaries in ascending
/// order and adds the zone's population to the first boundary covering the
/// journey's travel time.
///
/// a journey that has already been counted in this scan is never counted again,
/// so repeating the scan is idempotent. a fresh scan is created for every zone,
/// which means two zones sharing a representative journey are both counted.
pub struct BucketScan<'a> {
    boundaries: &'a BucketBoundaries,
    direction: AnalysisDirection,
    counted: HashSet<JourneyKey>,
}

impl<'a> BucketScan<'a> {
    pub fn new(boundaries: &'a BucketBoundaries, direction: AnalysisDirection) -> BucketScan<'a> {
        BucketScan {
            boundaries,
            direction,
            counted: HashSet::new(),
        }
    }

    /// scans the boundaries for a journey of a zone.
    ///
    /// # Returns
    ///
    /// * the boundary that received the zone's population, or None if nothing was added,
    ///   either because the travel time exceeds every boundary or because this journey was
    ///   already counted in this scan
    pub fn scan(
        &mut self,
        zone: &DataZone,
        journey: &Journey,
        totals: &mut PopulationTotals,
    ) -> Option<u32> {
        let travel_time = self.direction.normalize(journey.duration_minutes());
        let boundary = self.boundaries.covering_boundary(travel_time)?;
        if !self.counted.insert(journey.key()) {
            return None;
        }
        totals.add(boundary, zone.metrics());
        Some(boundary)
    }
}
