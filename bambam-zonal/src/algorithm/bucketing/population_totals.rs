use super::BucketBoundaries;
use crate::model::zone::ZoneMetrics;
use std::collections::BTreeMap;

/// population accumulated per bucket boundary for both reference years. every
/// boundary has an entry, starting at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulationTotals {
    year_a: BTreeMap<u32, u64>,
    year_b: BTreeMap<u32, u64>,
}

impl PopulationTotals {
    pub fn new(boundaries: &BucketBoundaries) -> PopulationTotals {
        let zeros = boundaries
            .iter()
            .map(|b| (*b, 0))
            .collect::<BTreeMap<_, _>>();
        PopulationTotals {
            year_a: zeros.clone(),
            year_b: zeros,
        }
    }

    /// adds a zone's populations to one bucket. boundaries outside the bucket set are ignored.
    pub fn add(&mut self, boundary: u32, metrics: &ZoneMetrics) {
        if let Some(total) = self.year_a.get_mut(&boundary) {
            *total += metrics.population_a;
        }
        if let Some(total) = self.year_b.get_mut(&boundary) {
            *total += metrics.population_b;
        }
    }

    pub fn year_a(&self) -> &BTreeMap<u32, u64> {
        &self.year_a
    }

    pub fn year_b(&self) -> &BTreeMap<u32, u64> {
        &self.year_b
    }

    pub fn total_a(&self) -> u64 {
        self.year_a.values().sum()
    }

    pub fn total_b(&self) -> u64 {
        self.year_b.values().sum()
    }
}
