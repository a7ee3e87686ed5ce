mod analysis_direction;
mod bucket_boundaries;
mod bucket_scan;
mod journey_index;
mod population_calculation;
mod population_totals;

pub use analysis_direction::AnalysisDirection;
pub use bucket_boundaries::BucketBoundaries;
pub use bucket_scan::BucketScan;
pub use journey_index::JourneyIndex;
pub use population_calculation::{
    calculate_populations, BucketingParameters, BucketingResult, ZoneAssignment,
};
pub use population_totals::PopulationTotals;
