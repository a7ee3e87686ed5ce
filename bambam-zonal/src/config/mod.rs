mod source_columns;
mod zonal;

pub use source_columns::{JourneyColumns, MetricsColumns};
pub use zonal::{Origin, ReferenceYears, ZonalAnalysisConfiguration};
