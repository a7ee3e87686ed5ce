mod data_zone;
pub mod metrics_join;
mod zone_code;
mod zone_metrics;
mod zone_source;

pub use data_zone::DataZone;
pub use zone_code::ZoneCode;
pub use zone_metrics::ZoneMetrics;
pub use zone_source::ZoneSource;
