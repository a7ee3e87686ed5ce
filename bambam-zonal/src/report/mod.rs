mod population_summary;
mod report_location;
mod zonal_report;

pub use population_summary::{log_summary, summary_lines};
pub use report_location::ReportLocation;
pub use zonal_report::ZonalReport;
