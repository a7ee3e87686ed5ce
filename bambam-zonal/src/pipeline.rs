use crate::{
    algorithm::bucketing::{calculate_populations, BucketingParameters, BucketingResult},
    model::{journey::Journey, zone::DataZone, ZonalError},
    report::ZonalReport,
};

/// the outcome of one zonal accessibility analysis.
#[derive(Clone, Debug)]
pub struct ZonalAnalysis {
    pub result: BucketingResult,
    pub report: ZonalReport,
}

/// runs the bucketing engine and derives the report tables from its assignment state.
///
/// # Arguments
///
/// * `zones`    - data zones with joined metrics
/// * `journeys` - journeys in the discovery order of the reachability search
/// * `params`   - bucketing parameters
///
/// # Returns
///
/// * the analysis result, or an error if the bucketing parameters are invalid
pub fn run_analysis(
    zones: &[DataZone],
    journeys: &[Journey],
    params: &BucketingParameters,
) -> Result<ZonalAnalysis, ZonalError> {
    let result = calculate_populations(zones, journeys, params)?;
    let report = ZonalReport::new(zones, journeys, &result)?;
    Ok(ZonalAnalysis { result, report })
}
