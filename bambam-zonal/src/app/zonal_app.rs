use crate::{
    config::ZonalAnalysisConfiguration,
    export,
    model::{
        journey::journey_source,
        zone::{metrics_join, ZoneSource},
        ZonalError,
    },
    pipeline::{self, ZonalAnalysis},
    report,
};
use clap::Args;
use std::path::Path;

/// inputs of a zonal accessibility analysis run
#[derive(Args, Clone, Debug)]
pub struct ZonalRunArguments {
    #[arg(long, help = "directory of zone boundary CSV files, one file per zone")]
    pub zones_directory: Option<String>,
    #[arg(long, help = "CSV file with a WKT polygon column and a zone id column")]
    pub zones_wkt_file: Option<String>,
    #[arg(long, default_value = "geometry", help = "WKT column of the zones WKT file")]
    pub geometry_column: String,
    #[arg(long, default_value = "id", help = "zone id column of the zones WKT file")]
    pub id_column: String,
    #[arg(long, help = "CSV file with population and access domain values per zone code")]
    pub metrics_file: Option<String>,
    #[arg(long, help = "CSV file of journeys found by the reachability search")]
    pub journeys_file: String,
    #[arg(long, help = "directory where a run directory of output tables is created")]
    pub output_directory: Option<String>,
    #[arg(long, help = "path to .toml or .json file with bambam-zonal parameters")]
    pub configuration_file: Option<String>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "search horizon in hours, negative for inbound searches (overrides configuration)"
    )]
    pub max_travel_time: Option<i64>,
    #[arg(long, help = "bucket width in minutes (overrides configuration)")]
    pub bin_width: Option<u32>,
}

/// runs a zonal accessibility analysis from the command line arguments: loads the zones,
/// metrics and journeys, computes the bucketed populations, logs the population summary and
/// exports the tables when an output directory is provided.
pub fn run(args: &ZonalRunArguments) -> Result<ZonalAnalysis, ZonalError> {
    let start_time = chrono::Local::now();
    log::info!("bambam-zonal run started at {}", start_time.to_rfc3339());

    let mut conf = match &args.configuration_file {
        None => ZonalAnalysisConfiguration::default(),
        Some(f) => {
            log::info!("reading bambam-zonal configuration from {f}");
            ZonalAnalysisConfiguration::try_from(f)?
        }
    };
    if let Some(max_travel_time) = args.max_travel_time {
        conf.max_travel_time_hours = max_travel_time;
    }
    if let Some(bin_width) = args.bin_width {
        conf.bin_width_minutes = bin_width;
    }

    let source = ZoneSource::new(
        args.zones_directory.as_ref(),
        args.zones_wkt_file.as_ref(),
        &args.geometry_column,
        &args.id_column,
    )?;
    let mut zones = source.build()?;
    if zones.is_empty() {
        return Err(ZonalError::ZoneSourceError(String::from(
            "no zones could be loaded",
        )));
    }
    match &args.metrics_file {
        Some(f) => {
            let n_matched =
                metrics_join::join_metrics(&mut zones, Path::new(f), &conf.metrics_columns);
            if n_matched == 0 {
                log::warn!("no zone matched a row of {f}, all zones have zero population");
            }
        }
        None => log::warn!("no metrics file provided, all zones have zero population"),
    }
    let journeys =
        journey_source::read_journeys(Path::new(&args.journeys_file), &conf.journey_columns);

    let analysis = pipeline::run_analysis(&zones, &journeys, &conf.bucketing_parameters())?;
    report::log_summary(&analysis.result.totals, &conf.reference_years);

    if let Some(out) = &args.output_directory {
        let run_directory =
            export::create_run_directory(Path::new(out), analysis.result.direction)?;
        let written = export::export_analysis(
            &run_directory,
            &analysis,
            &conf.reference_years,
            conf.origin.as_ref(),
        );
        for path in written.iter() {
            log::debug!("wrote {}", path.display());
        }
    }

    let elapsed = chrono::Local::now() - start_time;
    log::info!(
        "bambam-zonal run finished in {} ms",
        elapsed.num_milliseconds()
    );
    Ok(analysis)
}
