use crate::{
    algorithm::bucketing::AnalysisDirection,
    config::{Origin, ReferenceYears},
    model::ZonalError,
    pipeline::ZonalAnalysis,
    report::ReportLocation,
};
use chrono::{DateTime, Local};
use csv::QuoteStyle;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// location of the outputs of a run started at `timestamp`,
/// `<output_directory>/<direction>_analysis/<timestamp>`.
pub fn run_directory(
    output_directory: &Path,
    direction: AnalysisDirection,
    timestamp: &DateTime<Local>,
) -> PathBuf {
    output_directory
        .join(format!("{direction}_analysis"))
        .join(timestamp.format(TIMESTAMP_FORMAT).to_string())
}

/// creates the run directory for an analysis starting now.
pub fn create_run_directory(
    output_directory: &Path,
    direction: AnalysisDirection,
) -> Result<PathBuf, ZonalError> {
    let dir = run_directory(output_directory, direction, &Local::now());
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// writes a two-column table. header names are quoted, values are written with their
/// `Display` text and left unquoted.
pub fn write_table<K, V>(
    filepath: &Path,
    headers: [&str; 2],
    rows: impl IntoIterator<Item = (K, V)>,
) -> Result<(), ZonalError>
where
    K: Display,
    V: Display,
{
    let to_error = |source: csv::Error| ZonalError::CsvWriteError {
        filepath: filepath.to_string_lossy().to_string(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_path(filepath)
        .map_err(to_error)?;
    let [k, v] = headers;
    writer
        .write_record([format!("\"{k}\""), format!("\"{v}\"")])
        .map_err(to_error)?;
    for (key, value) in rows {
        writer
            .write_record([key.to_string(), value.to_string()])
            .map_err(to_error)?;
    }
    writer.flush()?;
    Ok(())
}

/// writes every table of an analysis into `run_directory`. a table that fails to write is
/// logged and skipped.
///
/// # Arguments
///
/// * `run_directory` - existing directory for the outputs of this run
/// * `analysis`      - the analysis to export
/// * `years`         - labels used in population and access domain file names and headers
/// * `origin`        - starting point of the reachability search, written when present
///
/// # Returns
///
/// * paths of the tables that were written
pub fn export_analysis(
    run_directory: &Path,
    analysis: &ZonalAnalysis,
    years: &ReferenceYears,
    origin: Option<&Origin>,
) -> Vec<PathBuf> {
    let report = &analysis.report;
    let totals = &analysis.result.totals;
    let (a, b) = (years.year_a, years.year_b);
    let mut written = vec![];
    let mut write = |filename: String, result: Result<(), ZonalError>| match result {
        Ok(()) => written.push(run_directory.join(filename)),
        Err(e) => log::error!("skipping {filename}: {e}"),
    };
    let path = |filename: &str| run_directory.join(filename);

    let f = String::from("analysis_data_zones.csv");
    write(
        f.clone(),
        write_table(&path(&f), ["DataZone", "Duration"], report.durations.iter()),
    );
    if let Some(o) = origin {
        let f = String::from("analysis_starting_point.csv");
        write(
            f.clone(),
            write_table(
                &path(&f),
                ["Starting Point Latitude", "Starting Point Longitude"],
                [(o.latitude, o.longitude)],
            ),
        );
    }
    let location_headers = ["Location Latitude", "Location Longitude"];
    let f = String::from("analysis_all_locations.csv");
    write(
        f.clone(),
        write_table(&path(&f), location_headers, coordinates(&report.all_locations)),
    );
    let f = String::from("analysis_locations.csv");
    write(
        f.clone(),
        write_table(&path(&f), location_headers, coordinates(&report.used_locations)),
    );
    let f = format!("analysis_{a}_population.csv");
    write(
        f.clone(),
        write_table(
            &path(&f),
            ["Travel Interval", &format!("{a} Population")],
            totals.year_a().iter(),
        ),
    );
    let f = format!("analysis_{b}_population.csv");
    write(
        f.clone(),
        write_table(
            &path(&f),
            ["Travel Interval", &format!("{b} Population")],
            totals.year_b().iter(),
        ),
    );
    let f = format!("analysis_{a}_geo_access.csv");
    write(
        f.clone(),
        write_table(
            &path(&f),
            ["Data_Zone", &format!("{a}_Geographic_Access_Domain")],
            report.access_domain_a.iter(),
        ),
    );
    let f = format!("analysis_{b}_geo_access.csv");
    write(
        f.clone(),
        write_table(
            &path(&f),
            ["Data_Zone", &format!("{b}_Geographic_Access_Domain")],
            report.access_domain_b.iter(),
        ),
    );
    let f = format!("analysis_{a}_geo_access_domain_rank.csv");
    write(
        f.clone(),
        write_table(
            &path(&f),
            ["Data_Zone", &format!("{a}_GeoAccess_Domain_Rank")],
            report.access_rank_a.iter(),
        ),
    );

    log::info!(
        "wrote {} tables to {}",
        written.len(),
        run_directory.to_string_lossy()
    );
    written
}

fn coordinates(locations: &[ReportLocation]) -> impl Iterator<Item = (f64, f64)> + '_ {
    locations.iter().map(|l| (l.latitude, l.longitude))
}

#[cfg(test)]
mod tests {
    use super::{export_analysis, run_directory, write_table};
    use crate::{
        algorithm::bucketing::{AnalysisDirection, BucketingParameters},
        config::{Origin, ReferenceYears},
        model::{
            journey::Journey,
            zone::{DataZone, ZoneCode, ZoneMetrics},
        },
        pipeline::run_analysis,
    };
    use chrono::{Local, TimeZone};
    use std::{collections::BTreeMap, path::Path, path::PathBuf};

    fn test_dir(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("bambam_zonal_tests")
            .join(test_name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn zone(name: &str, offset: f64, population_a: u64, rank: Option<i64>) -> DataZone {
        let (lo, hi) = (offset, offset + 1.0);
        let mut zone =
            DataZone::from_vertices(&[lo, lo, hi, hi, lo], &[lo, hi, hi, lo, lo], name).unwrap();
        zone.set_metrics(ZoneMetrics {
            population_a,
            population_b: population_a / 2,
            access_domain_a: 4,
            access_domain_b: 5,
            access_rank_a: rank,
        });
        zone
    }

    #[test]
    fn test_run_directory_layout() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let dir = run_directory(Path::new("out"), AnalysisDirection::Inbound, &ts);
        assert_eq!(
            dir,
            Path::new("out")
                .join("inbound_analysis")
                .join("2024-03-09T14-05-07")
        );
    }

    #[test]
    fn test_write_table_format() {
        let dir = test_dir("test_write_table_format");
        let path = dir.join("table.csv");
        write_table(&path, ["Travel Interval", "2020 Population"], [(30, 100), (60, 0)])
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "\"Travel Interval\",\"2020 Population\"\n30,100\n60,0\n");
    }

    #[test]
    fn test_durations_round_trip() {
        let dir = test_dir("test_durations_round_trip");
        let zones = vec![
            zone("S01000002.csv", 2.0, 200, None),
            zone("S01000001.csv", 0.0, 100, Some(11)),
        ];
        let journeys = vec![
            Journey::new(0.5, 0.5, -12.5),
            Journey::new(2.5, 2.5, -40.0),
        ];
        let params = BucketingParameters {
            max_travel_time_hours: -1,
            bin_width_minutes: 30,
            parallelize: false,
        };
        let analysis = run_analysis(&zones, &journeys, &params).unwrap();
        let written = export_analysis(&dir, &analysis, &ReferenceYears::default(), None);
        assert_eq!(written.len(), 8);
        assert!(!dir.join("analysis_starting_point.csv").exists());

        let mut reader = csv::Reader::from_path(dir.join("analysis_data_zones.csv")).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["DataZone", "Duration"]);
        let rows = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (ZoneCode::new(&r[0]), r[1].parse::<f64>().unwrap())
            })
            .collect::<BTreeMap<_, _>>();
        assert_eq!(rows, analysis.report.durations);
        let keys = rows.keys().map(|k| k.to_string()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["S01000001", "S01000002"]);

        let rank = std::fs::read_to_string(dir.join("analysis_2020_geo_access_domain_rank.csv"))
            .unwrap();
        assert_eq!(rank, "\"Data_Zone\",\"2020_GeoAccess_Domain_Rank\"\nS01000001,11\n");
        let population = std::fs::read_to_string(dir.join("analysis_2016_population.csv")).unwrap();
        assert_eq!(population, "\"Travel Interval\",\"2016 Population\"\n30,50\n60,100\n");
    }

    #[test]
    fn test_starting_point_written() {
        let dir = test_dir("test_starting_point_written");
        let analysis = run_analysis(
            &[],
            &[],
            &BucketingParameters {
                max_travel_time_hours: 1,
                bin_width_minutes: 30,
                parallelize: false,
            },
        )
        .unwrap();
        let origin = Origin {
            latitude: 57.5,
            longitude: -2.25,
        };
        let written = export_analysis(&dir, &analysis, &ReferenceYears::default(), Some(&origin));
        assert_eq!(written.len(), 9);
        let text = std::fs::read_to_string(dir.join("analysis_starting_point.csv")).unwrap();
        assert_eq!(
            text,
            "\"Starting Point Latitude\",\"Starting Point Longitude\"\n57.5,-2.25\n"
        );
    }
}
