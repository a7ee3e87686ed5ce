use super::Journey;
use crate::{config::JourneyColumns, model::ZonalError};
use std::{collections::HashMap, path::Path};

/// reads the journeys discovered by a reachability search, in file order.
///
/// the file order is the discovery order of the search and is kept as-is, since the
/// zone assignment picks the first journey inside each zone. durations are kept as whole
/// minutes, truncated toward zero. a file that cannot be read
/// is logged and yields no journeys, rows that cannot be parsed are logged and skipped.
pub fn read_journeys(journeys_file: &Path, columns: &JourneyColumns) -> Vec<Journey> {
    match try_read_journeys(journeys_file, columns) {
        Ok(journeys) => {
            log::info!(
                "loaded {} journeys from {}",
                journeys.len(),
                journeys_file.display()
            );
            journeys
        }
        Err(e) => {
            log::error!("{e}, continuing without journeys");
            vec![]
        }
    }
}

fn try_read_journeys(
    journeys_file: &Path,
    columns: &JourneyColumns,
) -> Result<Vec<Journey>, ZonalError> {
    let filepath = journeys_file.display().to_string();
    let mut reader =
        csv::Reader::from_path(journeys_file).map_err(|source| ZonalError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| ZonalError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?
        .iter()
        .enumerate()
        .map(|(i, s)| (s.to_string(), i))
        .collect::<HashMap<_, _>>();
    let column_index = |name: &String| {
        headers.get(name).copied().ok_or_else(|| {
            ZonalError::ConfigurationError(format!("{filepath} missing '{name}' column"))
        })
    };
    let lat_idx = column_index(&columns.latitude)?;
    let lon_idx = column_index(&columns.longitude)?;
    let duration_idx = column_index(&columns.duration_minutes)?;

    let mut journeys = vec![];
    for (row_idx, record) in reader.records().enumerate() {
        let parsed = record.map_err(|e| e.to_string()).and_then(|row| {
            let lat = parse_finite(row.get(lat_idx), &columns.latitude)?;
            let lon = parse_finite(row.get(lon_idx), &columns.longitude)?;
            let duration = parse_finite(row.get(duration_idx), &columns.duration_minutes)?;
            Ok(Journey::new(lat, lon, duration.trunc()))
        });
        match parsed {
            Ok(journey) => journeys.push(journey),
            Err(e) => log::warn!("skipping row {row_idx} of {filepath}: {e}"),
        }
    }
    Ok(journeys)
}

fn parse_finite(value: Option<&str>, column: &str) -> Result<f64, String> {
    let s = value
        .ok_or_else(|| format!("missing '{column}' value"))?
        .trim();
    let x = s
        .parse::<f64>()
        .map_err(|e| format!("invalid '{column}' value '{s}': {e}"))?;
    if x.is_finite() {
        Ok(x)
    } else {
        Err(format!("non-finite '{column}' value '{s}'"))
    }
}
