use super::{DataZone, ZoneCode, ZoneMetrics};
use crate::{config::MetricsColumns, model::ZonalError};
use csv::StringRecord;
use std::{collections::HashMap, path::Path};

/// joins the rows of a zone metrics CSV onto the zones with a matching zone code.
///
/// the metrics file is an optional input: when it cannot be read, the failure is logged and
/// every zone keeps its default metrics. rows that cannot be parsed are logged and skipped,
/// rows for codes that match no zone are skipped silently.
///
/// # Arguments
///
/// * `zones`        - zones to update
/// * `metrics_file` - CSV file with a header row and one row per zone code
/// * `columns`      - positions of the metrics fields in each row
///
/// # Returns
///
/// * the number of zones that received metrics
pub fn join_metrics(
    zones: &mut [DataZone],
    metrics_file: &Path,
    columns: &MetricsColumns,
) -> usize {
    let rows = match read_metrics(metrics_file, columns) {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("{e}, zones keep default metrics");
            return 0;
        }
    };

    let mut lookup: HashMap<ZoneCode, Vec<usize>> = HashMap::new();
    for (idx, zone) in zones.iter().enumerate() {
        lookup.entry(zone.code().clone()).or_default().push(idx);
    }

    let mut n_matched = 0;
    for (code, metrics) in rows {
        if let Some(indices) = lookup.get(&code) {
            for idx in indices {
                zones[*idx].set_metrics(metrics);
                n_matched += 1;
            }
        }
    }
    log::info!(
        "joined metrics onto {} of {} zones from {}",
        n_matched,
        zones.len(),
        metrics_file.display()
    );
    n_matched
}

/// reads all parsable rows of a metrics file. malformed rows are skipped with a warning.
pub fn read_metrics(
    metrics_file: &Path,
    columns: &MetricsColumns,
) -> Result<Vec<(ZoneCode, ZoneMetrics)>, ZonalError> {
    let filepath = metrics_file.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(metrics_file)
        .map_err(|source| ZonalError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?;

    let mut rows = vec![];
    for (row_idx, record) in reader.records().enumerate() {
        let parsed = record
            .map_err(|e| e.to_string())
            .and_then(|r| parse_metrics_row(&r, columns));
        match parsed {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("skipping row {row_idx} of {filepath}: {e}"),
        }
    }
    Ok(rows)
}

/// parses one metrics row. the rank column may be absent or empty.
fn parse_metrics_row(
    row: &StringRecord,
    columns: &MetricsColumns,
) -> Result<(ZoneCode, ZoneMetrics), String> {
    let code_str = row
        .get(columns.zone_code)
        .ok_or_else(|| format!("missing zone code at column {}", columns.zone_code))?
        .trim()
        .trim_matches('"');
    if code_str.is_empty() {
        return Err(String::from("empty zone code"));
    }
    let access_rank_a = match row.get(columns.access_rank_a).map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(
            s.parse::<i64>().map_err(|e| {
                format!("invalid rank '{s}' at column {}: {e}", columns.access_rank_a)
            })?,
        ),
    };
    let metrics = ZoneMetrics {
        population_a: parse_field(row, columns.population_a)?,
        population_b: parse_field(row, columns.population_b)?,
        access_domain_a: parse_field(row, columns.access_domain_a)?,
        access_domain_b: parse_field(row, columns.access_domain_b)?,
        access_rank_a,
    };
    Ok((ZoneCode::new(code_str), metrics))
}

fn parse_field<T>(row: &StringRecord, idx: usize) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = row
        .get(idx)
        .ok_or_else(|| format!("missing value at column {idx}"))?
        .trim();
    value
        .parse::<T>()
        .map_err(|e| format!("invalid value '{value}' at column {idx}: {e}"))
}
