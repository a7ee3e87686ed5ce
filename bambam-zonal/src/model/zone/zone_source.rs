use super::{DataZone, ZoneCode};
use crate::model::ZonalError;
use geo::{Coord, Geometry, LineString, Polygon};
use itertools::Itertools;
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use wkt::TryFromWkt;

/// source of data zone boundaries
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ZoneSource {
    /// a directory where each `.csv` file holds the vertices of one zone as
    /// `latitude,longitude` rows below a header row. the zone code comes from the file name.
    CsvDirectory { directory: String },
    /// a single CSV file with a WKT polygon column and a zone id column
    WktCsv {
        file: String,
        geometry_column: String,
        id_column: String,
    },
}

impl ZoneSource {
    /// validates the provided zone arguments and creates the matching [`ZoneSource`].
    pub fn new(
        directory: Option<&String>,
        wkt_file: Option<&String>,
        geometry_column: &str,
        id_column: &str,
    ) -> Result<ZoneSource, ZonalError> {
        match (directory, wkt_file) {
            (Some(directory), None) => Ok(ZoneSource::CsvDirectory {
                directory: directory.clone(),
            }),
            (None, Some(file)) => Ok(ZoneSource::WktCsv {
                file: file.clone(),
                geometry_column: geometry_column.to_string(),
                id_column: id_column.to_string(),
            }),
            _ => Err(ZonalError::ConfigurationError(String::from(
                "specify exactly one of a zones directory or a zones WKT file",
            ))),
        }
    }

    /// reads all zones from this source. zones that fail to load are logged and skipped.
    pub fn build(&self) -> Result<Vec<DataZone>, ZonalError> {
        let zones = match self {
            ZoneSource::CsvDirectory { directory } => read_zone_directory(Path::new(directory))?,
            ZoneSource::WktCsv {
                file,
                geometry_column,
                id_column,
            } => read_zone_wkt_csv(Path::new(file), geometry_column, id_column)?,
        };
        log::info!("loaded {} data zones", zones.len());
        Ok(zones)
    }
}

/// reads every `.csv` file in a directory as a zone, in file name order.
fn read_zone_directory(directory: &Path) -> Result<Vec<DataZone>, ZonalError> {
    let entries = std::fs::read_dir(directory).map_err(|e| {
        ZonalError::ZoneSourceError(format!(
            "failure listing directory {}: {e}",
            directory.display()
        ))
    })?;
    let paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "csv"))
        .sorted()
        .collect_vec();

    let mut zones = vec![];
    for path in tqdm!(paths.iter(), desc = "reading zone files") {
        match read_zone_file(path) {
            Ok(Some(zone)) => zones.push(zone),
            Ok(None) => log::debug!("zone file {} has no vertices, skipping", path.display()),
            Err(e) => log::warn!("skipping zone file {}: {e}", path.display()),
        }
    }
    eprintln!();
    Ok(zones)
}

/// reads one zone vertex file. returns None if the file contains no vertices.
fn read_zone_file(path: &Path) -> Result<Option<DataZone>, ZonalError> {
    let filepath = path.display().to_string();
    let source_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ZonalError::ZoneSourceError(format!("invalid file name {filepath}")))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| ZonalError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?;

    let mut coords = vec![];
    for (row_idx, record) in reader.records().enumerate() {
        let row = record.map_err(|source| ZonalError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?;
        match parse_vertex(row.get(0), row.get(1)) {
            Ok(coord) => coords.push(coord),
            Err(e) => log::warn!("skipping row {row_idx} of {filepath}: {e}"),
        }
    }
    if coords.is_empty() {
        return Ok(None);
    }
    let polygon = Polygon::new(LineString::new(coords), vec![]);
    let zone = DataZone::new(ZoneCode::from_source_name(source_name), polygon)?;
    Ok(Some(zone))
}

fn parse_vertex(lat: Option<&str>, lon: Option<&str>) -> Result<Coord<f64>, String> {
    let (lat_str, lon_str) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat.trim(), lon.trim()),
        _ => return Err(String::from("row must have latitude and longitude columns")),
    };
    let y = lat_str
        .parse::<f64>()
        .map_err(|e| format!("invalid latitude '{lat_str}': {e}"))?;
    let x = lon_str
        .parse::<f64>()
        .map_err(|e| format!("invalid longitude '{lon_str}': {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("non-finite vertex '{lat_str},{lon_str}'"));
    }
    Ok(Coord { x, y })
}

/// reads zones from a CSV with WKT geometries. a MULTIPOLYGON becomes one zone per polygon,
/// each sharing the row's zone code.
fn read_zone_wkt_csv(
    path: &Path,
    geometry_column: &str,
    id_column: &str,
) -> Result<Vec<DataZone>, ZonalError> {
    let filepath = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|source| ZonalError::CsvReadError {
        filepath: filepath.clone(),
        source,
    })?;
    let header_record = reader
        .headers()
        .map_err(|source| ZonalError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?
        .clone();
    let headers = header_record
        .iter()
        .enumerate()
        .map(|(i, s)| (s, i))
        .collect::<HashMap<_, _>>();
    let geom_idx = *headers.get(geometry_column).ok_or_else(|| {
        ZonalError::ZoneSourceError(format!("{filepath} missing {geometry_column} column"))
    })?;
    let id_idx = *headers.get(id_column).ok_or_else(|| {
        ZonalError::ZoneSourceError(format!("{filepath} missing {id_column} column"))
    })?;

    let mut zones = vec![];
    for (row_idx, record) in tqdm!(reader.records().enumerate(), desc = "reading zone geometries") {
        let row = record.map_err(|source| ZonalError::CsvReadError {
            filepath: filepath.clone(),
            source,
        })?;
        let polygons = row
            .get(geom_idx)
            .ok_or_else(|| format!("row {row_idx} missing geometry index"))
            .and_then(|g| {
                Geometry::<f64>::try_from_wkt_str(g).map_err(|e| {
                    format!("failure reading WKT geometry at row {row_idx}: {e}")
                })
            })
            .and_then(|g| match g {
                Geometry::Polygon(p) => Ok(vec![p]),
                Geometry::MultiPolygon(mp) => Ok(mp.0),
                _ => Err(format!(
                    "unexpected non-polygonal geometry type for row {row_idx}"
                )),
            });
        let id = row.get(id_idx).unwrap_or_default();
        match polygons {
            Err(e) => log::warn!("skipping zone '{id}': {e}"),
            Ok(polygons) => {
                for polygon in polygons {
                    match DataZone::new(ZoneCode::from_source_name(id), polygon) {
                        Ok(zone) => zones.push(zone),
                        Err(e) => log::warn!("skipping zone '{id}': {e}"),
                    }
                }
            }
        }
    }
    eprintln!();
    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::ZoneSource;
    use std::path::PathBuf;

    fn test_directory(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("bambam_zonal_tests")
            .join(test_name);
        if dir.exists() {
            std::fs::remove_dir_all(&dir).unwrap();
        }
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_read_zone_directory() {
        let dir = test_directory("test_read_zone_directory");
        let square = "latitude,longitude\n0.0,0.0\n0.0,1.0\n1.0,1.0\n1.0,0.0\n0.0,0.0\n";
        std::fs::write(dir.join("S01000002.csv"), square).unwrap();
        std::fs::write(dir.join("S01000001-part-1.csv"), square).unwrap();
        std::fs::write(dir.join("S01000003.csv"), "latitude,longitude\n").unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let source = ZoneSource::CsvDirectory {
            directory: dir.to_string_lossy().to_string(),
        };
        let zones = source.build().unwrap();
        let codes = zones.iter().map(|z| z.code().as_str()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["S01000001", "S01000002"]);
        assert!(zones[0].contains(0.5, 0.5));
    }

    #[test]
    fn test_malformed_vertex_row_skipped() {
        let dir = test_directory("test_malformed_vertex_row_skipped");
        let contents = "latitude,longitude\n0.0,0.0\n0.0,oops\n0.0,1.0\n1.0,1.0\n0.0,0.0\n";
        std::fs::write(dir.join("S01000001.csv"), contents).unwrap();
        let source = ZoneSource::CsvDirectory {
            directory: dir.to_string_lossy().to_string(),
        };
        let zones = source.build().unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].polygon().exterior().0.len(), 4);
    }

    #[test]
    fn test_non_finite_vertex_row_skipped() {
        let dir = test_directory("test_non_finite_vertex_row_skipped");
        let contents = "latitude,longitude\n0.0,0.0\nNaN,0.0\n0.0,1.0\n1.0,inf\n1.0,1.0\n0.0,0.0\n";
        std::fs::write(dir.join("S01000001.csv"), contents).unwrap();
        let source = ZoneSource::CsvDirectory {
            directory: dir.to_string_lossy().to_string(),
        };
        let zones = source.build().unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].polygon().exterior().0.len(), 4);
        let bbox = zones[0].bounding_rect();
        assert_eq!((bbox.min().y, bbox.max().y), (0.0, 1.0));
        assert!(zones[0].contains(0.2, 0.8));
    }

    #[test]
    fn test_non_finite_wkt_polygon_skipped() {
        let dir = test_directory("test_non_finite_wkt_polygon_skipped");
        let path = dir.join("zones.csv");
        let contents = concat!(
            "id,geometry\n",
            "S01000001,\"POLYGON((0 0,1 0,1 NaN,0 1,0 0))\"\n",
            "S01000002,\"POLYGON((2 2,3 2,3 3,2 3,2 2))\"\n",
        );
        std::fs::write(&path, contents).unwrap();
        let source = ZoneSource::WktCsv {
            file: path.to_string_lossy().to_string(),
            geometry_column: String::from("geometry"),
            id_column: String::from("id"),
        };
        let zones = source.build().unwrap();
        let codes = zones.iter().map(|z| z.code().as_str()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["S01000002"]);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let source = ZoneSource::CsvDirectory {
            directory: String::from("/this/directory/does/not/exist"),
        };
        assert!(source.build().is_err());
    }

    #[test]
    fn test_read_zone_wkt_csv() {
        let dir = test_directory("test_read_zone_wkt_csv");
        let path = dir.join("zones.csv");
        let contents = concat!(
            "id,geometry\n",
            "S01000001,\"POLYGON((0 0,1 0,1 1,0 1,0 0))\"\n",
            "S01000002,\"MULTIPOLYGON(((2 2,3 2,3 3,2 3,2 2)),((5 5,6 5,6 6,5 6,5 5)))\"\n",
            "S01000003,\"POINT(1 1)\"\n",
        );
        std::fs::write(&path, contents).unwrap();
        let source = ZoneSource::WktCsv {
            file: path.to_string_lossy().to_string(),
            geometry_column: String::from("geometry"),
            id_column: String::from("id"),
        };
        let zones = source.build().unwrap();
        let codes = zones.iter().map(|z| z.code().as_str()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["S01000001", "S01000002", "S01000002"]);
        // WKT is x (longitude) first
        assert!(zones[2].contains(5.5, 5.5));
    }

    #[test]
    fn test_new_requires_exactly_one_source() {
        let d = String::from("zones");
        let f = String::from("zones.csv");
        assert!(ZoneSource::new(Some(&d), None, "geometry", "id").is_ok());
        assert!(ZoneSource::new(None, Some(&f), "geometry", "id").is_ok());
        assert!(ZoneSource::new(Some(&d), Some(&f), "geometry", "id").is_err());
        assert!(ZoneSource::new(None, None, "geometry", "id").is_err());
    }
}
