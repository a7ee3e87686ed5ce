use super::{ZoneCode, ZoneMetrics};
use crate::model::ZonalError;
use geo::{BoundingRect, Coord, Intersects, LineString, Polygon, Rect};

/// a data zone boundary along with its identity and joined metrics.
///
/// coordinates are stored with x = longitude, y = latitude. the bounding rectangle
/// of the polygon is computed once at construction and used to reject points before
/// running the ring test.
#[derive(Clone, Debug)]
pub struct DataZone {
    code: ZoneCode,
    polygon: Polygon<f64>,
    bbox: Rect<f64>,
    metrics: ZoneMetrics,
}

impl DataZone {
    /// creates a zone from a polygon. the exterior ring must be closed.
    ///
    /// # Arguments
    ///
    /// * `code`    - zone identifier
    /// * `polygon` - zone boundary in (longitude, latitude) coordinates
    ///
    /// # Returns
    ///
    /// * the zone with default metrics, or an error if the polygon is empty or has
    ///   non-finite coordinates
    pub fn new(code: ZoneCode, polygon: Polygon<f64>) -> Result<DataZone, ZonalError> {
        if polygon
            .exterior()
            .coords()
            .chain(polygon.interiors().iter().flat_map(|r| r.coords()))
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(ZonalError::InvalidGeometry(
                code.to_string(),
                String::from("polygon has non-finite coordinates"),
            ));
        }
        let bbox = polygon.bounding_rect().ok_or_else(|| {
            ZonalError::InvalidGeometry(code.to_string(), String::from("polygon is empty"))
        })?;
        Ok(DataZone {
            code,
            polygon,
            bbox,
            metrics: ZoneMetrics::default(),
        })
    }

    /// creates a zone from parallel latitude and longitude vertex arrays, where the first and
    /// last vertices are equal, tagged with the zone code derived from `source_name`.
    pub fn from_vertices(
        latitudes: &[f64],
        longitudes: &[f64],
        source_name: &str,
    ) -> Result<DataZone, ZonalError> {
        let code = ZoneCode::from_source_name(source_name);
        if latitudes.len() != longitudes.len() {
            return Err(ZonalError::InvalidGeometry(
                code.to_string(),
                format!(
                    "found {} latitudes but {} longitudes",
                    latitudes.len(),
                    longitudes.len()
                ),
            ));
        }
        let coords = latitudes
            .iter()
            .zip(longitudes.iter())
            .map(|(lat, lon)| Coord { x: *lon, y: *lat })
            .collect::<Vec<_>>();
        let polygon = Polygon::new(LineString::new(coords), vec![]);
        DataZone::new(code, polygon)
    }

    pub fn code(&self) -> &ZoneCode {
        &self.code
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn bounding_rect(&self) -> &Rect<f64> {
        &self.bbox
    }

    pub fn metrics(&self) -> &ZoneMetrics {
        &self.metrics
    }

    /// assigns the metrics joined from the zone metrics table.
    pub fn set_metrics(&mut self, metrics: ZoneMetrics) {
        self.metrics = metrics;
    }

    /// tests whether a point lies within this zone. points on the boundary ring count as contained.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let min = self.bbox.min();
        let max = self.bbox.max();
        if longitude < min.x || longitude > max.x || latitude < min.y || latitude > max.y {
            return false;
        }
        self.polygon.intersects(&Coord {
            x: longitude,
            y: latitude,
        })
    }
}
