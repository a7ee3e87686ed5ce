use crate::model::{journey::Journey, zone::DataZone};
use rstar::{primitives::GeomWithData, RTree, AABB};

type IndexedLocation = GeomWithData<[f64; 2], usize>;

/// spatial index over journey locations (longitude, latitude) tagged with each
/// journey's position in the input sequence.
pub struct JourneyIndex {
    rtree: RTree<IndexedLocation>,
}

impl JourneyIndex {
    pub fn new(journeys: &[Journey]) -> JourneyIndex {
        let locations = journeys
            .iter()
            .enumerate()
            .filter(|(_, j)| j.longitude().is_finite() && j.latitude().is_finite())
            .map(|(idx, j)| GeomWithData::new([j.longitude(), j.latitude()], idx))
            .collect::<Vec<_>>();
        JourneyIndex {
            rtree: RTree::bulk_load(locations),
        }
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// finds the position of the first journey, in input order, that lies within the zone.
    pub fn first_contained(&self, zone: &DataZone, journeys: &[Journey]) -> Option<usize> {
        let rect = zone.bounding_rect();
        let envelope =
            AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]);
        self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|location| location.data)
            .filter(|idx| {
                let journey = &journeys[*idx];
                zone.contains(journey.latitude(), journey.longitude())
            })
            .min()
    }
}

/// finds the first journey within the zone by scanning journeys in input order.
pub fn first_contained_scan(zone: &DataZone, journeys: &[Journey]) -> Option<usize> {
    journeys
        .iter()
        .position(|j| zone.contains(j.latitude(), j.longitude()))
}

#[cfg(test)]
mod tests {
    use super::{first_contained_scan, JourneyIndex};
    use crate::model::{journey::Journey, zone::DataZone};

    fn square(min: f64, max: f64, name: &str) -> DataZone {
        let lats = [min, min, max, max, min];
        let lons = [min, max, max, min, min];
        DataZone::from_vertices(&lats, &lons, name).unwrap()
    }

    #[test]
    fn test_first_match_by_input_order() {
        let zone = square(0.0, 1.0, "S01000001.csv");
        let journeys = vec![
            Journey::new(5.0, 5.0, 1.0),
            Journey::new(0.5, 0.5, 10.0),
            Journey::new(0.6, 0.6, 5.0),
        ];
        let index = JourneyIndex::new(&journeys);
        assert_eq!(index.first_contained(&zone, &journeys), Some(1));
        assert_eq!(first_contained_scan(&zone, &journeys), Some(1));
    }

    #[test]
    fn test_index_agrees_with_scan() {
        let zones = vec![
            square(0.0, 1.0, "S01000001.csv"),
            square(0.5, 1.5, "S01000002.csv"),
            square(2.0, 3.0, "S01000003.csv"),
            square(10.0, 11.0, "S01000004.csv"),
        ];
        let journeys = (0..200)
            .map(|i| {
                let lat = ((i * 7) % 31) as f64 * 0.1;
                let lon = ((i * 11) % 29) as f64 * 0.1;
                Journey::new(lat, lon, i as f64)
            })
            .collect::<Vec<_>>();
        let index = JourneyIndex::new(&journeys);
        for zone in zones.iter() {
            assert_eq!(
                index.first_contained(zone, &journeys),
                first_contained_scan(zone, &journeys),
                "zone {}",
                zone.code()
            );
        }
    }

    #[test]
    fn test_boundary_journey_found() {
        let zone = square(0.0, 1.0, "S01000001.csv");
        let journeys = vec![Journey::new(1.0, 0.5, 3.0)];
        let index = JourneyIndex::new(&journeys);
        assert_eq!(index.first_contained(&zone, &journeys), Some(0));
    }

    #[test]
    fn test_non_finite_locations_not_indexed() {
        let journeys = vec![Journey::new(f64::NAN, 0.5, 3.0), Journey::new(0.5, 0.5, 3.0)];
        let index = JourneyIndex::new(&journeys);
        assert_eq!(index.len(), 1);
    }
}
