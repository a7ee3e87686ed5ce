use super::Journey;
use ordered_float::OrderedFloat;

/// hashable identity of a [`Journey`]. two journeys with the same location and
/// duration are the same journey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JourneyKey {
    latitude: OrderedFloat<f64>,
    longitude: OrderedFloat<f64>,
    duration_minutes: OrderedFloat<f64>,
}

impl From<&Journey> for JourneyKey {
    fn from(journey: &Journey) -> Self {
        JourneyKey {
            latitude: OrderedFloat(journey.latitude()),
            longitude: OrderedFloat(journey.longitude()),
            duration_minutes: OrderedFloat(journey.duration_minutes()),
        }
    }
}
