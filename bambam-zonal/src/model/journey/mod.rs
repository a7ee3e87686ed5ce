mod journey;
mod journey_key;
pub mod journey_source;

pub use journey::Journey;
pub use journey_key::JourneyKey;
