pub mod journey;
pub mod zone;
mod zonal_error;

pub use zonal_error::ZonalError;
