mod zonal_app;

pub use zonal_app::{run, ZonalRunArguments};
