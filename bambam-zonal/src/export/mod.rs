mod export_ops;

pub use export_ops::{create_run_directory, export_analysis, run_directory, write_table};
