use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZonalError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid analysis parameter: {0}")]
    InvalidParameter(String),
    #[error("invalid geometry for zone '{0}': {1}")]
    InvalidGeometry(String, String),
    #[error("failure reading zone source: {0}")]
    ZoneSourceError(String),
    #[error("failure reading {filepath}: {source}")]
    CsvReadError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure writing {filepath}: {source}")]
    CsvWriteError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
