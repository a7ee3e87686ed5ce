use serde::{Deserialize, Serialize};
use std::{fmt::Display, path::Path};

/// number of leading characters of a source name that make up a data zone code.
pub const ZONE_CODE_LENGTH: usize = 9;

/// the short identifier of a data zone, such as `S01006506`. this is the join key
/// between zone geometries and the zone metrics table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneCode(String);

impl ZoneCode {
    pub fn new(code: &str) -> ZoneCode {
        ZoneCode(code.to_string())
    }

    /// derives the zone code from the name of the file (or record id) a zone was read from.
    /// the extension is removed and the first [`ZONE_CODE_LENGTH`] characters are kept, which
    /// also collapses multi-part zones such as `S01006506-part-2.csv` onto `S01006506`.
    pub fn from_source_name(source_name: &str) -> ZoneCode {
        let stem = Path::new(source_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(source_name);
        ZoneCode(stem.chars().take(ZONE_CODE_LENGTH).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ZoneCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
