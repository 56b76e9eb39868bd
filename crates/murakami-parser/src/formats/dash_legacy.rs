use std::path::Path;

use tracing::debug;

use crate::errors::ImportError;
use crate::jsonl::read_first_value;
use crate::model::Record;
use crate::registry::Importer;

use super::{import_legacy, LegacyField};

/// Legacy (OONI-style) DASH streaming results.
#[derive(Debug, Default, Clone, Copy)]
pub struct DashLegacyImporter;

impl DashLegacyImporter {
    const NAME: &'static str = "dash_legacy";
    const DISCRIMINATOR: &'static str = "test_name";
    const FIELDS: &'static [LegacyField] = &[
        LegacyField::new("probe_asn", &["probe_asn"]),
        LegacyField::new("probe_cc", &["probe_cc"]),
        LegacyField::new("connect_latency", &["test_keys", "simple", "connect_latency"]),
        LegacyField::new("median_bitrate", &["test_keys", "simple", "median_bitrate"]),
        LegacyField::new("min_playout_delay", &["test_keys", "simple", "min_playout_delay"]),
        LegacyField::new("test_name", &["test_name"]),
        LegacyField::new("test_runtime", &["test_runtime"]),
        LegacyField::new("test_start_time", &["test_start_time"]),
    ];

    pub fn columns() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|field| field.column)
    }
}

impl Importer for DashLegacyImporter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn import(&self, path: &Path) -> Result<Option<Record>, ImportError> {
        let Some(data) = read_first_value(path)? else {
            debug!(path = %path.display(), "no records in file");
            return Ok(Some(Record::new()));
        };
        Ok(import_legacy(Self::NAME, &data, Self::DISCRIMINATOR, Self::FIELDS))
    }
}
