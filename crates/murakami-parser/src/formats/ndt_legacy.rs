use std::path::Path;

use tracing::debug;

use crate::errors::ImportError;
use crate::jsonl::read_first_value;
use crate::model::Record;
use crate::registry::Importer;

use super::{import_legacy, LegacyField};

/// Legacy (OONI-style) NDT results: RTT statistics, loss, limiting factors, throughput.
#[derive(Debug, Default, Clone, Copy)]
pub struct NdtLegacyImporter;

impl NdtLegacyImporter {
    const NAME: &'static str = "ndt_legacy";
    const DISCRIMINATOR: &'static str = "test_keys";
    const FIELDS: &'static [LegacyField] = &[
        LegacyField::new("probe_asn", &["probe_asn"]),
        LegacyField::new("probe_cc", &["probe_cc"]),
        LegacyField::new("software_name", &["software_name"]),
        LegacyField::new("server_address", &["test_keys", "server_address"]),
        LegacyField::new("avg_rtt", &["test_keys", "advanced", "avg_rtt"]),
        LegacyField::new("congestion_limited", &["test_keys", "advanced", "congestion_limited"]),
        LegacyField::new("max_rtt", &["test_keys", "advanced", "max_rtt"]),
        LegacyField::new("min_rtt", &["test_keys", "advanced", "min_rtt"]),
        LegacyField::new("packet_loss", &["test_keys", "advanced", "packet_loss"]),
        LegacyField::new("receiver_limited", &["test_keys", "advanced", "receiver_limited"]),
        LegacyField::new("sender_limited", &["test_keys", "advanced", "sender_limited"]),
        LegacyField::new("download", &["test_keys", "simple", "download"]),
        LegacyField::new("ping", &["test_keys", "simple", "ping"]),
        LegacyField::new("upload", &["test_keys", "simple", "upload"]),
        LegacyField::new("test_runtime", &["test_runtime"]),
        LegacyField::new("test_start_time", &["test_start_time"]),
    ];

    pub fn columns() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|field| field.column)
    }
}

impl Importer for NdtLegacyImporter {
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
