use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::errors::ImportError;
use crate::flatten::flatten_object;
use crate::jsonl::read_first_value;
use crate::model::Record;
use crate::registry::Importer;

/// Speedtest CLI results: the whole first record, flattened.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeedtestImporter;

impl SpeedtestImporter {
    const NAME: &'static str = "speedtest";
    pub const DELIMITER: &'static str = "_";
}

impl Importer for SpeedtestImporter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn import(&self, path: &Path) -> Result<Option<Record>, ImportError> {
        match read_first_value(path)? {
            None => {
                debug!(path = %path.display(), "no records in file");
                Ok(None)
            }
            Some(Value::Object(object)) => Ok(Some(flatten_object(&object, Self::DELIMITER))),
            Some(_) => Err(ImportError::NotAnObject {
                importer: Self::NAME,
                path: path.to_path_buf(),
            }),
        }
    }
}
