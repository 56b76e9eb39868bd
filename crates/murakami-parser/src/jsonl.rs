use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::errors::ImportError;

/// Decodes the first non-blank line of a line-delimited JSON file.
///
/// `Ok(None)` means the file holds no records. Read and decode failures are errors.
pub fn read_first_value(path: &Path) -> Result<Option<Value>, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let value = serde_json::from_str(&line).map_err(|source| ImportError::Json {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        return Ok(Some(value));
    }

    Ok(None)
}
