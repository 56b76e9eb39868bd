use std::collections::HashSet;
use std::path::Path;

use csv::Writer;
use murakami_parser::{Record, Scalar};
use tracing::debug;

use super::{ExportError, Exporter};

/// Comma-delimited table with a header row.
///
/// Records are ordered widest first (stable), and the widest record's keys become the
/// header. Narrower records leave the missing cells empty; a record carrying a field outside
/// the header is an error and nothing is written.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl CsvExporter {
    const NAME: &'static str = "csv";
}

impl Exporter for CsvExporter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn export(&self, path: &Path, mut records: Vec<Record>) -> Result<(), ExportError> {
        records.sort_by(|a, b| b.len().cmp(&a.len()));
        let header: Vec<String> = records
            .first()
            .ok_or(ExportError::NoRecords)?
            .keys()
            .cloned()
            .collect();

        let columns: HashSet<&str> = header.iter().map(String::as_str).collect();
        for (index, record) in records.iter().enumerate() {
            if let Some(field) = record.keys().find(|key| !columns.contains(key.as_str())) {
                return Err(ExportError::UnknownField {
                    field: field.clone(),
                    row: index + 1,
                });
            }
        }

        let mut writer = Writer::from_path(path)?;
        writer.write_record(&header)?;
        for record in &records {
            writer.write_record(
                header
                    .iter()
                    .map(|column| record.get(column).map(Scalar::to_cell).unwrap_or_default()),
            )?;
        }
        writer.flush().map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            columns = header.len(),
            rows = records.len(),
            "csv written"
        );
        Ok(())
    }
}
