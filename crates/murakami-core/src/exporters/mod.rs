mod csv_file;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use murakami_parser::{Record, UnknownNameError};
use once_cell::sync::Lazy;
use thiserror::Error;

pub use csv_file::CsvExporter;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no records to export")]
    NoRecords,

    #[error("row {row} has field '{field}' that is not in the header")]
    UnknownField { field: String, row: usize },

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Persists the complete record set of one run. Called once per run, never per file.
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn export(&self, path: &Path, records: Vec<Record>) -> Result<(), ExportError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 1] = [OutputFormat::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownNameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == value)
            .ok_or_else(|| {
                let names: Vec<&str> = OutputFormat::ALL.iter().map(OutputFormat::as_str).collect();
                UnknownNameError::new("output format", value, &names)
            })
    }
}

/// Read-only table from output format to exporter.
pub struct ExporterRegistry {
    exporters: Vec<(OutputFormat, Box<dyn Exporter>)>,
}

static STANDARD_EXPORTERS: Lazy<ExporterRegistry> =
    Lazy::new(|| ExporterRegistry::empty().with(OutputFormat::Csv, CsvExporter));

impl ExporterRegistry {
    pub fn standard() -> &'static ExporterRegistry {
        &STANDARD_EXPORTERS
    }

    pub fn empty() -> Self {
        Self {
            exporters: Vec::new(),
        }
    }

    pub fn with(mut self, format: OutputFormat, exporter: impl Exporter + 'static) -> Self {
        self.exporters.retain(|(existing, _)| *existing != format);
        self.exporters.push((format, Box::new(exporter)));
        self
    }

    pub fn get(&self, format: OutputFormat) -> Option<&dyn Exporter> {
        self.exporters
            .iter()
            .find(|(existing, _)| *existing == format)
            .map(|(_, exporter)| exporter.as_ref())
    }
}

impl fmt::Debug for ExporterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.exporters.iter().map(|(_, exporter)| exporter.name()))
            .finish()
    }
}
