use murakami_parser::{ImportError, TestKind};
use thiserror::Error;

use crate::exporters::{ExportError, OutputFormat};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No valid files found in specified paths: {}", .patterns.join(", "))]
    NoInputFiles { patterns: Vec<String> },

    #[error("No valid records found in specified files ({files} files read)")]
    NoRecords { files: usize },

    #[error("Invalid input pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No importer registered for test kind '{0}'")]
    UnregisteredImporter(TestKind),

    #[error("No exporter registered for output format '{0}'")]
    UnregisteredExporter(OutputFormat),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
