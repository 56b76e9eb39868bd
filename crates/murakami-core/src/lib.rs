pub mod error;
pub mod exporters;
pub mod pattern;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use exporters::{ExportError, Exporter, ExporterRegistry, OutputFormat};
pub use pattern::{extract_pattern, ExtractionResult, FilenameMetadata};
pub use pipeline::{ConvertOptions, Pipeline, RunSummary};
