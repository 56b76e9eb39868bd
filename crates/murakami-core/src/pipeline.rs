use std::collections::HashSet;
use std::path::{Path, PathBuf};

use murakami_parser::{Importer, ImporterRegistry, Record, TestKind};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{PipelineError, Result};
use crate::exporters::{ExporterRegistry, OutputFormat};
use crate::pattern::FilenameMetadata;

/// Everything one conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub test: TestKind,
    pub format: OutputFormat,
    pub output: PathBuf,
    /// Filename template with `%l`, `%n`, `%c` and `%d` captures.
    pub pattern: Option<String>,
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_resolved: usize,
    pub directories_skipped: usize,
    pub files_without_record: usize,
    pub records_written: usize,
}

/// Resolves inputs, imports each file, and exports the accumulated records once.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    importers: &'a ImporterRegistry,
    exporters: &'a ExporterRegistry,
}

impl Pipeline<'static> {
    pub fn standard() -> Self {
        Self::new(ImporterRegistry::standard(), ExporterRegistry::standard())
    }
}

impl<'a> Pipeline<'a> {
    pub fn new(importers: &'a ImporterRegistry, exporters: &'a ExporterRegistry) -> Self {
        Self {
            importers,
            exporters,
        }
    }

    /// Any import or export error aborts the run. The only tolerated per-file failure is an
    /// importer reporting that the file has no record.
    pub fn run(&self, options: &ConvertOptions) -> Result<RunSummary> {
        let importer = self
            .importers
            .get(options.test)
            .ok_or(PipelineError::UnregisteredImporter(options.test))?;
        let exporter = self
            .exporters
            .get(options.format)
            .ok_or(PipelineError::UnregisteredExporter(options.format))?;

        let paths = resolve_inputs(&options.inputs)?;
        let mut summary = RunSummary {
            files_resolved: paths.len(),
            ..RunSummary::default()
        };
        info!(files = paths.len(), test = %options.test, "resolved input files");

        let records = convert_files(&paths, importer, options.pattern.as_deref(), &mut summary)?;
        if records.is_empty() {
            return Err(PipelineError::NoRecords {
                files: summary.files_resolved - summary.directories_skipped,
            });
        }

        summary.records_written = records.len();
        exporter.export(&options.output, records)?;
        info!(
            output = %options.output.display(),
            format = %options.format,
            records = summary.records_written,
            "export complete"
        );

        Ok(summary)
    }
}

/// Expands every glob pattern and returns the union of matches, deduplicated.
///
/// The order of the result is unspecified. Entries the glob walker cannot read are
/// skipped with a warning.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut unique = HashSet::new();
    for pattern in patterns {
        let entries = glob::glob(pattern).map_err(|source| PipelineError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        for entry in entries {
            match entry {
                Ok(path) => {
                    unique.insert(path);
                }
                Err(err) => warn!(pattern = %pattern, error = %err, "skipping unreadable path"),
            }
        }
    }

    if unique.is_empty() {
        return Err(PipelineError::NoInputFiles {
            patterns: patterns.to_vec(),
        });
    }
    Ok(unique.into_iter().collect())
}

/// Imports each file in order, merging filename metadata when a template is given.
/// Directories are skipped.
pub fn convert_files(
    paths: &[PathBuf],
    importer: &dyn Importer,
    template: Option<&str>,
    summary: &mut RunSummary,
) -> Result<Vec<Record>> {
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        if path.is_dir() {
            debug!(path = %path.display(), "skipping directory");
            summary.directories_skipped += 1;
            continue;
        }

        let Some(mut record) = importer.import(path)? else {
            warn!(
                path = %path.display(),
                importer = importer.name(),
                "file does not match the expected schema; no record produced"
            );
            summary.files_without_record += 1;
            continue;
        };

        if let Some(template) = template {
            let metadata = FilenameMetadata::from_filename(&base_name(path), template);
            if metadata.is_empty() {
                debug!(path = %path.display(), template, "no metadata recovered from filename");
            }
            metadata.merge_into(&mut record);
        }

        records.push(record);
    }

    Ok(records)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
