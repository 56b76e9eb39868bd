use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} line {line}: invalid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{importer}: first record in {} is not a JSON object", .path.display())]
    NotAnObject {
        importer: &'static str,
        path: PathBuf,
    },
}

/// Returned when a registry name (test kind, output format) is not recognized.
#[derive(Debug, Clone, Error)]
#[error("unknown {kind} '{name}'; expected one of: {}", .expected.join(", "))]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
    pub expected: Vec<&'static str>,
}

impl UnknownNameError {
    pub fn new(kind: &'static str, name: impl Into<String>, expected: &[&'static str]) -> Self {
        Self {
            kind,
            name: name.into(),
            expected: expected.to_vec(),
        }
    }
}
