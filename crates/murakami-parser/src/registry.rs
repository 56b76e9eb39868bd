use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::errors::{ImportError, UnknownNameError};
use crate::formats::{DashLegacyImporter, NdtLegacyImporter, SpeedtestImporter};
use crate::model::Record;

/// Turns one line-delimited JSON file into at most one flat record.
///
/// `Ok(None)` means the file does not carry the shape this importer understands; callers
/// drop it. Read and decode failures are returned as errors.
pub trait Importer: Send + Sync {
    fn name(&self) -> &'static str;
    fn import(&self, path: &Path) -> Result<Option<Record>, ImportError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TestKind {
    #[default]
    Speedtest,
    DashLegacy,
    NdtLegacy,
}

impl TestKind {
    pub const ALL: [TestKind; 3] = [TestKind::Speedtest, TestKind::DashLegacy, TestKind::NdtLegacy];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestKind::Speedtest => "speedtest",
            TestKind::DashLegacy => "dash_legacy",
            TestKind::NdtLegacy => "ndt_legacy",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestKind {
    type Err = UnknownNameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TestKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| {
                let names: Vec<&str> = TestKind::ALL.iter().map(TestKind::as_str).collect();
                UnknownNameError::new("test kind", value, &names)
            })
    }
}

/// Read-only table from test kind to importer.
pub struct ImporterRegistry {
    importers: Vec<(TestKind, Box<dyn Importer>)>,
}

static STANDARD_IMPORTERS: Lazy<ImporterRegistry> = Lazy::new(|| {
    ImporterRegistry::empty()
        .with(TestKind::Speedtest, SpeedtestImporter)
        .with(TestKind::DashLegacy, DashLegacyImporter)
        .with(TestKind::NdtLegacy, NdtLegacyImporter)
});

impl ImporterRegistry {
    /// Every built-in importer, one per [`TestKind`].
    pub fn standard() -> &'static ImporterRegistry {
        &STANDARD_IMPORTERS
    }

    pub fn empty() -> Self {
        Self {
            importers: Vec::new(),
        }
    }

    pub fn with(mut self, kind: TestKind, importer: impl Importer + 'static) -> Self {
        self.importers.retain(|(existing, _)| *existing != kind);
        self.importers.push((kind, Box::new(importer)));
        self
    }

    pub fn get(&self, kind: TestKind) -> Option<&dyn Importer> {
        self.importers
            .iter()
            .find(|(existing, _)| *existing == kind)
            .map(|(_, importer)| importer.as_ref())
    }

    pub fn kinds(&self) -> impl Iterator<Item = TestKind> + '_ {
        self.importers.iter().map(|(kind, _)| *kind)
    }
}

impl fmt::Debug for ImporterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.importers.iter().map(|(_, importer)| importer.name()))
            .finish()
    }
}
