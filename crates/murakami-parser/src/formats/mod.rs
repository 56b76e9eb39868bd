mod common;
mod dash_legacy;
mod ndt_legacy;
mod speedtest;

pub use dash_legacy::DashLegacyImporter;
pub use ndt_legacy::NdtLegacyImporter;
pub use speedtest::SpeedtestImporter;

pub(crate) use common::{import_legacy, LegacyField};
