pub mod errors;
pub mod flatten;
pub mod formats;
pub mod jsonl;
pub mod lookup;
pub mod model;
mod registry;

pub use errors::{ImportError, UnknownNameError};
pub use flatten::flatten_object;
pub use lookup::{lookup_scalar, nested_get};
pub use model::{Record, Scalar};
pub use registry::{Importer, ImporterRegistry, TestKind};

#[cfg(test)]
mod tests;
