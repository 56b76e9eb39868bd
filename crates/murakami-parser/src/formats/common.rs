use serde_json::Value;
use tracing::debug;

use crate::lookup::lookup_scalar;
use crate::model::Record;

/// One output column of a legacy importer and where to find it in the source object.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LegacyField {
    pub column: &'static str,
    pub path: &'static [&'static str],
}

impl LegacyField {
    pub(crate) const fn new(column: &'static str, path: &'static [&'static str]) -> Self {
        Self { column, path }
    }
}

/// Builds the fixed column set for a legacy-format result, or `None` when the
/// discriminator key is not present at the top level. Missing fields become nulls.
pub(crate) fn import_legacy(
    importer: &'static str,
    data: &Value,
    discriminator: &str,
    fields: &[LegacyField],
) -> Option<Record> {
    let has_discriminator = data
        .as_object()
        .is_some_and(|object| object.contains_key(discriminator));
    if !has_discriminator {
        debug!(importer, discriminator, "discriminator field absent");
        return None;
    }

    Some(
        fields
            .iter()
            .map(|field| (field.column, lookup_scalar(data, field.path)))
            .collect(),
    )
}
