use difference::{Changeset, Difference};
use indexmap::IndexMap;
use murakami_parser::Record;

/// Marks a named capture in a filename template, as in `%l-%n-%d.jsonl`.
pub const PLACEHOLDER_MARKER: char = '%';

/// Template label to the slice of the filename aligned against it.
pub type ExtractionResult = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Common,
    ActualOnly,
    TemplateOnly,
}

/// Recovers labelled fields from `filename` by diffing it character by character against
/// `template`.
///
/// Template-only characters (other than the marker) build a label, filename-only characters
/// build a value, and a shared character closes the pair once both are non-empty. Alignment
/// comes entirely from the diff, so literal runs that repeat characters of the captured
/// values can split or merge captures. When several alignments are equally long, the
/// diff's tie-breaking picks one, so ambiguous filenames can yield different captures than
/// other diff implementations would.
pub fn extract_pattern(filename: &str, template: &str) -> ExtractionResult {
    if !template.contains(PLACEHOLDER_MARKER) {
        return ExtractionResult::new();
    }

    let changeset = Changeset::new(filename, template, "");
    let mut extractor = Extractor::default();
    for diff in &changeset.diffs {
        let (side, text) = match diff {
            Difference::Same(text) => (Side::Common, text),
            Difference::Rem(text) => (Side::ActualOnly, text),
            Difference::Add(text) => (Side::TemplateOnly, text),
        };
        for ch in text.chars() {
            extractor.feed(side, ch);
        }
    }
    extractor.finish()
}

#[derive(Debug, Default)]
struct Extractor {
    label: String,
    value: String,
    result: ExtractionResult,
}

impl Extractor {
    fn feed(&mut self, side: Side, ch: char) {
        match side {
            Side::TemplateOnly if ch == PLACEHOLDER_MARKER => {}
            Side::TemplateOnly => self.label.push(ch),
            Side::ActualOnly => self.value.push(ch),
            Side::Common => self.emit(),
        }
    }

    fn emit(&mut self) {
        if self.label.is_empty() || self.value.is_empty() {
            return;
        }
        self.result
            .insert(std::mem::take(&mut self.label), std::mem::take(&mut self.value));
    }

    fn finish(mut self) -> ExtractionResult {
        self.emit();
        self.result
    }
}

/// The filename fields the converter recognizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameMetadata {
    pub location: Option<String>,
    pub network_type: Option<String>,
    pub connection_type: Option<String>,
    pub datestamp: Option<String>,
}

impl FilenameMetadata {
    pub const LABELS: [(&'static str, &'static str); 4] = [
        ("l", "location"),
        ("n", "network_type"),
        ("c", "connection_type"),
        ("d", "datestamp"),
    ];

    pub fn from_filename(filename: &str, template: &str) -> Self {
        Self::from_extraction(&extract_pattern(filename, template))
    }

    /// Keeps the `l`, `n`, `c` and `d` captures and ignores any other label.
    pub fn from_extraction(extraction: &ExtractionResult) -> Self {
        let take = |label: &str| extraction.get(label).cloned();
        Self {
            location: take("l"),
            network_type: take("n"),
            connection_type: take("c"),
            datestamp: take("d"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Present fields as (column, value), in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (Self::LABELS[0].1, &self.location),
            (Self::LABELS[1].1, &self.network_type),
            (Self::LABELS[2].1, &self.connection_type),
            (Self::LABELS[3].1, &self.datestamp),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|value| (column, value)))
    }

    pub fn merge_into(&self, record: &mut Record) {
        for (column, value) in self.fields() {
            record.insert(column, value);
        }
    }
}
