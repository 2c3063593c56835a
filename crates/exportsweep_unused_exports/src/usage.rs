use exportsweep_core::SourceCache;
use log::trace;
use std::path::PathBuf;

use crate::types::ExportRecord;

/// Whether `record.name` occurs anywhere in a corpus file other than the
/// one defining it.
///
/// This is a plain substring test: `Item` counts as used when another file
/// mentions `ItemList`, and references inside the defining file are ignored.
pub(crate) fn is_used(record: &ExportRecord, corpus: &[PathBuf], cache: &SourceCache) -> bool {
    let found = corpus
        .iter()
        .filter(|other| **other != record.file)
        .find(|other| cache.text(other).contains(record.name.as_str()));

    match found {
        Some(other) => {
            trace!(
                "'{}' from {} is mentioned in {}",
                record.name,
                record.file.display(),
                other.display()
            );
            true
        }
        None => false,
    }
}
