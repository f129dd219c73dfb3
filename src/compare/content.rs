use crate::compare::entry_set::EntrySet;
use crate::trees::tree::{ENTRY_SEPARATOR, Tree};
use std::path::Path;
use tracing::debug;

/// Entry paths present in both listings whose file contents are byte
/// unequal.
///
/// Only the intersection of the two listings is inspected; paths unique to
/// one side are someone else's finding. Directory markers are skipped, and
/// so is any entry whose concrete type is no longer a regular file on both
/// sides: the filesystem may have changed between listing and comparison,
/// and that race is tolerated rather than reported.
pub fn differing(
    first: &Tree,
    first_entries: &EntrySet,
    second: &Tree,
    second_entries: &EntrySet,
) -> EntrySet {
    let mut changed = EntrySet::new();

    for entry in first_entries.intersection(second_entries) {
        if entry.ends_with(ENTRY_SEPARATOR) {
            continue;
        }

        let first_path = first.join(entry);
        let second_path = second.join(entry);

        let (Ok(first_meta), Ok(second_meta)) = (
            std::fs::metadata(&first_path),
            std::fs::metadata(&second_path),
        ) else {
            debug!("skipping {entry}: vanished since listing");
            continue;
        };

        if !first_meta.is_file() || !second_meta.is_file() {
            debug!("skipping {entry}: no longer a regular file");
            continue;
        }

        if first_meta.len() != second_meta.len() || !contents_match(&first_path, &second_path) {
            changed.insert(entry.clone());
        }
    }

    changed
}

// A failed read counts as a non-zero comparison, the same as unequal bytes.
fn contents_match(first: &Path, second: &Path) -> bool {
    match (std::fs::read(first), std::fs::read(second)) {
        (Ok(first_content), Ok(second_content)) => first_content == second_content,
        _ => false,
    }
}
