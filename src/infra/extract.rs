//! Extraction of file-change metadata from the host page's raw entries.

use serde::{Deserialize, Serialize};

use crate::domain::{ChangeKind, FileChangeRecord};

/// Rename marker in a changed-file heading ("old → new").
const RENAME_ARROW: &str = "\u{2192}";

/// One raw changed-file entry as the host page exposes it. Host glue may also
/// hand these over as a JSON batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawChangeEntry {
    /// Classification tags on the entry ("added", "renamed", "deleted", ...).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display text of the entry; may contain the rename arrow.
    pub text: String,
    /// Navigation token identifying the entry's panel, kept verbatim.
    pub anchor: String,
}

/// Builds one record per raw entry, preserving order. Empty input yields an
/// empty list, which the caller treats as "nothing to augment".
pub fn extract_records(entries: &[RawChangeEntry]) -> Vec<FileChangeRecord> {
    entries
        .iter()
        .map(|entry| FileChangeRecord {
            kind: detect_kind(&entry.tags),
            reference: entry.anchor.clone(),
            path: display_path(&entry.text),
        })
        .collect()
}

// Tags are not mutually exclusive in the source data; the first rule to
// match in this order wins.
fn detect_kind(tags: &[String]) -> ChangeKind {
    let has = |wanted: &str| tags.iter().any(|tag| tag == wanted);
    if has("added") {
        ChangeKind::Added
    } else if has("renamed") {
        ChangeKind::Renamed
    } else if has("deleted") {
        ChangeKind::Deleted
    } else {
        ChangeKind::Updated
    }
}

/// For a renamed file the heading shows both sides; only the right-hand (new)
/// path is kept.
fn display_path(text: &str) -> String {
    match text.split_once(RENAME_ARROW) {
        Some((_, new_side)) => new_side.trim().to_string(),
        None => text.trim().to_string(),
    }
}
