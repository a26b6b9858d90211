use serde::{Deserialize, Serialize};

/// How a file changed in the diff under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    /// Fallback when the host entry carries no other classification.
    #[default]
    Updated,
    Renamed,
    Deleted,
}

impl ChangeKind {
    /// Style class applied to a file entry in the rendered tree. The four
    /// classes are mutually exclusive.
    pub fn style_class(&self) -> &'static str {
        match self {
            ChangeKind::Added => "file-added",
            ChangeKind::Updated => "file-updated",
            ChangeKind::Renamed => "file-renamed",
            ChangeKind::Deleted => "file-deleted",
        }
    }
}

/// One changed file in the host page's diff view.
///
/// Built once at startup from the host's raw entries and immutable afterward;
/// the whole list is discarded together with its instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChangeRecord {
    pub kind: ChangeKind,
    /// Unique, stable identifier for the file's panel. On the host page this
    /// is a navigation fragment anchor.
    pub reference: String,
    /// Current (post-rename) display path, forward-slash separated, no
    /// leading slash.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_is_updated() {
        assert_eq!(ChangeKind::default(), ChangeKind::Updated);
    }

    #[test]
    fn style_classes_are_distinct() {
        let classes = [
            ChangeKind::Added.style_class(),
            ChangeKind::Updated.style_class(),
            ChangeKind::Renamed.style_class(),
            ChangeKind::Deleted.style_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
