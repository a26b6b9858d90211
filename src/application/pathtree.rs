//! Folds a flat list of changed-file paths into a folder hierarchy.
//!
//! Three steps, all pure: compute the longest directory path shared by every
//! file, strip it, then fold the remainders into a tree of directories and
//! leaves. Child order everywhere is first-seen insertion order; nothing is
//! ever sorted alphabetically.

use indexmap::IndexMap;

use crate::domain::PathTreeError;

/// A directory in the folded tree. Children are keyed by segment name and
/// iterate in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub name: String,
    pub children: IndexMap<String, TreeNode>,
}

impl DirectoryNode {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: IndexMap::new(),
        }
    }
}

/// A file in the folded tree. `record_index` points back into the ordered
/// record list the paths came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub name: String,
    pub record_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(DirectoryNode),
    Leaf(LeafNode),
}

/// Longest directory path shared by every input path, without a trailing
/// slash. Empty string when the inputs share no leading directory.
///
/// A single path contributes its directory component (everything before the
/// last `/`), so `["a/b/c"]` yields `"a/b"`.
pub fn longest_common_directory(paths: &[&str]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };
    if rest.is_empty() {
        return first
            .rsplit_once('/')
            .map(|(dir, _)| dir.to_string())
            .unwrap_or_default();
    }

    let mut candidate: Vec<&str> = first.split('/').collect();
    for path in rest {
        let segments: Vec<&str> = path.split('/').collect();
        let mut shared = 0;
        while shared < candidate.len()
            && segments.get(shared) == Some(&candidate[shared])
        {
            shared += 1;
        }
        candidate.truncate(shared);
        if candidate.is_empty() {
            return String::new();
        }
    }
    candidate.join("/")
}

/// Removes `prefix + "/"` from the front of every path, returning owned
/// copies. An empty prefix copies the paths unchanged.
///
/// A path that does not start with the prefix is a precondition violation:
/// the prefix is always derived from the same path set, so a mismatch means
/// a programming error, not recoverable input.
pub fn strip_prefix(paths: &[&str], prefix: &str) -> Result<Vec<String>, PathTreeError> {
    if prefix.is_empty() {
        return Ok(paths.iter().map(|p| (*p).to_string()).collect());
    }
    let full = format!("{prefix}/");
    paths
        .iter()
        .map(|path| {
            path.strip_prefix(&full)
                .map(str::to_string)
                .ok_or_else(|| PathTreeError::PrefixMismatch {
                    path: (*path).to_string(),
                    prefix: prefix.to_string(),
                })
        })
        .collect()
}

/// Folds prefix-stripped paths into one root directory.
///
/// For each path, in list order, directory nodes are walked or created per
/// segment and the final segment becomes a leaf carrying the path's index.
/// The first entry to claim a name at a level wins; a later path that folds
/// onto an occupied name is dropped.
pub fn build_tree(stripped: &[String]) -> Result<DirectoryNode, PathTreeError> {
    if stripped.is_empty() {
        return Err(PathTreeError::EmptyInput);
    }

    let mut root = DirectoryNode::new("");
    'paths: for (record_index, path) in stripped.iter().enumerate() {
        let mut segments: Vec<&str> = path.split('/').collect();
        let leaf_name = segments.pop().unwrap_or_default();

        let mut cursor = &mut root.children;
        for segment in segments {
            let node = cursor.entry(segment.to_string()).or_insert_with(|| {
                TreeNode::Directory(DirectoryNode::new(segment))
            });
            cursor = match node {
                TreeNode::Directory(dir) => &mut dir.children,
                TreeNode::Leaf(_) => {
                    log::debug!(
                        "path {path:?} folds onto an existing file entry {segment:?}; keeping the first"
                    );
                    continue 'paths;
                }
            };
        }

        if cursor.contains_key(leaf_name) {
            log::debug!("duplicate entry {leaf_name:?} in {path:?}; keeping the first");
        } else {
            cursor.insert(
                leaf_name.to_string(),
                TreeNode::Leaf(LeafNode {
                    name: leaf_name.to_string(),
                    record_index,
                }),
            );
        }
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    /// Follows a `/`-separated path through the tree to its leaf.
    fn walk<'a>(root: &'a DirectoryNode, path: &str) -> Option<&'a LeafNode> {
        let mut segments = path.split('/').peekable();
        let mut cursor = &root.children;
        while let Some(segment) = segments.next() {
            match cursor.get(segment)? {
                TreeNode::Directory(dir) if segments.peek().is_some() => {
                    cursor = &dir.children;
                }
                TreeNode::Leaf(leaf) if segments.peek().is_none() => return Some(leaf),
                _ => return None,
            }
        }
        None
    }

    #[test]
    fn common_directory_of_nothing_is_empty() {
        assert_eq!(longest_common_directory(&[]), "");
    }

    #[test]
    fn common_directory_of_single_path_is_its_directory() {
        assert_eq!(longest_common_directory(&["a/b/c"]), "a/b");
        assert_eq!(longest_common_directory(&["plain.txt"]), "");
    }

    #[test]
    fn common_directory_truncates_on_first_mismatch() {
        assert_eq!(longest_common_directory(&["a/b/c", "a/b/d", "a/x"]), "a");
    }

    #[test]
    fn divergence_at_first_segment_yields_empty() {
        assert_eq!(longest_common_directory(&["a/b", "c/d"]), "");
    }

    #[test]
    fn strip_removes_exactly_prefix_and_slash() {
        assert_eq!(strip_prefix(&["a/b/c"], "a/b").unwrap(), vec!["c"]);
    }

    #[test]
    fn strip_with_empty_prefix_copies_unchanged() {
        let input = ["x"];
        let out = strip_prefix(&input, "").unwrap();
        assert_eq!(out, vec!["x"]);
        // owned copies, not aliases into the input
        assert_ne!(out[0].as_ptr(), input[0].as_ptr());
    }

    #[test]
    fn strip_rejects_paths_outside_the_prefix() {
        assert_eq!(
            strip_prefix(&["other/file"], "a"),
            Err(PathTreeError::PrefixMismatch {
                path: "other/file".into(),
                prefix: "a".into(),
            })
        );
    }

    #[test]
    fn build_tree_rejects_empty_input() {
        assert_eq!(build_tree(&[]), Err(PathTreeError::EmptyInput));
    }

    #[test]
    fn every_distinct_path_is_reachable_as_a_leaf() {
        let paths = ["src/a.ts", "src/b/c.ts", "README.md", "src/b/d.ts"];
        let prefix = longest_common_directory(&paths);
        assert_eq!(prefix, "");
        let stripped = strip_prefix(&paths, &prefix).unwrap();
        let root = build_tree(&stripped).unwrap();

        for (i, path) in paths.iter().enumerate() {
            let leaf = walk(&root, path).unwrap_or_else(|| panic!("missing leaf for {path}"));
            assert_eq!(leaf.record_index, i);
        }
    }

    #[test]
    fn children_keep_first_seen_order() {
        let stripped = strings(&["zeta/f.rs", "alpha/g.rs", "zeta/h.rs", "top.rs"]);
        let root = build_tree(&stripped).unwrap();
        let names: Vec<&str> = root.children.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "top.rs"]);
    }

    #[test]
    fn duplicate_leaf_keeps_the_first_record() {
        let stripped = strings(&["dir/file.rs", "dir/file.rs"]);
        let root = build_tree(&stripped).unwrap();
        let leaf = walk(&root, "dir/file.rs").unwrap();
        assert_eq!(leaf.record_index, 0);
        let TreeNode::Directory(dir) = &root.children["dir"] else {
            panic!("dir is not a directory");
        };
        assert_eq!(dir.children.len(), 1);
    }

    #[test]
    fn directory_name_occupied_by_file_drops_the_later_path() {
        // "a" is claimed as a file first; "a/b" cannot descend into it.
        let stripped = strings(&["a", "a/b"]);
        let root = build_tree(&stripped).unwrap();
        assert_eq!(root.children.len(), 1);
        assert!(matches!(&root.children["a"], TreeNode::Leaf(l) if l.record_index == 0));
    }
}
