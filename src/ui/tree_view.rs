//! Pure widget model for the left-pane folder tree.
//!
//! The renderer walks the folded tree depth-first and emits a surface-agnostic
//! widget description; a host adapter turns it into real containers. Within a
//! directory all sub-directories come first, then all files, each group in
//! first-seen order.

use crate::application::pathtree::{DirectoryNode, TreeNode};
use crate::domain::FileChangeRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeView {
    pub root: DirectoryWidget,
}

/// A titled container; the content of one collapsible folder in the left pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryWidget {
    pub label: String,
    pub children: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Dir(DirectoryWidget),
    File(FileEntry),
}

/// A selectable file entry wired to its right-pane panel by `reference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub reference: String,
    pub style_class: &'static str,
}

/// Renders the folded tree against its record list. The root container is
/// labeled with the full stripped prefix (`/` when there is none); every
/// other directory is labeled with just its own segment name.
pub fn render(prefix: &str, root: &DirectoryNode, records: &[FileChangeRecord]) -> TreeView {
    let label = if prefix.is_empty() { "/" } else { prefix };
    TreeView {
        root: render_directory(label, root, records),
    }
}

fn render_directory(
    label: &str,
    node: &DirectoryNode,
    records: &[FileChangeRecord],
) -> DirectoryWidget {
    let mut children = Vec::with_capacity(node.children.len());
    for child in node.children.values() {
        if let TreeNode::Directory(dir) = child {
            children.push(Widget::Dir(render_directory(&dir.name, dir, records)));
        }
    }
    for child in node.children.values() {
        if let TreeNode::Leaf(leaf) = child {
            let record = &records[leaf.record_index];
            children.push(Widget::File(FileEntry {
                name: leaf.name.clone(),
                reference: record.reference.clone(),
                style_class: record.kind.style_class(),
            }));
        }
    }
    DirectoryWidget {
        label: label.to_string(),
        children,
    }
}
