//! Contract between the core and the concrete page it augments.

use anyhow::Result;

use crate::infra::extract::RawChangeEntry;
use crate::ui::selection::SelectionSurface;
use crate::ui::tree_view::TreeView;

/// Everything the core needs from (and does to) the loaded page.
///
/// A real adapter wraps the page's DOM; tests use an in-memory fake. All
/// reads happen at construction time except [`current_fragment`], which is
/// also read on every navigation event.
///
/// [`current_fragment`]: HostPage::current_fragment
pub trait HostPage: SelectionSurface {
    /// Whether the page carries the site marker this augmenter targets.
    fn site_marker_present(&self) -> bool;

    /// Raw changed-file entries currently in the page, in display order.
    fn raw_entries(&self) -> Vec<RawChangeEntry>;

    /// Number of per-file content panels present in the page.
    fn panel_count(&self) -> usize;

    /// Current navigation fragment.
    fn current_fragment(&self) -> String;

    /// Replace the flat panel list with the two-pane container and register
    /// the navigation listener.
    fn mount(&mut self, view: &TreeView) -> Result<()>;

    /// Move each record's panel verbatim into the right pane, hidden by
    /// default and keyed by its reference.
    fn adopt_panels(&mut self, references: &[String]);

    /// Stamp the mounted container so the external poller can tell an
    /// already-processed page from a freshly replaced one.
    fn mark_processed(&mut self);

    /// Whether the current page still carries the processed stamp.
    fn is_processed(&self) -> bool;

    /// Remove the mounted container and unregister the navigation listener.
    fn teardown(&mut self);
}
