//! Lifecycle owner for one augmentation of a loaded diff page.
//!
//! One instance corresponds to one processed page. An external poller owns
//! it: when the host page is replaced wholesale (the processed stamp is
//! gone), the poller tears the old instance down and creates a fresh one.

use anyhow::Result;

use crate::application::pathtree::{build_tree, longest_common_directory, strip_prefix};
use crate::domain::FileChangeRecord;
use crate::infra::extract::extract_records;
use crate::infra::host::HostPage;
use crate::ui::selection::{SelectionController, SelectionState};
use crate::ui::tree_view::render;

pub struct DiffTreeInstance {
    records: Vec<FileChangeRecord>,
    controller: SelectionController,
}

impl DiffTreeInstance {
    /// Builds the two-pane browser inside `host`.
    ///
    /// Returns `Ok(None)` when there is nothing to augment: no site marker,
    /// no content panels, or zero change records. Setup either completes
    /// fully (tree mounted, panels adopted, initial selection shown) or bails
    /// out before touching the page; all fallible work runs ahead of the
    /// first host mutation.
    pub fn create(host: &mut impl HostPage) -> Result<Option<Self>> {
        if !host.site_marker_present() {
            log::debug!("no site marker on this page; nothing to augment");
            return Ok(None);
        }
        if host.panel_count() == 0 {
            log::debug!("no file-content panels found; nothing to augment");
            return Ok(None);
        }
        let records = extract_records(&host.raw_entries());
        if records.is_empty() {
            log::debug!("no change records found; nothing to augment");
            return Ok(None);
        }

        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        let prefix = longest_common_directory(&paths);
        let stripped = strip_prefix(&paths, &prefix)?;
        let tree = build_tree(&stripped)?;
        let view = render(&prefix, &tree, &records);

        host.mount(&view)?;
        let references: Vec<String> = records.iter().map(|r| r.reference.clone()).collect();
        host.adopt_panels(&references);
        host.mark_processed();

        let mut controller = SelectionController::new(references);
        let fragment = host.current_fragment();
        controller.initialize(host, &fragment);

        log::info!(
            "mounted file tree for {} changed files under {:?}",
            records.len(),
            prefix
        );
        Ok(Some(Self {
            records,
            controller,
        }))
    }

    pub fn records(&self) -> &[FileChangeRecord] {
        &self.records
    }

    /// Reference of the currently shown file, if any.
    pub fn active_reference(&self) -> Option<&str> {
        match self.controller.state() {
            SelectionState::Active(reference) => Some(reference),
            SelectionState::NoSelection => None,
        }
    }

    /// Forwarded by the host adapter's navigation listener.
    pub fn on_navigation_changed(&mut self, host: &mut impl HostPage, fragment: &str) {
        self.controller.on_navigation_changed(host, fragment);
    }

    /// Unmounts the container and unregisters the navigation listener. The
    /// instance's records and selection state go away with it.
    pub fn teardown(self, host: &mut impl HostPage) {
        host.teardown();
    }
}
