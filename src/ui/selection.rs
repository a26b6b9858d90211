//! Single-selection state machine for the two-pane browser.
//!
//! The controller owns an explicit [`SelectionState`] and talks to the page
//! only through [`SelectionSurface`], so every transition is testable against
//! a recording fake. One navigation handler call performs the whole
//! hide-previous/show-next transition before returning; an observer never
//! sees two visible panels between calls.

/// Rendering-surface side of a selection change: toggling one panel's
/// visibility and one tree entry's highlight.
pub trait SelectionSurface {
    fn set_panel_visible(&mut self, reference: &str, visible: bool);
    fn set_entry_highlighted(&mut self, reference: &str, highlighted: bool);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Only before initialization, or forever when the record list is empty.
    #[default]
    NoSelection,
    /// Exactly one panel visible and one entry highlighted.
    Active(String),
}

#[derive(Debug)]
pub struct SelectionController {
    /// Known references in record order; the first one is the fallback.
    references: Vec<String>,
    state: SelectionState,
}

impl SelectionController {
    pub fn new(references: Vec<String>) -> Self {
        Self {
            references,
            state: SelectionState::NoSelection,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// First show, driven by the fragment the page loaded with. Same logic as
    /// a navigation event; the controller does not distinguish the two.
    pub fn initialize(&mut self, surface: &mut impl SelectionSurface, current_fragment: &str) {
        self.on_navigation_changed(surface, current_fragment);
    }

    /// Shows the panel for `fragment`, falling back to the first record when
    /// the fragment matches no known reference. Idempotent: repeating a
    /// fragment re-resolves to the same single active pair.
    pub fn on_navigation_changed(&mut self, surface: &mut impl SelectionSurface, fragment: &str) {
        let Some(resolved) = self.resolve(fragment) else {
            // no records: stay NoSelection forever
            return;
        };
        if let SelectionState::Active(previous) = &self.state {
            surface.set_panel_visible(previous, false);
            surface.set_entry_highlighted(previous, false);
        }
        surface.set_panel_visible(&resolved, true);
        surface.set_entry_highlighted(&resolved, true);
        self.state = SelectionState::Active(resolved);
    }

    fn resolve(&self, fragment: &str) -> Option<String> {
        let first = self.references.first()?;
        match self.references.iter().find(|r| r.as_str() == fragment) {
            Some(known) => Some(known.clone()),
            None => {
                log::debug!("fragment {fragment:?} matches no record; falling back to {first:?}");
                Some(first.clone())
            }
        }
    }
}
