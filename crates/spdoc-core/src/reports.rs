//! Report card details panels.

use spdoc_model::ReportCard;
use tracing::debug;

use crate::filter::report_visibility;
use crate::listing::ToggleOutcome;

/// Toggle caption while a panel is open.
pub const OPEN_CAPTION: &str = "Hide Details ▲";
/// Toggle caption while a panel is closed.
pub const CLOSED_CAPTION: &str = "View Details ▼";

/// Open/visible state for a fixed set of report cards.
///
/// At most one panel is open. Search visibility is independent of the open
/// panel: hiding a card does not close it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPanels {
    open: Option<usize>,
    visible: Vec<bool>,
}

impl ReportPanels {
    pub fn new(count: usize) -> Self {
        Self {
            open: None,
            visible: vec![true; count],
        }
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn caption(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            OPEN_CAPTION
        } else {
            CLOSED_CAPTION
        }
    }

    pub fn toggle(&mut self, index: usize) -> ToggleOutcome {
        if index >= self.visible.len() {
            return ToggleOutcome::NotFound;
        }
        let outcome = if self.open == Some(index) {
            self.open = None;
            ToggleOutcome::Closed
        } else {
            self.open = Some(index);
            ToggleOutcome::Opened
        };
        debug!(index, ?outcome, "toggled report panel");
        outcome
    }

    /// Show or hide each card according to `query`. `cards` must be the same
    /// set the panels were created for.
    pub fn apply_search(&mut self, query: &str, cards: &[ReportCard]) {
        self.visible = report_visibility(query, cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let mut panels = ReportPanels::new(3);
        assert_eq!(panels.toggle(0), ToggleOutcome::Opened);
        assert_eq!(panels.toggle(2), ToggleOutcome::Opened);
        assert!(!panels.is_open(0));
        assert!(panels.is_open(2));
        assert_eq!(panels.caption(0), CLOSED_CAPTION);
        assert_eq!(panels.caption(2), OPEN_CAPTION);
    }

    #[test]
    fn toggling_open_panel_closes_it() {
        let mut panels = ReportPanels::new(2);
        panels.toggle(1);
        assert_eq!(panels.toggle(1), ToggleOutcome::Closed);
        assert_eq!(panels.open_index(), None);
        assert_eq!(panels.caption(1), CLOSED_CAPTION);
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut panels = ReportPanels::new(2);
        panels.toggle(0);
        assert_eq!(panels.toggle(5), ToggleOutcome::NotFound);
        assert!(panels.is_open(0));
        assert!(!panels.is_visible(5));
    }
}
