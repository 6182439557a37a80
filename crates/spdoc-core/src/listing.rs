//! Rendered procedure list and its expand/collapse state.

use spdoc_model::ProcedureRecord;
use tracing::debug;

/// Result of clicking a card or a report toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Opened,
    Closed,
    /// The target is not currently rendered; nothing changed.
    NotFound,
}

/// Interface between the view state and whatever draws the procedure list.
pub trait ProcedureRenderer<'a> {
    /// Replace the displayed cards. All details start collapsed.
    fn render(&mut self, records: &[&'a ProcedureRecord]);

    /// Toggle the details of the card named `name`, closing any other.
    fn toggle(&mut self, name: &str) -> ToggleOutcome;
}

/// One card as it should currently be drawn.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub record: &'a ProcedureRecord,
    pub expanded: bool,
}

/// In-memory procedure list.
///
/// At most one card is expanded at a time. A new render forgets it.
#[derive(Debug, Clone, Default)]
pub struct ProcedureListing<'a> {
    cards: Vec<&'a ProcedureRecord>,
    expanded: Option<usize>,
}

impl<'a> ProcedureListing<'a> {
    pub fn new(records: &[&'a ProcedureRecord]) -> Self {
        let mut listing = Self::default();
        listing.render(records);
        listing
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The "no results" indicator is shown exactly when the list is empty.
    pub fn shows_no_results(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = CardView<'a>> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(move |(idx, &record)| CardView {
                record,
                expanded: self.expanded == Some(idx),
            })
    }

    pub fn records(&self) -> &[&'a ProcedureRecord] {
        &self.cards
    }

    pub fn expanded(&self) -> Option<&'a ProcedureRecord> {
        self.expanded.map(|idx| self.cards[idx])
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded().is_some_and(|record| record.name == name)
    }
}

impl<'a> ProcedureRenderer<'a> for ProcedureListing<'a> {
    fn render(&mut self, records: &[&'a ProcedureRecord]) {
        self.cards = records.to_vec();
        self.expanded = None;
        debug!(cards = self.cards.len(), "rendered procedure list");
    }

    fn toggle(&mut self, name: &str) -> ToggleOutcome {
        let Some(idx) = self.cards.iter().position(|record| record.name == name) else {
            return ToggleOutcome::NotFound;
        };
        if self.expanded == Some(idx) {
            self.expanded = None;
            ToggleOutcome::Closed
        } else {
            self.expanded = Some(idx);
            ToggleOutcome::Opened
        }
    }
}
