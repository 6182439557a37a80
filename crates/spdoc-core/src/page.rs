//! Event adapter between a front end and the catalog view.
//!
//! A [`Page`] owns every piece of mutable view state. Front ends translate
//! their input into [`UiEvent`]s and read back what to draw; no state lives
//! anywhere else.

use std::time::Instant;

use spdoc_catalog::Catalog;
use spdoc_model::{FilterComposition, ReportCard, TypeFilter};
use tracing::{debug, trace};

use crate::listing::{ProcedureListing, ProcedureRenderer, ToggleOutcome};
use crate::reports::ReportPanels;
use crate::reveal::{Bounds, RevealConfig, ScrollReveal};
use crate::state::ViewState;

/// Elements that take part in the scroll reveal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealTarget {
    Report(usize),
    Procedure(String),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The search box changed. Fired on every edit.
    SearchInput(String),
    /// A category control was clicked.
    FilterSelected(TypeFilter),
    /// A procedure card was clicked.
    CardClicked(String),
    /// A report "details" toggle was clicked.
    ReportToggleClicked(usize),
    /// The visible region or the layout changed.
    Viewport {
        viewport: Bounds,
        layout: Vec<(RevealTarget, Bounds)>,
        now: Instant,
    },
    /// Time passed; start any reveal whose delay elapsed.
    Tick(Instant),
}

/// What changed as a result of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageUpdate {
    Rerendered { visible: usize, reports_visible: usize },
    CardToggled(ToggleOutcome),
    ReportToggled(ToggleOutcome),
    RevealScheduled(usize),
    Revealed(Vec<RevealTarget>),
}

#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub composition: FilterComposition,
    pub reveal: RevealConfig,
}

pub struct Page<'a, R = ProcedureListing<'a>> {
    catalog: &'a Catalog,
    view: ViewState,
    renderer: R,
    reports: ReportPanels,
    reveal: ScrollReveal<RevealTarget>,
}

impl<'a> Page<'a> {
    pub fn new(catalog: &'a Catalog, options: PageOptions) -> Self {
        Self::with_renderer(catalog, options, ProcedureListing::default())
    }
}

impl<'a, R: ProcedureRenderer<'a>> Page<'a, R> {
    /// Render the whole catalog into `renderer` and start observing every
    /// initial card for the scroll reveal.
    pub fn with_renderer(catalog: &'a Catalog, options: PageOptions, renderer: R) -> Self {
        let mut page = Self {
            catalog,
            view: ViewState::new(options.composition),
            renderer,
            reports: ReportPanels::new(catalog.reports().len()),
            reveal: ScrollReveal::new(options.reveal),
        };
        page.rerender();
        for index in 0..catalog.reports().len() {
            page.reveal.observe(RevealTarget::Report(index));
        }
        for procedure in catalog.procedures() {
            page.reveal
                .observe(RevealTarget::Procedure(procedure.name.clone()));
        }
        page
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn reports(&self) -> &ReportPanels {
        &self.reports
    }

    pub fn reveal(&self) -> &ScrollReveal<RevealTarget> {
        &self.reveal
    }

    /// Report cards not hidden by the current query, with their index.
    pub fn visible_reports(&self) -> impl Iterator<Item = (usize, &'a ReportCard)> + '_ {
        self.catalog
            .reports()
            .iter()
            .enumerate()
            .filter(|(index, _)| self.reports.is_visible(*index))
    }

    pub fn handle(&mut self, event: UiEvent) -> PageUpdate {
        match event {
            UiEvent::SearchInput(text) => {
                debug!(query = %text, "search input");
                self.reports.apply_search(&text, self.catalog.reports());
                self.view.set_query(text);
                self.rerender()
            }
            UiEvent::FilterSelected(filter) => {
                debug!(%filter, "filter selected");
                self.view.select_filter(filter);
                self.rerender()
            }
            UiEvent::CardClicked(name) => {
                let outcome = self.renderer.toggle(&name);
                debug!(card = %name, ?outcome, "card clicked");
                PageUpdate::CardToggled(outcome)
            }
            UiEvent::ReportToggleClicked(index) => {
                PageUpdate::ReportToggled(self.reports.toggle(index))
            }
            UiEvent::Viewport {
                viewport,
                layout,
                now,
            } => PageUpdate::RevealScheduled(self.reveal.on_viewport(viewport, &layout, now)),
            UiEvent::Tick(now) => {
                let started = self.reveal.poll(now);
                if !started.is_empty() {
                    trace!(count = started.len(), "reveals started");
                }
                PageUpdate::Revealed(started)
            }
        }
    }

    fn rerender(&mut self) -> PageUpdate {
        let visible = self.view.visible(self.catalog.procedures());
        self.renderer.render(&visible);
        PageUpdate::Rerendered {
            visible: visible.len(),
            reports_visible: self.reports.visible_count(),
        }
    }
}

impl<'a> Page<'a, ProcedureListing<'a>> {
    pub fn listing(&self) -> &ProcedureListing<'a> {
        &self.renderer
    }
}
