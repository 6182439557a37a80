//! Event handling through the page adapter.

use std::time::{Duration, Instant};

use spdoc_catalog::{Catalog, load_builtin_catalog};
use spdoc_core::{
    Bounds, CLOSED_CAPTION, OPEN_CAPTION, Page, PageOptions, PageUpdate, ProcedureRenderer,
    RevealPhase, RevealTarget, ToggleOutcome, UiEvent,
};
use spdoc_model::{FilterComposition, ProcedureRecord, ProcedureType, TypeFilter};

fn catalog() -> Catalog {
    load_builtin_catalog().expect("built-in catalog")
}

fn visible_names(page: &Page<'_>) -> Vec<String> {
    page.listing()
        .records()
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn initial_render_shows_catalog_collapsed() {
    let catalog = catalog();
    let page = Page::new(&catalog, PageOptions::default());
    assert_eq!(page.listing().len(), 12);
    assert!(page.listing().cards().all(|card| !card.expanded));
    assert!(!page.listing().shows_no_results());
    assert_eq!(page.visible_reports().count(), 6);
}

#[test]
fn exclusive_expansion_for_every_pair() {
    let catalog = catalog();
    let names: Vec<String> = catalog
        .procedures()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    for a in &names {
        for b in names.iter().filter(|b| *b != a) {
            let mut page = Page::new(&catalog, PageOptions::default());
            assert_eq!(
                page.handle(UiEvent::CardClicked(a.clone())),
                PageUpdate::CardToggled(ToggleOutcome::Opened)
            );
            page.handle(UiEvent::CardClicked(b.clone()));
            assert!(page.listing().is_expanded(b));
            assert!(!page.listing().is_expanded(a));
            assert_eq!(page.listing().cards().filter(|c| c.expanded).count(), 1);
        }
    }
}

#[test]
fn rerender_collapses_expanded_card() {
    let catalog = catalog();
    let mut page = Page::new(&catalog, PageOptions::default());
    page.handle(UiEvent::CardClicked("SP_Report_StudentGrades".to_string()));
    assert!(page.listing().expanded().is_some());

    page.handle(UiEvent::SearchInput("student".to_string()));
    assert!(page.listing().expanded().is_none());

    page.handle(UiEvent::CardClicked("SP_Report_StudentGrades".to_string()));
    page.handle(UiEvent::FilterSelected(TypeFilter::All));
    assert!(page.listing().expanded().is_none());
}

#[test]
fn no_results_path() {
    let catalog = catalog();
    let mut page = Page::new(&catalog, PageOptions::default());
    let update = page.handle(UiEvent::SearchInput("zzz".to_string()));
    assert_eq!(
        update,
        PageUpdate::Rerendered {
            visible: 0,
            reports_visible: 0
        }
    );
    assert!(page.listing().shows_no_results());
    assert_eq!(page.listing().cards().count(), 0);
    assert_eq!(
        page.handle(UiEvent::CardClicked("SP_Report_StudentGrades".to_string())),
        PageUpdate::CardToggled(ToggleOutcome::NotFound)
    );
}

#[test]
fn override_mode_filter_click_ignores_query() {
    let catalog = catalog();
    let mut page = Page::new(&catalog, PageOptions::default());
    page.handle(UiEvent::SearchInput("student".to_string()));
    assert_eq!(page.listing().len(), 6);

    page.handle(UiEvent::FilterSelected(TypeFilter::Only(ProcedureType::Select)));
    assert_eq!(page.listing().len(), 12);
    // Report cards keep the query's visibility.
    assert_eq!(page.visible_reports().count(), 4);
    assert_eq!(page.view().query(), "student");
}

#[test]
fn intersect_mode_composes() {
    let catalog = catalog();
    let options = PageOptions {
        composition: FilterComposition::Intersect,
        ..PageOptions::default()
    };
    let mut page = Page::new(&catalog, options);
    page.handle(UiEvent::SearchInput("branch".to_string()));
    assert_eq!(
        visible_names(&page),
        vec!["SP_Report_GetAllBranches", "SP_Report_StudentsByBranch"]
    );
    page.handle(UiEvent::FilterSelected(TypeFilter::Only(ProcedureType::Delete)));
    assert!(page.listing().shows_no_results());
    page.handle(UiEvent::FilterSelected(TypeFilter::All));
    assert_eq!(page.listing().len(), 2);
}

#[test]
fn report_toggle_captions() {
    let catalog = catalog();
    let mut page = Page::new(&catalog, PageOptions::default());
    page.handle(UiEvent::ReportToggleClicked(1));
    page.handle(UiEvent::ReportToggleClicked(3));
    let captions: Vec<&str> = (0..6).map(|i| page.reports().caption(i)).collect();
    assert_eq!(
        captions,
        vec![
            CLOSED_CAPTION,
            CLOSED_CAPTION,
            CLOSED_CAPTION,
            OPEN_CAPTION,
            CLOSED_CAPTION,
            CLOSED_CAPTION
        ]
    );
    assert_eq!(
        page.handle(UiEvent::ReportToggleClicked(3)),
        PageUpdate::ReportToggled(ToggleOutcome::Closed)
    );
    assert_eq!(page.reports().open_index(), None);
    assert_eq!(
        page.handle(UiEvent::ReportToggleClicked(42)),
        PageUpdate::ReportToggled(ToggleOutcome::NotFound)
    );
}

#[test]
fn hiding_a_report_keeps_its_panel_open() {
    let catalog = catalog();
    let mut page = Page::new(&catalog, PageOptions::default());
    assert_eq!(
        page.handle(UiEvent::ReportToggleClicked(0)),
        PageUpdate::ReportToggled(ToggleOutcome::Opened)
    );

    // "grades" matches Student Grades but not Exam Questions.
    page.handle(UiEvent::SearchInput("grades".into()));
    assert!(!page.reports().is_visible(0));
    assert!(page.reports().is_visible(1));
    assert!(page.reports().is_open(0));
    assert_eq!(page.reports().open_index(), Some(0));

    page.handle(UiEvent::SearchInput(String::new()));
    assert!(page.reports().is_visible(0));
    assert_eq!(page.reports().caption(0), OPEN_CAPTION);
    assert_eq!(page.visible_reports().count(), 6);
}

#[test]
fn reveal_fires_once_after_delay() {
    let catalog = catalog();
    let mut page = Page::new(&catalog, PageOptions::default());
    let start = Instant::now();
    let viewport = Bounds::new(0.0, 800.0);
    let layout = vec![
        (RevealTarget::Report(0), Bounds::new(100.0, 200.0)),
        (RevealTarget::Report(1), Bounds::new(1200.0, 200.0)),
    ];

    assert_eq!(
        page.handle(UiEvent::Viewport {
            viewport,
            layout: layout.clone(),
            now: start,
        }),
        PageUpdate::RevealScheduled(1)
    );
    assert!(matches!(
        page.reveal().phase(&RevealTarget::Report(0)),
        Some(RevealPhase::Scheduled { .. })
    ));
    assert_eq!(page.reveal().pending(), 1);
    assert_eq!(page.reveal().config().delay, Duration::from_millis(100));
    let hidden = page
        .reveal()
        .style(&RevealTarget::Report(0))
        .expect("scheduled style");
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.translate_y_px, 20.0);

    // Not yet.
    assert_eq!(
        page.handle(UiEvent::Tick(start + Duration::from_millis(50))),
        PageUpdate::Revealed(Vec::new())
    );
    assert_eq!(
        page.handle(UiEvent::Tick(start + Duration::from_millis(100))),
        PageUpdate::Revealed(vec![RevealTarget::Report(0)])
    );
    assert_eq!(page.reveal().pending(), 0);
    let shown = page
        .reveal()
        .style(&RevealTarget::Report(0))
        .expect("revealed style");
    assert_eq!(shown.opacity, 1.0);
    assert_eq!(shown.transition, Some(Duration::from_millis(500)));

    // Scrolling it out and back in never re-triggers.
    let later = start + Duration::from_secs(5);
    page.handle(UiEvent::Viewport {
        viewport: Bounds::new(2000.0, 800.0),
        layout: layout.clone(),
        now: later,
    });
    assert_eq!(
        page.handle(UiEvent::Viewport {
            viewport,
            layout,
            now: later,
        }),
        PageUpdate::RevealScheduled(0)
    );
    assert_eq!(
        page.handle(UiEvent::Tick(later + Duration::from_secs(1))),
        PageUpdate::Revealed(Vec::new())
    );
    assert!(page.reveal().is_observing(&RevealTarget::Report(1)));
}

#[derive(Default)]
struct RecordingRenderer {
    renders: Vec<Vec<String>>,
    toggles: Vec<String>,
}

impl<'a> ProcedureRenderer<'a> for RecordingRenderer {
    fn render(&mut self, records: &[&'a ProcedureRecord]) {
        self.renders
            .push(records.iter().map(|r| r.name.clone()).collect());
    }

    fn toggle(&mut self, name: &str) -> ToggleOutcome {
        self.toggles.push(name.to_string());
        ToggleOutcome::Opened
    }
}

#[test]
fn custom_renderer_receives_every_render() {
    let catalog = catalog();
    let mut page = Page::with_renderer(
        &catalog,
        PageOptions::default(),
        RecordingRenderer::default(),
    );
    page.handle(UiEvent::SearchInput("s".to_string()));
    page.handle(UiEvent::SearchInput("st".to_string()));
    page.handle(UiEvent::CardClicked("SP_Report_GetAllStudents".to_string()));

    let renderer = page.renderer();
    assert_eq!(renderer.renders.len(), 3);
    assert_eq!(renderer.renders[0].len(), 12);
    assert_eq!(renderer.toggles, vec!["SP_Report_GetAllStudents"]);
}
