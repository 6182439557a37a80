pub mod filter;
pub mod listing;
pub mod page;
pub mod reports;
pub mod reveal;
pub mod state;

pub use filter::{
    filter_by_search, filter_by_type, matches_query, normalize_query, report_matches,
    report_visibility,
};
pub use listing::{CardView, ProcedureListing, ProcedureRenderer, ToggleOutcome};
pub use page::{Page, PageOptions, PageUpdate, RevealTarget, UiEvent};
pub use reports::{CLOSED_CAPTION, OPEN_CAPTION, ReportPanels};
pub use reveal::{Bounds, RevealConfig, RevealPhase, RevealStyle, ScrollReveal, intersection_ratio};
pub use state::{ListDriver, ViewState};
