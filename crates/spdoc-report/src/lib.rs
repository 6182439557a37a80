//! Output back-ends for the catalog view.
//!
//! All renderers draw from a [`spdoc_core::Page`]; none of them keep state.

pub mod html;
pub mod json;
pub mod terminal;

pub use html::{write_page_fragment, page_fragment};
pub use json::{VisibleProcedures, visible_procedures_json};
pub use terminal::{
    NO_RESULTS, apply_table_style, filter_bar, listing_text, procedure_details_text,
    reports_text,
};
