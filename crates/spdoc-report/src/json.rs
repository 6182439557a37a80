use anyhow::Result;
use serde::Serialize;

use spdoc_core::Page;
use spdoc_model::ProcedureRecord;

/// JSON document for the current procedure list.
#[derive(Debug, Serialize)]
pub struct VisibleProcedures<'a> {
    pub query: &'a str,
    pub filter: &'static str,
    pub composition: &'static str,
    pub count: usize,
    pub expanded: Option<&'a str>,
    pub procedures: Vec<&'a ProcedureRecord>,
}

pub fn visible_procedures_json(page: &Page<'_>) -> Result<String> {
    let listing = page.listing();
    let doc = VisibleProcedures {
        query: page.view().query(),
        filter: page.view().filter().as_str(),
        composition: page.view().composition().as_str(),
        count: listing.len(),
        expanded: listing.expanded().map(|record| record.name.as_str()),
        procedures: listing.records().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
