use serde::{Deserialize, Serialize};

/// A report card shown next to the procedure list.
///
/// Report cards are not derived from procedures; they only share the search
/// box with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCard {
    pub title: String,
    pub description: String,
    /// Report definition file name, e.g. `Report_StudentGrades.rdl`.
    pub file: String,
    /// Lines shown when the details panel is open.
    #[serde(default)]
    pub details: Vec<String>,
}

impl ReportCard {
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.file]
    }
}
