//! Free-text and category filtering over catalog records.
//!
//! All functions here are total: an unmatched query or filter yields an
//! empty result, never an error. Results are always an order-preserving
//! subsequence of the input.

use spdoc_model::{ProcedureRecord, ReportCard, TypeFilter};

/// Lower-case a raw query the way the search box does.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Case-insensitive substring test of an already-normalized needle against
/// each field. An empty needle matches everything.
pub fn matches_query(needle: &str, fields: [&str; 3]) -> bool {
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Records whose name, description or params contain `query`.
pub fn filter_by_search<'a>(query: &str, all: &'a [ProcedureRecord]) -> Vec<&'a ProcedureRecord> {
    let needle = normalize_query(query);
    all.iter()
        .filter(|record| matches_query(&needle, record.searchable_fields()))
        .collect()
}

/// Records accepted by the category filter.
pub fn filter_by_type(filter: TypeFilter, all: &[ProcedureRecord]) -> Vec<&ProcedureRecord> {
    all.iter()
        .filter(|record| filter.accepts(record.kind))
        .collect()
}

/// Whether a report card stays visible for `query` (title, description, file).
pub fn report_matches(query: &str, card: &ReportCard) -> bool {
    matches_query(&normalize_query(query), card.searchable_fields())
}

/// Visibility flag per report card, in card order.
pub fn report_visibility(query: &str, cards: &[ReportCard]) -> Vec<bool> {
    let needle = normalize_query(query);
    cards
        .iter()
        .map(|card| matches_query(&needle, card.searchable_fields()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches() {
        assert!(matches_query("", ["", "", ""]));
    }

    #[test]
    fn needle_must_already_be_lowercase() {
        // Callers normalize first; an upper-case needle never matches lowered fields.
        assert!(!matches_query("ID", ["@ExamId INT", "", ""]));
        assert!(matches_query("examid", ["@ExamId INT", "", ""]));
    }

    #[test]
    fn report_matches_on_file_name() {
        let card = ReportCard {
            title: "Topics by Course".to_string(),
            description: "Curriculum outline.".to_string(),
            file: "Report_TopicsByCourse.rdl".to_string(),
            details: Vec::new(),
        };
        assert!(report_matches(".RDL", &card));
        assert!(report_matches("curriculum", &card));
        assert!(!report_matches("student", &card));
    }
}
