//! Search and filter view state.
//!
//! [`ViewState`] is the only place the current query and category live.
//! Computing the visible list from it is a pure function of the state and
//! the catalog slice, so it can be tested without any front end.

use spdoc_model::{FilterComposition, ProcedureRecord, TypeFilter};

use crate::filter::{filter_by_search, filter_by_type, matches_query, normalize_query};

/// Which control last changed the procedure list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListDriver {
    /// Nothing has been used yet; the full catalog is shown.
    #[default]
    Initial,
    Search,
    Category,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    filter: TypeFilter,
    composition: FilterComposition,
    driver: ListDriver,
}

impl ViewState {
    pub fn new(composition: FilterComposition) -> Self {
        Self {
            composition,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The single active category control.
    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn composition(&self) -> FilterComposition {
        self.composition
    }

    pub fn driver(&self) -> ListDriver {
        self.driver
    }

    pub fn is_active(&self, control: TypeFilter) -> bool {
        self.filter == control
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.driver = ListDriver::Search;
    }

    /// Activate `filter`, deactivating whichever control was active.
    pub fn select_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
        self.driver = ListDriver::Category;
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.select_filter(filter);
        self
    }

    /// Records to display, in catalog order.
    ///
    /// With [`FilterComposition::Override`] the most recently used control
    /// alone decides the list and the other one is ignored. With
    /// [`FilterComposition::Intersect`] a record has to pass both.
    pub fn visible<'a>(&self, all: &'a [ProcedureRecord]) -> Vec<&'a ProcedureRecord> {
        match self.composition {
            FilterComposition::Override => match self.driver {
                ListDriver::Initial => all.iter().collect(),
                ListDriver::Search => filter_by_search(&self.query, all),
                ListDriver::Category => filter_by_type(self.filter, all),
            },
            FilterComposition::Intersect => {
                let needle = normalize_query(&self.query);
                all.iter()
                    .filter(|record| {
                        self.filter.accepts(record.kind)
                            && matches_query(&needle, record.searchable_fields())
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdoc_model::ProcedureType;

    fn record(name: &str, kind: ProcedureType) -> ProcedureRecord {
        ProcedureRecord {
            name: name.to_string(),
            params: "No Parameters".to_string(),
            kind,
            category: "General".to_string(),
            description: String::new(),
            returns: String::new(),
            usage: String::new(),
            example: None,
        }
    }

    fn names(records: &[&ProcedureRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn sample() -> Vec<ProcedureRecord> {
        vec![
            record("SP_Select_Student", ProcedureType::Select),
            record("SP_Insert_Student", ProcedureType::Insert),
            record("SP_Delete_Course", ProcedureType::Delete),
        ]
    }

    #[test]
    fn initial_state_shows_everything() {
        let all = sample();
        let state = ViewState::default();
        assert_eq!(state.visible(&all).len(), 3);
        assert_eq!(state.driver(), ListDriver::Initial);
        assert!(state.is_active(TypeFilter::All));
    }

    #[test]
    fn override_uses_last_control_only() {
        let all = sample();
        let state = ViewState::new(FilterComposition::Override)
            .with_query("student")
            .with_filter(TypeFilter::Only(ProcedureType::Delete));
        // The filter click discards the query result.
        assert_eq!(names(&state.visible(&all)), vec!["SP_Delete_Course"]);
        assert_eq!(state.query(), "student");

        let state = state.with_query("student");
        assert_eq!(
            names(&state.visible(&all)),
            vec!["SP_Select_Student", "SP_Insert_Student"]
        );
    }

    #[test]
    fn intersect_applies_both() {
        let all = sample();
        let state = ViewState::new(FilterComposition::Intersect)
            .with_query("student")
            .with_filter(TypeFilter::Only(ProcedureType::Insert));
        assert_eq!(names(&state.visible(&all)), vec!["SP_Insert_Student"]);

        let state = state.with_filter(TypeFilter::Only(ProcedureType::Delete));
        assert!(state.visible(&all).is_empty());
    }

    #[test]
    fn selecting_a_filter_replaces_the_active_one() {
        let mut state = ViewState::default();
        state.select_filter(TypeFilter::Only(ProcedureType::Update));
        assert!(state.is_active(TypeFilter::Only(ProcedureType::Update)));
        assert!(!state.is_active(TypeFilter::All));
        let active = TypeFilter::controls()
            .into_iter()
            .filter(|control| state.is_active(*control))
            .count();
        assert_eq!(active, 1);
    }
}
