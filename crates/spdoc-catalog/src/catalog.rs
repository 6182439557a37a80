use std::collections::BTreeMap;

use spdoc_model::{ProcedureRecord, ReportCard};

/// Ordered, read-only collection of procedures and report cards.
///
/// The order of `procedures` is the display order; nothing in the workspace
/// reorders it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    procedures: Vec<ProcedureRecord>,
    reports: Vec<ReportCard>,
    by_name: BTreeMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already well-formed records.
    ///
    /// If two procedures share a name, lookups by name resolve to the first.
    pub fn new(procedures: Vec<ProcedureRecord>, reports: Vec<ReportCard>) -> Self {
        let mut by_name = BTreeMap::new();
        for (idx, procedure) in procedures.iter().enumerate() {
            by_name.entry(procedure.name.clone()).or_insert(idx);
        }
        Self {
            procedures,
            reports,
            by_name,
        }
    }

    pub fn procedures(&self) -> &[ProcedureRecord] {
        &self.procedures
    }

    pub fn reports(&self) -> &[ReportCard] {
        &self.reports
    }

    pub fn get(&self, name: &str) -> Option<&ProcedureRecord> {
        self.by_name.get(name).map(|&idx| &self.procedures[idx])
    }

    /// Position of a procedure in display order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}
