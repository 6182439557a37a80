use serde::{Deserialize, Serialize};

use crate::enums::ProcedureType;

/// Documentation for one stored procedure.
///
/// Every field except `name` is display text; none of it is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    /// Unique within a catalog.
    pub name: String,
    /// Parameter list as written for readers, e.g. `@StudentId INT`.
    pub params: String,
    #[serde(rename = "type")]
    pub kind: ProcedureType,
    /// Display grouping label.
    pub category: String,
    pub description: String,
    /// Result columns.
    pub returns: String,
    /// Which reports consume the procedure.
    pub usage: String,
    /// Example invocation; absent for parameterless procedures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl ProcedureRecord {
    /// Fields the free-text search looks at, in match order.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.name, &self.description, &self.params]
    }
}
