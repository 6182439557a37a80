//! Type-safe enumerations for procedure metadata and view filters.
//!
//! These enums replace the string tags carried by the catalog data and by
//! the filter controls, so an invalid tag is rejected where it enters the
//! program instead of silently matching nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Kind of statement a stored procedure performs.
///
/// Drives the category filter. Serialized in lower case (`"select"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureType {
    Select,
    Insert,
    Update,
    Delete,
}

impl ProcedureType {
    /// Returns the lower-case tag used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcedureType::Select => "select",
            ProcedureType::Insert => "insert",
            ProcedureType::Update => "update",
            ProcedureType::Delete => "delete",
        }
    }

    /// All procedure types in display order.
    pub const fn all() -> &'static [ProcedureType] {
        &[
            ProcedureType::Select,
            ProcedureType::Insert,
            ProcedureType::Update,
            ProcedureType::Delete,
        ]
    }
}

impl fmt::Display for ProcedureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcedureType {
    type Err = ModelError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(ProcedureType::Select),
            "insert" => Ok(ProcedureType::Insert),
            "update" => Ok(ProcedureType::Update),
            "delete" => Ok(ProcedureType::Delete),
            _ => Err(ModelError::UnknownProcedureType(s.to_string())),
        }
    }
}

/// Category filter selection.
///
/// Exactly one value is active at a time; holding a single `TypeFilter`
/// in the view state is what makes the filter controls mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ProcedureType),
}

impl TypeFilter {
    /// Every filter control in display order, `all` first.
    pub fn controls() -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(ProcedureType::all().iter().copied().map(TypeFilter::Only))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(kind) => kind.as_str(),
        }
    }

    /// Returns true if a procedure of `kind` passes this filter.
    pub fn accepts(&self, kind: ProcedureType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(expected) => *expected == kind,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(TypeFilter::All);
        }
        normalized
            .parse::<ProcedureType>()
            .map(TypeFilter::Only)
            .map_err(|_| ModelError::UnknownTypeFilter(s.to_string()))
    }
}

/// How the search query and the category filter combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterComposition {
    /// The most recently used control decides the list on its own.
    #[default]
    Override,
    /// A record must pass both the query and the category filter.
    Intersect,
}

impl FilterComposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterComposition::Override => "override",
            FilterComposition::Intersect => "intersect",
        }
    }
}

impl fmt::Display for FilterComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterComposition {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "override" => Ok(FilterComposition::Override),
            "intersect" => Ok(FilterComposition::Intersect),
            _ => Err(ModelError::UnknownComposition(s.to_string())),
        }
    }
}
