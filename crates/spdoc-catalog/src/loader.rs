use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use spdoc_model::{ProcedureRecord, ReportCard};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// The reference catalog shipped with the crate.
pub const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

const BUILTIN_ORIGIN: &str = "<built-in>";

/// On-disk shape: `[[procedure]]` and `[[report]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "procedure")]
    procedures: Vec<ProcedureRecord>,
    #[serde(default, rename = "report")]
    reports: Vec<ReportCard>,
}

/// Parse the catalog embedded in this crate.
pub fn load_builtin_catalog() -> Result<Catalog, CatalogError> {
    parse_with_origin(BUILTIN_CATALOG, BUILTIN_ORIGIN)
}

/// Read a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = parse_with_origin(&contents, &path.display().to_string())?;
    info!(
        path = %path.display(),
        procedures = catalog.len(),
        reports = catalog.reports().len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse catalog TOML text.
pub fn parse_catalog(contents: &str) -> Result<Catalog, CatalogError> {
    parse_with_origin(contents, "<input>")
}

fn parse_with_origin(contents: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(contents).map_err(|e| CatalogError::Toml {
        origin: origin.to_string(),
        source: e,
    })?;
    let mut seen = BTreeSet::new();
    for procedure in &file.procedures {
        if !seen.insert(procedure.name.as_str()) {
            return Err(CatalogError::DuplicateProcedure {
                name: procedure.name.clone(),
            });
        }
    }
    debug!(
        origin,
        procedures = file.procedures.len(),
        reports = file.reports.len(),
        "parsed catalog"
    );
    Ok(Catalog::new(file.procedures, file.reports))
}
