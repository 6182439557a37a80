use std::fs;

use spdoc_catalog::{CatalogError, load_builtin_catalog, load_catalog, parse_catalog};
use spdoc_model::ProcedureType;

#[test]
fn builtin_catalog_has_reference_order() {
    let catalog = load_builtin_catalog().expect("built-in catalog");
    let names: Vec<&str> = catalog
        .procedures()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "SP_Report_GetAllExams",
            "SP_Report_ExamQuestions",
            "SP_Report_GetAllStudents",
            "SP_Report_StudentGrades",
            "SP_Report_GetExamsByStudent",
            "SP_Report_StudentExamComparison",
            "SP_Report_GetAllBranches",
            "SP_Report_StudentsByBranch",
            "SP_Report_GetAllInstructors",
            "SP_Report_StudentsByInstructor",
            "SP_Report_GetAllCourses",
            "SP_Report_TopicsByCourse",
        ]
    );
    assert!(
        catalog
            .procedures()
            .iter()
            .all(|p| p.kind == ProcedureType::Select)
    );
}

#[test]
fn builtin_examples_only_on_parameterized_procedures() {
    let catalog = load_builtin_catalog().expect("built-in catalog");
    for procedure in catalog.procedures() {
        let parameterless = procedure.params == "No Parameters";
        assert_eq!(
            procedure.example.is_none(),
            parameterless,
            "{}",
            procedure.name
        );
    }
}

#[test]
fn builtin_reports_reference_rdl_files() {
    let catalog = load_builtin_catalog().expect("built-in catalog");
    assert_eq!(catalog.reports().len(), 6);
    assert!(catalog.reports().iter().all(|r| r.file.ends_with(".rdl")));
    assert_eq!(
        catalog.get("SP_Report_StudentGrades").map(|p| p.params.as_str()),
        Some("@StudentId INT")
    );
}

#[test]
fn parse_rejects_duplicate_names() {
    let text = r#"
[[procedure]]
name = "SP_A"
params = "No Parameters"
type = "select"
category = "Select & Search"
description = "first"
returns = "Id"
usage = "Used by: a.rdl"

[[procedure]]
name = "SP_A"
params = "@Id INT"
type = "delete"
category = "Delete"
description = "second"
returns = "Rows"
usage = "Used by: b.rdl"
"#;
    let err = parse_catalog(text).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateProcedure { ref name } if name == "SP_A"));
    assert_eq!(err.to_string(), "duplicate procedure name in catalog: SP_A");
}

#[test]
fn parse_rejects_unknown_type() {
    let text = r#"
[[procedure]]
name = "SP_A"
params = "No Parameters"
type = "merge"
category = "Other"
description = "d"
returns = "r"
usage = "u"
"#;
    assert!(matches!(
        parse_catalog(text),
        Err(CatalogError::Toml { .. })
    ));
}

#[test]
fn parse_allows_missing_reports() {
    let text = r#"
[[procedure]]
name = "SP_Insert_Student"
params = "@Name NVARCHAR(100)"
type = "insert"
category = "Insert"
description = "Adds a student."
returns = "New Id"
usage = "Used by: admin screens"
example = "EXEC SP_Insert_Student @Name = 'Mona'"
"#;
    let catalog = parse_catalog(text).expect("parse catalog");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.reports().is_empty());
    assert_eq!(catalog.procedures()[0].kind, ProcedureType::Insert);
}

#[test]
fn load_from_file_and_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, spdoc_catalog::BUILTIN_CATALOG).expect("write catalog");
    let catalog = load_catalog(&path).expect("load catalog");
    assert_eq!(catalog.len(), 12);

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        load_catalog(&missing),
        Err(CatalogError::Io { .. })
    ));
}
