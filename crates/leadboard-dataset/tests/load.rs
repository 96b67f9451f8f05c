use leadboard_core::CoreError;
use leadboard_dataset::error::{DatasetError, DatasetErrorKind};
use leadboard_dataset::Dataset;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r#"[
  {
    "company": "Northwind",
    "url": "https://northwind.test",
    "decision_makers": [
      {"name": "Ada Lovelace", "role": "CTO", "linkedin_url": "https://linkedin.test/ada", "email": "ada@northwind.test"},
      {"name": "Alan Turing", "role": "CEO", "linkedin_url": null, "email": ""}
    ],
    "head_of_data": {"name": "Ada Lovelace", "role": "CTO", "linkedin_url": "https://linkedin.test/ada"}
  },
  {"company": "Zeta", "decision_makers": null, "head_of_data": null},
  {"company": "Contoso"}
]"#;

#[test]
fn open_loads_leads_in_file_order() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.json");
    fs::write(&path, SAMPLE).expect("write dataset");

    let dataset = Dataset::open(&path).expect("open dataset");
    assert_eq!(dataset.len(), 3);
    let names: Vec<&str> = dataset
        .leads()
        .iter()
        .map(|lead| lead.company.as_str())
        .collect();
    assert_eq!(names, vec!["Northwind", "Zeta", "Contoso"]);

    let northwind = &dataset.leads()[0];
    assert_eq!(northwind.decision_maker_count(), 2);
    assert_eq!(northwind.normalized_contacts().len(), 2);
    assert_eq!(northwind.decision_makers[1].valid_email(), None);

    let zeta = &dataset.leads()[1];
    assert!(zeta.decision_makers.is_empty());
    assert!(!zeta.has_head_of_data());
}

#[test]
fn find_company_ignores_case() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.json");
    fs::write(&path, SAMPLE).expect("write dataset");

    let dataset = Dataset::open(&path).expect("open dataset");
    let found = dataset.find_company("  northWIND ").expect("lead");
    assert_eq!(found.company, "Northwind");
    assert!(dataset.find_company("Fabrikam").is_none());
}

#[test]
fn open_missing_file_is_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let err = Dataset::open(&temp.path().join("missing.json")).unwrap_err();
    assert_eq!(err.kind(), DatasetErrorKind::NotFound);
}

#[test]
fn open_rejects_malformed_json() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.json");
    fs::write(&path, "{\"company\": ").expect("write dataset");
    let err = Dataset::open(&path).unwrap_err();
    assert_eq!(err.kind(), DatasetErrorKind::Parse);
}

#[test]
fn open_rejects_lead_without_company() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.json");
    fs::write(&path, r#"[{"company": "Ok"}, {"url": "https://nameless.test"}]"#)
        .expect("write dataset");
    let err = Dataset::open(&path).unwrap_err();
    assert_eq!(err.kind(), DatasetErrorKind::Parse);
}

#[test]
fn open_rejects_blank_company() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.json");
    fs::write(&path, r#"[{"company": "Ok"}, {"company": "   "}]"#).expect("write dataset");
    let err = Dataset::open(&path).unwrap_err();
    match err {
        DatasetError::InvalidLead { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, CoreError::EmptyCompany);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_array_is_an_empty_dataset() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("leads.json");
    fs::write(&path, "[]").expect("write dataset");
    let dataset = Dataset::open(&path).expect("open dataset");
    assert!(dataset.is_empty());
}
