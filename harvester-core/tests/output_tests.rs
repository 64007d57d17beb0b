// Tests for the JSON output files

use harvester_core::HarvestError;
use harvester_core::model::ResourceRecord;
use harvester_core::output::{
    DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_PATH, read_resources, write_resources,
};
use harvester_scanner::ResourceType;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn record(id: &str, title: &str) -> ResourceRecord {
    ResourceRecord {
        id: id.to_string(),
        skill_id: "css".to_string(),
        title: title.to_string(),
        url: "https://www.w3schools.com/css/".to_string(),
        platform: "W3Schools".to_string(),
        resource_type: ResourceType::Docs,
    }
}

#[test]
fn test_write_resources_uses_camel_case_keys_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scraped.json");

    write_resources(&path, &[record("css-scraped-1-0", "CSS Tutorial")]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let expected = r#"[
  {
    "id": "css-scraped-1-0",
    "skillId": "css",
    "title": "CSS Tutorial",
    "url": "https://www.w3schools.com/css/",
    "platform": "W3Schools",
    "type": "docs"
  }
]"#;
    assert_eq!(content, expected);
}

#[test]
fn test_write_resources_keeps_non_ascii_unescaped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scraped.json");

    write_resources(&path, &[record("css-scraped-1-0", "Guía de CSS — Flexbox")]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Guía de CSS — Flexbox"));
    assert!(!content.contains("\\u"));
}

#[test]
fn test_write_resources_overwrites_previous_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scraped.json");

    write_resources(
        &path,
        &[record("css-scraped-1-0", "Old one"), record("css-scraped-1-1", "Old two")],
    )
    .unwrap();
    write_resources(&path, &[record("css-scraped-2-0", "Fresh")]).unwrap();

    let records: Vec<ResourceRecord> = read_resources(&path).unwrap();
    assert_eq!(records, vec![record("css-scraped-2-0", "Fresh")]);
}

#[test]
fn test_write_resources_empty_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scraped.json");

    write_resources::<ResourceRecord>(&path, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_write_resources_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("scraped.json");

    let result = write_resources(&path, &[record("css-scraped-1-0", "CSS Tutorial")]);

    assert!(matches!(result, Err(HarvestError::Io { .. })));
}

#[test]
fn test_read_resources_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let result = read_resources::<ResourceRecord>(&path);

    assert!(matches!(result, Err(HarvestError::MissingFile(_))));
}

#[test]
fn test_read_resources_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"id\": ").unwrap();

    let result = read_resources::<ResourceRecord>(&path);

    assert!(matches!(result, Err(HarvestError::Json { .. })));
}

#[test]
fn test_default_paths_are_anchored_to_the_project() {
    let project_data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../src/data");

    for default in [DEFAULT_OUTPUT_PATH, DEFAULT_CATALOG_PATH] {
        let path = Path::new(default);
        assert!(path.is_absolute(), "{} is relative", default);
        assert_eq!(path.parent(), Some(project_data.as_path()));
    }
    assert!(DEFAULT_OUTPUT_PATH.ends_with("roadmap-resources-scraped.json"));
    assert!(DEFAULT_CATALOG_PATH.ends_with("resources.json"));
}
