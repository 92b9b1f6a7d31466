//! Tests for output module

use super::*;
use crate::documents::{
    DocumentBuilder, ADDRESS_FILE, PROPERTY_ROOT_FILE, RELATIONSHIP_FILE, ROOT_LABEL_FILE,
};
use crate::types::Row;
use std::fs;
use tempfile::tempdir;

fn documents(folder_id: &str) -> crate::documents::ParcelDocuments {
    let row: Row = [
        ("parcel_id", folder_id),
        ("Address", "456 Oak Ave 33901"),
        ("County", "Lee"),
    ]
    .into_iter()
    .collect();
    DocumentBuilder::new().build(&row, folder_id)
}

#[test]
fn test_ensure_folder_creates_once() {
    let dir = tempdir().unwrap();
    let writer = ParcelWriter::new(dir.path().join("output"));

    let path = writer.ensure_folder("123").unwrap();
    assert!(path.is_dir());
    assert_eq!(path, dir.path().join("output").join("123"));

    fs::write(path.join("keep.txt"), "x").unwrap();
    let again = writer.ensure_folder("123").unwrap();
    assert_eq!(again, path);
    assert!(path.join("keep.txt").is_file());
}

#[test]
fn test_ensure_folder_rejects_empty_name() {
    let dir = tempdir().unwrap();
    let writer = ParcelWriter::new(dir.path());
    assert!(writer.ensure_folder("").is_err());
}

#[test]
fn test_write_creates_four_files() {
    let dir = tempdir().unwrap();
    let mut writer = ParcelWriter::new(dir.path());

    let folder = writer.write(&documents("42")).unwrap();

    let mut names: Vec<_> = fs::read_dir(&folder)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();

    let mut expected = vec![
        ADDRESS_FILE,
        PROPERTY_ROOT_FILE,
        RELATIONSHIP_FILE,
        ROOT_LABEL_FILE,
    ];
    expected.sort_unstable();
    assert_eq!(names, expected);
    assert_eq!(writer.files_written(), 4);
}

#[test]
fn test_write_contents() {
    let dir = tempdir().unwrap();
    let mut writer = ParcelWriter::new(dir.path());
    let folder = writer.write(&documents("42")).unwrap();

    let address: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(folder.join(ADDRESS_FILE)).unwrap()).unwrap();
    assert_eq!(address["full_address"], "456 Oak Ave, FL");
    assert_eq!(address["postal_code"], "33901");
    assert_eq!(address["county_jurisdiction"], "Lee");
    assert!(address["source_http_request"].is_null());

    let text = fs::read_to_string(folder.join(PROPERTY_ROOT_FILE)).unwrap();
    assert!(text.starts_with("{\n  \"parcel_id\": \"42\""));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_write_overwrites_existing_files() {
    let dir = tempdir().unwrap();
    let mut writer = ParcelWriter::new(dir.path());
    let folder = writer.folder_path("42");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join(PROPERTY_ROOT_FILE), "stale contents that are longer").unwrap();

    writer.write(&documents("42")).unwrap();

    let text = fs::read_to_string(folder.join(PROPERTY_ROOT_FILE)).unwrap();
    assert!(!text.contains("stale"));
    serde_json::from_str::<serde_json::Value>(&text).unwrap();
}

#[test]
fn test_write_is_idempotent() {
    let dir = tempdir().unwrap();
    let mut writer = ParcelWriter::new(dir.path());
    let docs = documents("42");

    let folder = writer.write(&docs).unwrap();
    let first = fs::read(folder.join(ADDRESS_FILE)).unwrap();
    writer.write(&docs).unwrap();
    let second = fs::read(folder.join(ADDRESS_FILE)).unwrap();

    assert_eq!(first, second);
}
