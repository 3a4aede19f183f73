use super::SectionManifest;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_manifest(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}

#[test]
fn test_load_and_convert_manifest() {
    let file = write_manifest(
        r#"{
            "sections": [
                {"id": "intro", "title": "Intro", "level": 1, "line_start": 0, "line_end": 10},
                {"id": "setup", "title": "Setup", "level": 2, "line_start": 10, "line_end": 20},
                {"id": "usage", "title": "Usage", "level": 1, "line_start": 20, "line_end": 30}
            ]
        }"#,
    );

    let manifest = SectionManifest::load(file.path()).unwrap();
    let sections = manifest.into_sections("tutorial.txt");

    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].id, "intro");
    assert_eq!(sections[0].file_path, "tutorial.txt");
    assert_eq!(sections[1].parent_index, Some(0));
    assert_eq!(sections[0].children_indices, vec![1]);
    assert_eq!(sections[2].parent_index, None);
}

#[test]
fn test_level_defaults_to_top() {
    let file = write_manifest(
        r#"{"sections": [{"id": "a", "title": "A", "line_start": 0, "line_end": 5}]}"#,
    );

    let manifest = SectionManifest::load(file.path()).unwrap();
    assert_eq!(manifest.sections[0].level, 1);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let file = write_manifest(
        r#"{
            "sections": [
                {"id": "a", "title": "A", "line_start": 0, "line_end": 5},
                {"id": "a", "title": "Again", "line_start": 5, "line_end": 9}
            ]
        }"#,
    );

    let err = SectionManifest::load(file.path()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_malformed_json_is_invalid_data() {
    let file = write_manifest("{not json");
    let err = SectionManifest::load(file.path()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
