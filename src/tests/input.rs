use super::{extract_sections, find_documents};
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_extract_sections_from_markdown() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "# Intro\n\nopening words\n\n## Features\n\nbullet points\n\n# Pricing\n\nnumbers\n"
    )
    .unwrap();

    let sections = extract_sections(file.path(), &MarkdownFormat).unwrap();

    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "features", "pricing"]);

    assert_eq!(sections[0].title, "Intro");
    assert_eq!(sections[0].level, 1);
    assert_eq!(sections[1].level, 2);

    // Each section runs from its heading to the next heading or the end.
    assert_eq!(sections[0].line_start, 0);
    assert_eq!(sections[0].line_end, 4);
    assert_eq!(sections[1].line_start, 4);
    assert_eq!(sections[1].line_end, 8);
    assert_eq!(sections[2].line_start, 8);
    assert_eq!(sections[2].line_end, 11);

    assert_eq!(sections[1].parent_index, Some(0));
    assert_eq!(sections[0].children_indices, vec![1]);
    assert_eq!(sections[2].parent_index, None);
}

#[test]
fn test_duplicate_titles_get_distinct_ids() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Setup\n\n## Setup\n\n## Setup\n").unwrap();

    let sections = extract_sections(file.path(), &MarkdownFormat).unwrap();
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["setup", "setup-1", "setup-2"]);
}

#[test]
fn test_headingless_document_yields_no_sections() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "just prose\n\nno headings here\n").unwrap();

    let sections = extract_sections(file.path(), &MarkdownFormat).unwrap();
    assert!(sections.is_empty());
}

#[test]
fn test_find_documents_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.md"), "# B\n").unwrap();
    fs::write(dir.path().join("a.md"), "# A\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "plain\n").unwrap();

    let documents =
        find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();

    let names: Vec<String> = documents
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.md", "b.md"]);
}
