//! Document discovery and tree-sitter section extraction.
//!
//! Files are gathered from the paths given on the command line (directories
//! are walked recursively, filtered by extension), then each document is
//! parsed with the grammar its [`Format`] provides and its headings become
//! [`Section`]s with stable slug ids, hierarchy links, and the line
//! coordinates the viewport needs for geometry.

use crate::formats::Format;
use crate::section::{dedup_slug, link_hierarchy, slugify, Section};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Collects documents matching the given extensions from files and
/// directories, sorted for a stable presentation order.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        collect(&path, extensions, &mut documents)?;
    }
    documents.sort();
    Ok(documents)
}

fn collect(path: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> io::Result<()> {
    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            collect(&entry?.path(), extensions, out)?;
        }
    } else if matches_extension(path, extensions) {
        out.push(path.to_path_buf());
    }
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

/// Parses a document and extracts its sections in heading order.
///
/// Headings become sections spanning from their own line to the line of the
/// next heading (or the end of the file), with parent/child links derived
/// from heading levels and ids slugified from titles, de-duplicated within
/// the document. A document the grammar cannot parse yields no sections
/// rather than an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn extract_sections(path: &Path, format: &dyn Format) -> io::Result<Vec<Section>> {
    let source = fs::read_to_string(path)?;
    let file_path = path.to_string_lossy().to_string();
    let total_lines = source.lines().count();

    let mut parser = Parser::new();
    if parser.set_language(&format.language()).is_err() {
        return Ok(Vec::new());
    }
    let Some(tree) = parser.parse(&source, None) else {
        return Ok(Vec::new());
    };
    let Ok(query) = Query::new(&format.language(), format.section_query()) else {
        return Ok(Vec::new());
    };
    let Ok(title_query) = Query::new(&format.language(), format.title_query()) else {
        return Ok(Vec::new());
    };

    // One pass to find headings, a second over the collected rows to close
    // each section at the next heading.
    let mut headings: Vec<(usize, usize, String)> = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(found) = matches.next() {
        for capture in found.captures {
            let node = capture.node;
            let level = format.heading_level(&node, &source);
            let title = heading_title(&title_query, node, &source);
            headings.push((node.start_position().row, level, title));
        }
    }

    let mut sections = Vec::with_capacity(headings.len());
    let mut taken = Vec::new();
    for (i, (row, level, title)) in headings.iter().enumerate() {
        let line_end = headings
            .get(i + 1)
            .map_or(total_lines, |(next_row, _, _)| *next_row);
        sections.push(Section {
            id: dedup_slug(slugify(title), &mut taken),
            title: title.clone(),
            level: *level,
            line_start: *row,
            line_end,
            file_path: file_path.clone(),
            parent_index: None,
            children_indices: Vec::new(),
        });
    }
    link_hierarchy(&mut sections);

    Ok(sections)
}

fn heading_title(title_query: &Query, node: tree_sitter::Node<'_>, source: &str) -> String {
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(title_query, node, source.as_bytes());
    while let Some(found) = matches.next() {
        if let Some(capture) = found.captures.first() {
            if let Ok(text) = capture.node.utf8_text(source.as_bytes()) {
                return text.trim().to_string();
            }
        }
    }
    // Marker-only headings ("##" with no text) still need a label.
    String::from("untitled")
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
