//! JSON section manifests from external content pipelines.
//!
//! Some deployments do not parse their documents here at all: an upstream
//! pipeline already knows the section structure and ships it as a JSON tree.
//! This module loads that manifest, checks it for duplicate ids, and turns
//! its entries into the same [`Section`]s the tree-sitter path produces, so
//! the rest of the crate never cares where sections came from.

use crate::section::{link_hierarchy, Section};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug)]
/// Serialisable ordered list of sections for one document.
pub struct SectionManifest {
    /// Sections in document order.
    pub sections: Vec<ManifestEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// One section as described by the upstream pipeline.
pub struct ManifestEntry {
    /// Stable identifier, unique within the manifest.
    pub id: String,
    /// Section heading text.
    pub title: String,
    /// Nesting depth in the document hierarchy (1 for top-level).
    #[serde(default = "default_level")]
    pub level: usize,
    /// Line where the section begins (0-based).
    pub line_start: usize,
    /// Line where the next section begins or the file ends.
    pub line_end: usize,
}

fn default_level() -> usize {
    1
}

impl SectionManifest {
    /// Loads and validates a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains duplicate section ids.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> io::Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.sections {
            if !seen.insert(entry.id.as_str()) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("duplicate section id in manifest: {}", entry.id),
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    /// Converts manifest entries to sections, attributed to `file_path` and
    /// with hierarchy links derived from the level sequence.
    pub fn into_sections(self, file_path: &str) -> Vec<Section> {
        let mut sections: Vec<Section> = self
            .sections
            .into_iter()
            .map(|entry| Section {
                id: entry.id,
                title: entry.title,
                level: entry.level,
                line_start: entry.line_start,
                line_end: entry.line_end,
                file_path: file_path.to_string(),
                parent_index: None,
                children_indices: Vec::new(),
            })
            .collect();

        link_hierarchy(&mut sections);
        sections
    }
}

#[cfg(test)]
#[path = "tests/manifest.rs"]
mod tests;
