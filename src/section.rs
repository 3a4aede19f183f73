//! Section representation for tree-sitter parsed documents.
//!
//! A section is a logical content block identified by a stable id, typically
//! corresponding to a heading in markdown. Sections track their position in
//! the document tree through parent/child relationships and carry the line
//! coordinates the viewport turns into on-screen geometry.

#[derive(Clone)]
/// Logical content block with a stable id and document-line coordinates.
pub struct Section {
    /// Stable identifier, unique within the loaded document set.
    pub id: String,
    /// Section heading text without markup symbols.
    pub title: String,
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: usize,
    /// Line where the section heading sits (0-based, the geometry anchor).
    pub line_start: usize,
    /// Line where the next section begins or the file ends.
    pub line_end: usize,
    /// Source file containing this section.
    pub file_path: String,
    /// Index of the containing section in the hierarchy.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections.
    pub children_indices: Vec<usize>,
}

#[must_use]
/// Derives a stable anchor id from a heading title, the way rendered
/// documents derive heading anchors: lowercased, alphanumerics kept, runs of
/// anything else collapsed to single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Makes `slug` unique against `taken` by appending `-1`, `-2`, … when
/// needed, recording the result.
pub fn dedup_slug(slug: String, taken: &mut Vec<String>) -> String {
    let mut candidate = slug.clone();
    let mut suffix = 0usize;
    while taken.contains(&candidate) {
        suffix += 1;
        candidate = format!("{slug}-{suffix}");
    }
    taken.push(candidate.clone());
    candidate
}

/// Links parent/child indices from the heading level sequence.
///
/// A section's parent is the nearest preceding section with a smaller level;
/// existing links are overwritten.
pub fn link_hierarchy(sections: &mut [Section]) {
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..sections.len() {
        let level = sections[i].level;
        while stack
            .last()
            .is_some_and(|&parent| sections[parent].level >= level)
        {
            stack.pop();
        }
        if let Some(&parent) = stack.last() {
            sections[i].parent_index = Some(parent);
            sections[parent].children_indices.push(i);
        }
        stack.push(i);
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
