//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats (markdown, org-mode, restructuredtext, etc.) by providing
//! tree-sitter queries specific to each format.

pub mod markdown;

/// Tree-sitter hooks a document format must provide for section extraction.
pub trait Format {
    /// Tree-sitter grammar for the format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing one node per section heading.
    fn section_query(&self) -> &str;
    /// Query capturing the heading's title text.
    fn title_query(&self) -> &str;
    /// Heading depth for a captured heading node, 1 for top-level.
    fn heading_level(&self, node: &tree_sitter::Node<'_>, source: &str) -> usize;
}
