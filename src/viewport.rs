//! The observation band and intersection source for the document pane.
//!
//! The tracker wants two signals the original host got from the browser: a
//! per-section "now intersecting the observation band" transition, and an
//! on-demand top-edge offset. In a terminal both derive from the same pair
//! of numbers, the scroll offset and the pane height, so this module owns
//! those and diffs intersection state on every change rather than
//! re-reporting it wholesale.

use crate::section::Section;
use crate::tracker::Geometry;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
/// Margins shrinking (negative) or growing (positive) the viewport into the
/// observation band, in rows.
///
/// `bottom_percent`, when set, overrides `bottom_margin` with a percentage
/// of the current viewport height, for deployments that want the band to
/// scale with the window rather than stay a fixed number of rows.
pub struct Band {
    /// Adjustment to the band's top edge relative to the viewport top.
    pub top_margin: f64,
    /// Adjustment to the band's bottom edge relative to the viewport bottom.
    pub bottom_margin: f64,
    /// Bottom adjustment as a percentage of viewport height (e.g. -50.0).
    pub bottom_percent: Option<f64>,
}

impl Default for Band {
    fn default() -> Self {
        Self {
            top_margin: 0.0,
            bottom_margin: -2.0,
            bottom_percent: None,
        }
    }
}

impl Band {
    /// Band edges as distances from the viewport top, for a viewport of the
    /// given height. A negative margin insets the corresponding edge.
    fn edges(&self, height: f64) -> (f64, f64) {
        let bottom_margin = self
            .bottom_percent
            .map_or(self.bottom_margin, |p| height * p / 100.0);
        (-self.top_margin, height + bottom_margin)
    }
}

/// Scroll window over a document, reporting band intersections and geometry.
///
/// Tracks the last intersection state it reported per section id so that
/// [`sync`](Self::sync) yields transitions only, mirroring how the original
/// host's intersection source fired on changes rather than every frame.
pub struct DocumentViewport {
    /// First document line shown in the pane (0-based).
    offset: usize,
    /// Rows available to the document pane.
    height: usize,
    /// Observation band applied to the viewport.
    band: Band,
    /// Last reported intersection state per section id.
    last: HashMap<String, bool>,
}

#[allow(clippy::cast_precision_loss)]
fn rows(n: usize) -> f64 {
    n as f64
}

impl DocumentViewport {
    #[must_use]
    /// Creates a viewport at the top of the document.
    pub fn new(height: usize, band: Band) -> Self {
        Self {
            offset: 0,
            height,
            band,
            last: HashMap::new(),
        }
    }

    #[must_use]
    /// Current scroll offset (first visible document line).
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    /// Rows available to the document pane.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Scrolls by a signed number of rows, clamped to the document.
    pub fn scroll_by(&mut self, delta: isize, document_lines: usize) {
        let max = document_lines.saturating_sub(1);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    /// Jumps to an absolute offset, clamped to the document.
    pub fn scroll_to(&mut self, offset: usize, document_lines: usize) {
        self.offset = offset.min(document_lines.saturating_sub(1));
    }

    /// Adopts a new pane height after a terminal resize.
    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }

    /// Forgets all previously reported intersection state.
    ///
    /// Called when the tracked section list is replaced, so the next
    /// [`sync`](Self::sync) re-reports every section from scratch.
    pub fn reset(&mut self) {
        self.last.clear();
    }

    /// Diffs band intersection for each section against the last report.
    ///
    /// Returns `(id, is_visible)` transitions in section order. A section
    /// intersects when any part of its line span overlaps the observation
    /// band. The first sync after a [`reset`](Self::reset) reports every
    /// section, the committed-layout notification the tracker expects in
    /// place of a settling delay.
    pub fn sync(&mut self, sections: &[Section]) -> Vec<(String, bool)> {
        let (band_top, band_bottom) = self.band.edges(rows(self.height));
        let mut transitions = Vec::new();

        for section in sections {
            let top = rows(section.line_start) - rows(self.offset);
            let bottom = rows(section.line_end) - rows(self.offset);
            let intersects = top < band_bottom && bottom > band_top;

            if self.last.get(&section.id) != Some(&intersects) {
                self.last.insert(section.id.clone(), intersects);
                transitions.push((section.id.clone(), intersects));
            }
        }

        transitions
    }

    #[must_use]
    /// Borrows this viewport together with a section list as a [`Geometry`]
    /// source for the tracker.
    pub fn geometry<'a>(&'a self, sections: &'a [Section]) -> ViewGeometry<'a> {
        ViewGeometry {
            viewport: self,
            sections,
        }
    }
}

/// [`Geometry`] implementation over a viewport and the sections it shows.
pub struct ViewGeometry<'a> {
    viewport: &'a DocumentViewport,
    sections: &'a [Section],
}

impl Geometry for ViewGeometry<'_> {
    fn top_offset(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| rows(s.line_start) - rows(self.viewport.offset))
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
