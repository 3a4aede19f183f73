//! The core state machine bridging document sections and the scroll tracker.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated
//! as the user scrolls and switches files. We hold the loaded document, the
//! viewport over it, and the section tracker together here so that every
//! scroll key follows the same path: move the viewport, report visibility
//! transitions, note the scroll for the throttle, and let the tracker's
//! emissions drive the sidebar highlight.

use crate::section::Section;
use crate::tracker::{SectionTracker, TrackerOptions};
use crate::viewport::{Band, DocumentViewport};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(PartialEq)]
/// Determines navigation scope and quit behavior based on project size.
pub enum FileMode {
    /// Single-file mode quits directly to shell.
    Single,
    /// Multi-file mode returns to file list before quitting.
    Multi,
}

#[derive(PartialEq)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Displays available files for multi-file projects.
    FileList,
    /// Shows the document pane with the section sidebar.
    Reader,
}

/// Bridges the loaded document, the viewport, and the section tracker.
pub struct AppState {
    /// Sections of the currently loaded document.
    pub sections: Vec<Section>,
    /// Raw lines of the currently loaded document.
    pub lines: Vec<String>,
    /// File paths available in multi-file mode.
    pub files: Vec<PathBuf>,
    /// Selected file in the file list view.
    pub current_file_index: usize,
    /// Controls navigation behavior and file list visibility.
    pub file_mode: FileMode,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Scroll window over the document, source of visibility and geometry.
    pub viewport: DocumentViewport,
    /// Decides which section the sidebar highlights.
    pub tracker: SectionTracker,
    /// Most recently emitted active section id.
    pub active_id: Option<String>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Tracker options re-applied on every reconfiguration.
    options: TrackerOptions,
}

impl AppState {
    #[must_use]
    /// Initialises application state and determines file mode.
    ///
    /// Single-file projects skip the file list and quit directly to shell,
    /// while multi-file projects show a file selector and return to it on
    /// 'q'. No document is loaded yet; call [`load_document`] or
    /// [`open_current_file`] next.
    ///
    /// [`load_document`]: Self::load_document
    /// [`open_current_file`]: Self::open_current_file
    pub fn new(files: Vec<PathBuf>, options: TrackerOptions, band: Band, height: usize) -> Self {
        let file_mode = if files.len() == 1 {
            FileMode::Single
        } else {
            FileMode::Multi
        };
        let current_view = if file_mode == FileMode::Single {
            View::Reader
        } else {
            View::FileList
        };

        Self {
            sections: Vec::new(),
            lines: Vec::new(),
            files,
            current_file_index: 0,
            file_mode,
            current_view,
            viewport: DocumentViewport::new(height, band),
            tracker: SectionTracker::new(options),
            active_id: None,
            message: None,
            options,
        }
    }

    /// Replaces the loaded document and reconfigures tracking for it.
    ///
    /// The viewport returns to the top and forgets prior intersection state;
    /// the tracker is configured with the new ids in section order. Nothing
    /// is observed until the next [`layout_committed`](Self::layout_committed)
    /// reports the drawn layout.
    pub fn load_document(&mut self, lines: Vec<String>, sections: Vec<Section>) {
        let ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
        self.lines = lines;
        self.sections = sections;
        self.viewport.reset();
        self.viewport.scroll_to(0, self.lines.len());
        self.tracker.configure(&ids, self.options);
        self.active_id = None;
    }

    /// Reads the selected file from disk and loads it with the given
    /// sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn open_current_file(&mut self, sections: Vec<Section>) -> io::Result<()> {
        let path = &self.files[self.current_file_index];
        let contents = fs::read_to_string(path)?;
        let lines = contents.lines().map(str::to_string).collect();
        self.load_document(lines, sections);
        self.current_view = View::Reader;
        Ok(())
    }

    /// Reports the drawn layout to the tracker.
    ///
    /// This is the explicit "layout committed" signal: the viewport diffs
    /// band intersections against its last report and each transition
    /// becomes a tracker visibility event. Emissions update the highlight.
    pub fn layout_committed(&mut self) {
        let transitions = self.viewport.sync(&self.sections);
        let geometry = self.viewport.geometry(&self.sections);
        for (id, is_visible) in transitions {
            if let Some(active) = self.tracker.set_visibility(&id, is_visible, &geometry) {
                self.active_id = Some(active);
            }
        }
    }

    /// Scrolls the document by a signed number of rows at `now` ms.
    ///
    /// Visibility transitions fire immediately; the geometry sample itself
    /// is throttled and drained later by [`tick`](Self::tick).
    pub fn scroll(&mut self, delta: isize, now: u64) {
        self.viewport.scroll_by(delta, self.lines.len());
        self.tracker.note_scroll(now);
        self.layout_committed();
    }

    /// Scrolls by one viewport height in the given direction at `now` ms.
    pub fn page(&mut self, down: bool, now: u64) {
        let rows = isize::try_from(self.viewport.height()).unwrap_or(isize::MAX);
        self.scroll(if down { rows } else { -rows }, now);
    }

    /// Jumps to the top or bottom of the document at `now` ms.
    pub fn jump_to_edge(&mut self, bottom: bool, now: u64) {
        let target = if bottom {
            self.lines.len().saturating_sub(1)
        } else {
            0
        };
        self.viewport.scroll_to(target, self.lines.len());
        self.tracker.note_scroll(now);
        self.layout_committed();
    }

    /// Jumps so the next (or previous) section's heading sits at the top of
    /// the pane, the sidebar-click analogue of the original host.
    pub fn jump_to_neighbour_section(&mut self, forward: bool, now: u64) {
        let Some(current) = self.active_index() else {
            return;
        };
        let target = if forward {
            current + 1
        } else {
            current.saturating_sub(1)
        };
        if let Some(section) = self.sections.get(target) {
            self.viewport.scroll_to(section.line_start, self.lines.len());
            self.tracker.note_scroll(now);
            self.layout_committed();
        }
    }

    /// Adopts a new document pane height after a terminal resize.
    pub fn resize(&mut self, height: usize) {
        self.viewport.resize(height);
        self.layout_committed();
    }

    /// Drains a due throttled geometry sample at `now` ms.
    pub fn tick(&mut self, now: u64) {
        let geometry = self.viewport.geometry(&self.sections);
        if let Some(active) = self.tracker.poll(now, &geometry) {
            self.active_id = Some(active);
        }
    }

    #[must_use]
    /// Milliseconds until the tracker's pending sample, for the event loop
    /// wait.
    pub fn next_deadline_in(&self, now: u64) -> Option<u64> {
        self.tracker.next_deadline_in(now)
    }

    #[must_use]
    /// Index of the currently highlighted section, if any.
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active_id.as_deref()?;
        self.sections.iter().position(|s| s.id == active)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
