//! The UI renders the application state into sidebar and document panes.
//!
//! The draw function dispatches based on the current view (file list or
//! reader). The reader view pairs a section sidebar, whose highlight follows
//! the tracker's emissions, with a raw-text document pane positioned at the
//! viewport's scroll offset.

use crate::app_state::{AppState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Rows reserved for the help bar, including its borders.
const HELP_ROWS: u16 = 3;

#[must_use]
/// Rows available to the document pane for a terminal of `total_rows`,
/// accounting for the help bar and the pane borders.
///
/// The viewport must be kept in step with this so that band intersections
/// are computed against what is actually on screen.
pub fn pane_height(total_rows: u16) -> usize {
    usize::from(total_rows.saturating_sub(HELP_ROWS).saturating_sub(2))
}

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    match app.current_view {
        View::FileList => draw_file_list(f, app),
        View::Reader => draw_reader(f, app),
    }
}

fn draw_file_list(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HELP_ROWS)])
        .split(f.area());

    let items: Vec<ListItem> = app
        .files
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let style = if i == app.current_file_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(format!("📄 {}", file.display())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Files ({})", app.files.len())),
    );
    f.render_widget(list, chunks[0]);

    let help = Paragraph::new("↑/↓: Navigate | Enter: Open | q: Quit")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn draw_reader(f: &mut Frame, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HELP_ROWS)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(rows[0]);

    draw_sidebar(f, app, panes[0]);
    draw_document(f, app, panes[1]);

    let help_text = if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        "↑/↓: Scroll | PgUp/PgDn: Page | n/p: Section | Home/End: Edge | q: Quit".to_string()
    };
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, rows[1]);
}

fn draw_sidebar(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let active = app.active_index();

    let items: Vec<ListItem> = app
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let indent = "  ".repeat(section.level.saturating_sub(1));
            let line = Line::from(vec![
                Span::raw(indent),
                Span::raw(section.title.clone()),
            ]);
            let style = if Some(i) == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = match active.and_then(|i| app.sections.get(i)) {
        Some(section) => format!("Sections · {}", section.id),
        None => "Sections".to_string(),
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_document(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let offset = app.viewport.offset();
    let visible: Vec<Line> = app
        .lines
        .iter()
        .skip(offset)
        .take(app.viewport.height())
        .map(|l| Line::from(l.as_str()))
        .collect();

    let title = match app.files.get(app.current_file_index) {
        Some(path) => format!("{} · line {}", path.display(), offset + 1),
        None => format!("line {}", offset + 1),
    };

    let document =
        Paragraph::new(visible).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(document, area);
}
