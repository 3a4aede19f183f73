//! lodestar: scroll-synced section tracking for tree data.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use lodestar::formats::markdown::MarkdownFormat;
use lodestar::section::Section;
use lodestar::{app_state, config, input, manifest, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "lodestar")]
#[command(about = "Scroll-synced section tracking for tree data", long_about = None)]
struct Args {
    /// Files or directories to read
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Load section structure from a JSON manifest instead of parsing
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let manifest_sections = match args.manifest {
        Some(ref manifest_path) => {
            let [document] = args.paths.as_slice() else {
                eprintln!("--manifest requires exactly one document path");
                return Ok(());
            };
            let loaded = manifest::SectionManifest::load(manifest_path)?;
            Some(loaded.into_sections(&document.to_string_lossy()))
        }
        None => None,
    };

    let documents = if manifest_sections.is_some() {
        args.paths
    } else {
        input::find_documents(args.paths, &cfg.file_extensions)?
    };

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let app = app_state::AppState::new(documents, cfg.tracker_options(), cfg.band(), 0);
    run_tui(app, manifest_sections)
}

fn run_tui(
    mut app: app_state::AppState,
    manifest_sections: Option<Vec<Section>>,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.resize(ui::pane_height(size.height));

    let result = run_app(&mut terminal, &mut app, manifest_sections.as_deref());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Sections for a document: the manifest's when one was supplied, otherwise
/// freshly extracted. Unreadable or unparsable documents yield none.
fn sections_for(path: &Path, manifest_sections: Option<&[Section]>) -> Vec<Section> {
    match manifest_sections {
        Some(sections) => sections.to_vec(),
        None => input::extract_sections(path, &MarkdownFormat).unwrap_or_default(),
    }
}

fn millis_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[allow(clippy::too_many_lines)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    manifest_sections: Option<&[Section]>,
) -> io::Result<()> {
    let start = Instant::now();

    if app.current_view == app_state::View::Reader {
        let sections = sections_for(&app.files[app.current_file_index], manifest_sections);
        app.open_current_file(sections)?;
    }

    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        // The drawn frame is the committed layout the tracker observes.
        app.layout_committed();

        let now = millis_since(start);
        let timeout = app
            .next_deadline_in(now)
            .map_or(Duration::from_millis(250), Duration::from_millis);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match app.current_view {
                    app_state::View::FileList => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Up => {
                            if app.current_file_index > 0 {
                                app.current_file_index -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if app.current_file_index < app.files.len() - 1 {
                                app.current_file_index += 1;
                            }
                        }
                        KeyCode::Enter => {
                            let sections = sections_for(
                                &app.files[app.current_file_index],
                                manifest_sections,
                            );
                            if let Err(e) = app.open_current_file(sections) {
                                app.message = Some(format!("Error opening file: {e}"));
                            }
                        }
                        _ => {}
                    },
                    app_state::View::Reader => {
                        let now = millis_since(start);
                        match key.code {
                            KeyCode::Char('q') => {
                                if app.file_mode == app_state::FileMode::Multi {
                                    app.current_view = app_state::View::FileList;
                                } else {
                                    return Ok(());
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => app.scroll(-1, now),
                            KeyCode::Down | KeyCode::Char('j') => app.scroll(1, now),
                            KeyCode::PageUp => app.page(false, now),
                            KeyCode::PageDown => app.page(true, now),
                            KeyCode::Home => app.jump_to_edge(false, now),
                            KeyCode::End => app.jump_to_edge(true, now),
                            KeyCode::Char('n') => app.jump_to_neighbour_section(true, now),
                            KeyCode::Char('p') => app.jump_to_neighbour_section(false, now),
                            _ => {}
                        }
                    }
                },
                Event::Resize(_, rows) => app.resize(ui::pane_height(rows)),
                _ => {}
            }
        }

        app.tick(millis_since(start));
    }
}
