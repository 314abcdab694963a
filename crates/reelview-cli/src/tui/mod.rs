use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use reelview_core::{CatalogView, Error as ViewError, FilterOutcome, OptionControl};

pub mod panels;
pub mod table;

/// Which region receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Years,
    Genres,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Search => Self::Years,
            Self::Years => Self::Genres,
            Self::Genres => Self::Table,
            Self::Table => Self::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Search => Self::Table,
            Self::Years => Self::Search,
            Self::Genres => Self::Years,
            Self::Table => Self::Genres,
        }
    }
}

/// Application state for the catalog TUI.
#[derive(Debug)]
pub struct App {
    pub view: CatalogView,
    pub focus: Focus,
    pub year_cursor: usize,
    pub genre_cursor: usize,
    pub table_offset: usize, // First visible row in the table
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(view: CatalogView) -> Self {
        Self {
            view,
            focus: Focus::default(),
            year_cursor: 0,
            genre_cursor: 0,
            table_offset: 0,
            status: String::new(),
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            code => match self.focus {
                Focus::Search => self.handle_search_key(code),
                Focus::Years => self.handle_year_key(code),
                Focus::Genres => self.handle_genre_key(code),
                Focus::Table => self.handle_table_key(code),
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => {
                let mut term = self.view.search_term().to_string();
                term.push(c);
                self.view.set_search_term(term);
            }
            KeyCode::Backspace => {
                let mut term = self.view.search_term().to_string();
                term.pop();
                self.view.set_search_term(term);
            }
            KeyCode::Enter => {
                let outcome = self.view.search();
                self.report(&outcome);
            }
            _ => {}
        }
    }

    fn handle_year_key(&mut self, key: KeyCode) {
        let count = self.view.year_controls().len();
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.year_cursor + 1 < count {
                    self.year_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.year_cursor = self.year_cursor.saturating_sub(1);
            }
            KeyCode::Char(' ') => {
                if let Some(year) = value_at(self.view.year_controls(), self.year_cursor) {
                    if let Err(e) = self.view.select_year(&year) {
                        self.status = e.to_string();
                    }
                }
            }
            KeyCode::Enter => match self.view.filter_by_year() {
                Ok(outcome) => self.report(&outcome),
                Err(ViewError::NoYearSelected) => {
                    self.status = "Select a year with Space first".to_string();
                }
                Err(e) => self.status = e.to_string(),
            },
            _ => {}
        }
    }

    fn handle_genre_key(&mut self, key: KeyCode) {
        let count = self.view.genre_controls().len();
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.genre_cursor + 1 < count {
                    self.genre_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.genre_cursor = self.genre_cursor.saturating_sub(1);
            }
            KeyCode::Char(' ') => {
                if let Some(genre) = value_at(self.view.genre_controls(), self.genre_cursor) {
                    if let Err(e) = self.view.toggle_genre(&genre) {
                        self.status = e.to_string();
                    }
                }
            }
            KeyCode::Enter => {
                let outcome = self.view.filter_by_genres();
                self.report(&outcome);
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyCode) {
        let count = self.view.rows().len();
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.table_offset + 1 < count {
                    self.table_offset += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.table_offset = self.table_offset.saturating_sub(1);
            }
            KeyCode::Home | KeyCode::Char('g') => self.table_offset = 0,
            _ => {}
        }
    }

    fn report(&mut self, outcome: &FilterOutcome) {
        self.status = format!(
            "{} of {} movies highlighted ({})",
            outcome.matched.len(),
            self.view.rows().len(),
            outcome.filter
        );
        // Bring the first match into view
        if let Some(first) = self.view.rows().iter().position(|row| row.highlighted) {
            self.table_offset = first;
        }
    }
}

fn value_at(controls: &[OptionControl], cursor: usize) -> Option<String> {
    controls.get(cursor).map(|control| control.value.clone())
}

/// Run the catalog TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub fn run_tui(view: CatalogView) -> Result<()> {
    let app = App::new(view);

    if app.view.rows().is_empty() {
        println!("The catalog is empty.");
        println!("Point 'data_path' at a JSON file with movie records.");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop, capturing any error so we can restore the terminal
    let result = run_event_loop(&mut terminal, app);

    // Restore terminal regardless of success or failure
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Table and filter panels
            Constraint::Length(3), // Status / help bar
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(32)])
        .split(chunks[0]);

    table::render(frame, app, columns[0]);
    panels::render_filters(frame, app, columns[1]);
    panels::render_status(frame, app, chunks[1]);
}
