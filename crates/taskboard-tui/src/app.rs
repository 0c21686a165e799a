//! Application state and event handling
//!
//! `App` assembles the board: it owns the one `ProjectStore` instance and
//! hands it to each pane at construction time, so every component shares
//! the same explicitly injected store rather than a global. All input is
//! handled synchronously; a submit runs validation, mutation, and
//! listener notification to completion before the next event is read.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tracing::{debug, info};

use taskboard_core::intake::{self, ALERT_INVALID_INPUT, RawProjectInput};
use taskboard_core::prelude::{Config, ProjectStatus, ProjectStore};

use crate::panes::{BoardPane, ProjectListPane, titled_block};

/// Form field focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    People,
    Description,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Title => Field::People,
            Field::People => Field::Description,
            Field::Description => Field::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Title => Field::Description,
            Field::People => Field::Title,
            Field::Description => Field::People,
        }
    }
}

/// Top-level TUI state
pub struct App {
    config: Config,
    store: ProjectStore,
    active_pane: ProjectListPane,
    finished_pane: ProjectListPane,
    title: String,
    people: String,
    description: String,
    focus: Field,
    alert: Option<&'static str>,
    should_quit: bool,
}

impl App {
    /// Build the board: one store, both panes wired to it
    pub fn new(config: Config) -> Self {
        let mut store = ProjectStore::new();
        let mut active_pane = ProjectListPane::new(ProjectStatus::Active);
        let mut finished_pane = ProjectListPane::new(ProjectStatus::Finished);
        active_pane.configure(&mut store);
        finished_pane.configure(&mut store);

        Self {
            config,
            store,
            active_pane,
            finished_pane,
            title: String::new(),
            people: String::new(),
            description: String::new(),
            focus: Field::Title,
            alert: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Handle one key event
    ///
    /// A pending alert is blocking: the next keypress dismisses it and is
    /// otherwise swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.alert.take().is_some() {
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.focused_input_mut().pop();
            }
            KeyCode::Char(c) => self.focused_input_mut().push(c),
            _ => {}
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Title => &mut self.title,
            Field::People => &mut self.people,
            Field::Description => &mut self.description,
        }
    }

    /// Validate the form and record the project, or raise the alert
    fn submit(&mut self) {
        let input = RawProjectInput::new(
            self.title.as_str(),
            self.people.as_str(),
            self.description.as_str(),
        );
        match intake::validate(&input, &self.config.form) {
            Some(draft) => {
                let project = self
                    .store
                    .add_project(draft.title, draft.description, draft.people);
                info!(id = %project.id, title = %project.title, "project recorded");
                self.clear_inputs();
            }
            None => {
                debug!("form submission rejected, alert raised");
                self.alert = Some(ALERT_INVALID_INPUT);
            }
        }
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.people.clear();
        self.description.clear();
        self.focus = Field::Title;
    }

    /// Draw the whole board
    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(9), // Form
                Constraint::Min(8),    // Lists
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new("Taskboard")
            .style(Style::default().fg(Color::Cyan))
            .block(titled_block("Project Board"));
        frame.render_widget(header, chunks[0]);

        self.draw_form(frame, chunks[1]);

        let list_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        self.active_pane.render(frame, list_chunks[0]);
        self.finished_pane.render(frame, list_chunks[1]);

        let footer = match self.alert {
            Some(alert) => Paragraph::new(alert)
                .style(Style::default().fg(Color::Red))
                .block(titled_block("Alert")),
            None => Paragraph::new("Tab: Next field | Enter: Add project | Esc: Quit")
                .style(Style::default().fg(Color::DarkGray))
                .block(titled_block("")),
        };
        frame.render_widget(footer, chunks[3]);
    }

    fn draw_form(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let fields = [
            (Field::Title, "Title", &self.title),
            (Field::People, "People", &self.people),
            (Field::Description, "Description", &self.description),
        ];
        for (i, (field, label, value)) in fields.into_iter().enumerate() {
            let mut block = titled_block(label);
            if field == self.focus {
                block = block.border_style(Style::default().fg(Color::Cyan));
            }
            frame.render_widget(Paragraph::new(value.as_str()).block(block), rows[i]);
        }
    }
}
