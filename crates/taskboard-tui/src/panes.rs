//! Status list panes
//!
//! Each pane owns the subset of projects assigned to its status. A pane
//! wires itself to the store once at startup via `configure`, then
//! `render` draws purely from its own assigned state. The listener
//! captures the pane's shared assignment cell, so the receiver is fixed
//! at registration time no matter how the store invokes it.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use taskboard_core::prelude::{Project, ProjectStatus, ProjectStore};

/// A board pane: something that wires itself to the store and can draw
/// itself into a frame region
pub trait BoardPane {
    /// Register this pane's change listener with the store
    fn configure(&mut self, store: &mut ProjectStore);

    /// Draw the pane into the given area
    fn render(&self, frame: &mut Frame, area: Rect);
}

/// Bordered block with the pane's title, shared by every pane
///
/// The block owns its title, so callers may pass a temporary.
pub(crate) fn titled_block(title: &str) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(title.to_string())
}

/// One status category's project list
pub struct ProjectListPane {
    status: ProjectStatus,
    assigned: Rc<RefCell<Vec<Project>>>,
}

impl ProjectListPane {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn title(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Projects currently assigned to this pane
    pub fn assigned(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }
}

impl BoardPane for ProjectListPane {
    fn configure(&mut self, store: &mut ProjectStore) {
        let assigned = Rc::clone(&self.assigned);
        let status = self.status;
        store.add_listener(move |snapshot| {
            *assigned.borrow_mut() = snapshot
                .into_iter()
                .filter(|project| project.status == status)
                .collect();
        });
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let assigned = self.assigned.borrow();
        if assigned.is_empty() {
            let empty = Paragraph::new("No projects")
                .style(Style::default().fg(Color::DarkGray))
                .block(titled_block(&self.title()));
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = assigned
            .iter()
            .map(|project| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("{} ({} people)", project.title, project.people),
                        Style::default().fg(Color::Cyan),
                    )),
                    Line::from(format!("  {}", project.description)),
                ])
            })
            .collect();

        let list = List::new(items).block(titled_block(&self.title()));
        frame.render_widget(list, area);
    }
}
