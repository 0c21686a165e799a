//! Observable in-memory project store
//!
//! [`ProjectStore`] is the single source of truth for the project
//! collection. It is constructed once by whatever assembles the UI and
//! passed by reference to every component that needs it; there is no
//! global instance. Listeners register for the process lifetime and are
//! notified synchronously, in registration order, with an independent
//! snapshot of the collection after every mutation. The collection only
//! grows: no removal, update, or status-transition operation exists.

use tracing::debug;

use crate::project::Project;

/// A registered change listener, invoked with a full snapshot
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Ordered project collection with synchronous change notification
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener
    ///
    /// The listener is called with a snapshot of all projects, in
    /// insertion order, on every subsequent mutation. Registration is
    /// permanent; there is no unsubscribe.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Create an active project, append it, and notify all listeners
    ///
    /// Notification happens synchronously before this returns. Each
    /// listener receives its own copy of the collection, so no listener
    /// can observe or cause mutation through the snapshot. Returns a
    /// clone of the stored project.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Project {
        let project = Project::new(title, description, people);
        debug!(id = %project.id, title = %project.title, "project added");
        self.projects.push(project.clone());
        self.notify();
        project
    }

    /// Snapshot of all projects in insertion order
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Number of projects in the store
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// True if no project has been added yet
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(self.projects.clone());
        }
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
