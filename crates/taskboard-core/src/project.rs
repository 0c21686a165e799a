//! Project domain model
//!
//! A project is created from validated form input and never changes after
//! construction. There is no update, deletion, or status-transition path:
//! every project is born `Active` and stays that way for the process
//! lifetime, so the finished list is populated only if a future feature
//! adds a transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    /// Convert to string for display and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }

    /// Parse from a status string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ProjectStatus::Active),
            "finished" => Some(ProjectStatus::Finished),
            _ => None,
        }
    }
}

/// A taskboard project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Free-form project description
    pub description: String,
    /// Number of people assigned
    pub people: u32,
    /// Project status
    pub status: ProjectStatus,
    /// When the project was created
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new active project with a fresh identifier
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }
}
