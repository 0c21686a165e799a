//! Taskboard Core Library
//!
//! This crate provides the core functionality for Taskboard, including:
//! - Project domain model (entity, status)
//! - Declarative field validation
//! - Observable in-memory project store
//! - Form intake (raw field strings -> validated draft)
//! - Configuration

pub mod config;
pub mod error;
pub mod intake;
pub mod project;
pub mod state;
pub mod validation;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, FormConfig};
    pub use crate::error::{Error, Result};
    pub use crate::intake::{ALERT_INVALID_INPUT, ProjectDraft, RawProjectInput};
    pub use crate::project::{Project, ProjectStatus};
    pub use crate::state::ProjectStore;
    pub use crate::validation::{RuleValue, ValidationRule, is_input_valid};
}
