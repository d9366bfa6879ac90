//! Project domain record.
//!
//! # Responsibility
//! - Define the project record and its two-state lifecycle.
//! - Provide construction and invariant checks for callers of the store.
//!
//! # Invariants
//! - `id` is stable, unique, and never reused for another project.
//! - `status` is the only field mutated after creation.
//! - A valid project always has a non-blank title and `people >= 1`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier issued by the store at creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Two-state project classification used by the filtered list views.
///
/// Transitions are bidirectional; neither state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress, shown in the active list.
    Active,
    /// Completed work, shown in the finished list.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a user-facing status word (case-insensitive, trimmed).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invariant violations for a project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilId,
    BlankTitle,
    ZeroPeople,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be the nil uuid"),
            Self::BlankTitle => write!(f, "project title must not be blank"),
            Self::ZeroPeople => write!(f, "project people count must be >= 1"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical project record.
///
/// Owned exclusively by the store; everything outside the store works on
/// cloned snapshots, so no external code can mutate live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identity, generated at creation and immutable afterwards.
    pub id: ProjectId,
    /// Short display name.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Number of people assigned. Always >= 1 for a valid project.
    pub people: u32,
    /// Sole mutable field; drives list-view placement.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated id and status `Active`.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Creates a project with a caller-provided identity and status.
    ///
    /// Used by tests and import-style callers where identity already
    /// exists. Rejects records that violate model invariants.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Result<Self, ProjectValidationError> {
        let project = Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status,
        };
        project.validate()?;
        Ok(project)
    }

    /// Checks model invariants.
    ///
    /// The intake path makes violations unreachable in normal operation;
    /// this exists for callers that construct records directly.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::BlankTitle);
        }
        if self.people == 0 {
            return Err(ProjectValidationError::ZeroPeople);
        }
        Ok(())
    }

    /// Returns whether this project sits in the finished list.
    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Finished
    }
}
