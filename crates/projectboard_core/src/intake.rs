//! Draft intake in front of the store.
//!
//! # Responsibility
//! - Apply the intake form's field rules to raw user input.
//! - Forward only fully valid drafts to `ProjectStore::add_project`.
//!
//! # Invariants
//! - A rejected draft never touches the store and fires no notifications.
//! - Field rules match the board form: title >= 3 chars, description
//!   >= 5 chars, people an integer in 1..=5.

use crate::model::project::ProjectId;
use crate::store::project_store::ProjectStore;
use crate::validation::{validate, ValidationSpec};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const TITLE_MIN_LENGTH: usize = 3;
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 5;

/// Raw form input, exactly as the user entered it.
///
/// `people` stays a string here; parsing it is part of validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// First field that failed draft validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    InvalidTitle,
    InvalidDescription,
    InvalidPeople,
}

impl DraftError {
    fn field(self) -> &'static str {
        match self {
            Self::InvalidTitle => "title",
            Self::InvalidDescription => "description",
            Self::InvalidPeople => "people",
        }
    }
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => {
                write!(f, "title is required and must be at least {TITLE_MIN_LENGTH} characters")
            }
            Self::InvalidDescription => write!(
                f,
                "description is required and must be at least {DESCRIPTION_MIN_LENGTH} characters"
            ),
            Self::InvalidPeople => write!(
                f,
                "people must be a whole number between {PEOPLE_MIN} and {PEOPLE_MAX}"
            ),
        }
    }
}

impl Error for DraftError {}

/// Validates a draft and, when every field passes, adds the project.
///
/// Returns the id issued by the store. On failure the store is left
/// untouched and the first offending field is reported.
pub fn submit_draft(
    store: &mut ProjectStore,
    draft: &ProjectDraft,
) -> Result<ProjectId, DraftError> {
    let people = check_draft(draft)?;
    Ok(store.add_project(draft.title.clone(), draft.description.clone(), people))
}

/// Runs the form rules without mutating anything.
///
/// Returns the parsed people count on success.
pub fn check_draft(draft: &ProjectDraft) -> Result<u32, DraftError> {
    let title_spec = ValidationSpec::text(&draft.title)
        .required()
        .min_length(TITLE_MIN_LENGTH);
    if !validate(&title_spec) {
        return Err(reject(DraftError::InvalidTitle));
    }

    let description_spec = ValidationSpec::text(&draft.description)
        .required()
        .min_length(DESCRIPTION_MIN_LENGTH);
    if !validate(&description_spec) {
        return Err(reject(DraftError::InvalidDescription));
    }

    let people: i64 = draft
        .people
        .trim()
        .parse()
        .map_err(|_| reject(DraftError::InvalidPeople))?;
    let people_spec = ValidationSpec::number(people)
        .required()
        .min(PEOPLE_MIN)
        .max(PEOPLE_MAX);
    if !validate(&people_spec) {
        return Err(reject(DraftError::InvalidPeople));
    }

    // Range-checked against 1..=5 above, so the narrowing cast is exact.
    Ok(people as u32)
}

fn reject(error: DraftError) -> DraftError {
    debug!(
        "event=draft_rejected module=intake status=invalid field={}",
        error.field()
    );
    error
}
