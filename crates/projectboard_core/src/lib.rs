//! Core domain logic for Projectboard.
//! This crate is the single source of truth for board state and its
//! notification contract.

pub mod intake;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use intake::{check_draft, submit_draft, DraftError, ProjectDraft};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus, ProjectValidationError};
pub use store::project_store::{Listener, ProjectStore, SubscriptionId};
pub use validation::{validate, FieldValue, ValidationSpec};
pub use view::list_view::ProjectListView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
