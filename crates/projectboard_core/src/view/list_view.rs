//! Status-filtered list view.
//!
//! # Responsibility
//! - Keep one status-filtered copy of board state, refreshed on every
//!   store notification.
//!
//! # Invariants
//! - Contents are rebuilt from each snapshot in full (no diffing); the
//!   underlying insertion order is preserved within the filter.
//! - The view holds copies only; it can never mutate store state.

use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::{ProjectStore, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;

/// A live, status-filtered projection of the project list.
///
/// Shares state with its store listener through `Rc<RefCell>`: the model
/// is single-threaded by design, so nothing heavier is needed.
pub struct ProjectListView {
    status: ProjectStatus,
    assigned: Rc<RefCell<Vec<Project>>>,
    subscription: SubscriptionId,
}

impl ProjectListView {
    /// Subscribes a filtered projection for `status`.
    ///
    /// The view is seeded from the current snapshot, so attaching after
    /// earlier mutations still yields correct contents.
    pub fn attach(store: &mut ProjectStore, status: ProjectStatus) -> Self {
        let assigned = Rc::new(RefCell::new(filter_by_status(&store.snapshot(), status)));
        let sink = Rc::clone(&assigned);
        let subscription = store.subscribe(Box::new(move |snapshot| {
            *sink.borrow_mut() = filter_by_status(snapshot, status);
        }));

        Self {
            status,
            assigned,
            subscription,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Current filtered contents, as a detached copy.
    pub fn projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.assigned.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.borrow().is_empty()
    }

    /// Removes this view's listener from the store.
    ///
    /// The view keeps its last contents but stops updating.
    pub fn detach(self, store: &mut ProjectStore) -> bool {
        store.unsubscribe(self.subscription)
    }
}

fn filter_by_status(snapshot: &[Project], status: ProjectStatus) -> Vec<Project> {
    snapshot
        .iter()
        .filter(|project| project.status == status)
        .cloned()
        .collect()
}
