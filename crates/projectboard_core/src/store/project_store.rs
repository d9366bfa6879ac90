//! Project store and listener fan-out.
//!
//! # Responsibility
//! - Own the ordered project list and issue project identities.
//! - Notify subscribers synchronously after every effective mutation.
//!
//! # Invariants
//! - The store is the single writer of project state; listeners only ever
//!   see cloned snapshots.
//! - Listeners fire in subscription order, exactly once per effective
//!   mutation, never asynchronously, never batched.
//! - Moves that change nothing fire no notifications.
//! - Insertion order is preserved; it is the display order within each
//!   status group.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};

/// Callback invoked with a full-state snapshot after each mutation.
///
/// `FnMut` because subscribers (list views) update their own state on
/// notification. No `Send` bound: the whole model is single-threaded.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Handle returned by `subscribe`, used to remove the listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of the authoritative project list.
///
/// Plain data with no hidden global: the application wiring constructs
/// one store and passes it to consumers explicitly.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new `Active` project and notifies all listeners.
    ///
    /// Returns the generated id so callers can address the project in
    /// later `move_project` calls. Never fails; input validation happens
    /// in the intake layer before this point.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        // Metadata only; titles and descriptions are user text and stay
        // out of the log stream.
        info!(
            "event=project_added module=store status=ok id={id} people={} total={}",
            project.people,
            self.projects.len() + 1
        );
        self.projects.push(project);
        self.notify_listeners();
        id
    }

    /// Moves a project to `new_status` and notifies all listeners.
    ///
    /// Unknown ids and same-status moves are silent no-ops: no error, no
    /// notification, no state change. Repeating such a call any number of
    /// times leaves observable state untouched.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) if project.status != new_status => {
                project.status = new_status;
                info!("event=project_moved module=store status=ok id={id} to={new_status}");
                self.notify_listeners();
            }
            Some(_) => {
                debug!("event=project_move_skipped module=store status=noop id={id} reason=same_status");
            }
            None => {
                debug!("event=project_move_skipped module=store status=noop id={id} reason=unknown_id");
            }
        }
    }

    /// Registers a listener and returns its removal handle.
    ///
    /// The listener starts receiving snapshots with the next mutation; it
    /// is not called at registration time.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener by handle.
    ///
    /// Returns `false` for unknown handles. Remaining listeners keep
    /// their relative order.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Cloned copy of the full project list in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Looks up one project by id.
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_listeners(&mut self) {
        // One clone per notification, shared read-only by every listener.
        // Listeners never see the live list, so they cannot corrupt it.
        let snapshot = self.projects.clone();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
