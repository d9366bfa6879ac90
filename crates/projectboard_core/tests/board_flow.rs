use projectboard_core::{
    submit_draft, DraftError, ProjectDraft, ProjectListView, ProjectStatus, ProjectStore,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn valid_draft_adds_exactly_one_active_project() {
    let mut store = ProjectStore::new();
    let draft = ProjectDraft::new("Build site", "Make a website", "3");

    let id = submit_draft(&mut store, &draft).expect("draft should pass validation");

    assert_eq!(store.len(), 1);
    let project = store.get(id).expect("project should be present");
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.people, 3);
}

#[test]
fn rejected_draft_leaves_store_untouched_and_silent() {
    let mut store = ProjectStore::new();
    let notifications = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&notifications);
    store.subscribe(Box::new(move |_| {
        *counter.borrow_mut() += 1;
    }));

    let bad_drafts = [
        ProjectDraft::new("ab", "Make a website", "3"),
        ProjectDraft::new("Build site", "tiny", "3"),
        ProjectDraft::new("Build site", "Make a website", "0"),
        ProjectDraft::new("Build site", "Make a website", "six"),
    ];
    let expected = [
        DraftError::InvalidTitle,
        DraftError::InvalidDescription,
        DraftError::InvalidPeople,
        DraftError::InvalidPeople,
    ];

    for (draft, error) in bad_drafts.iter().zip(expected) {
        assert_eq!(submit_draft(&mut store, draft), Err(error));
    }

    assert!(store.is_empty());
    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn views_split_projects_by_status_after_a_move() {
    let mut store = ProjectStore::new();
    let active = ProjectListView::attach(&mut store, ProjectStatus::Active);
    let finished = ProjectListView::attach(&mut store, ProjectStatus::Finished);

    let first = submit_draft(
        &mut store,
        &ProjectDraft::new("Build site", "Make a website", "3"),
    )
    .expect("first draft should pass");
    let second = submit_draft(
        &mut store,
        &ProjectDraft::new("Write docs", "Document the site", "2"),
    )
    .expect("second draft should pass");

    assert_eq!(active.len(), 2);
    assert!(finished.is_empty());

    store.move_project(second, ProjectStatus::Finished);

    let active_projects = active.projects();
    assert_eq!(active_projects.len(), 1);
    assert_eq!(active_projects[0].id, first);

    let finished_projects = finished.projects();
    assert_eq!(finished_projects.len(), 1);
    assert_eq!(finished_projects[0].id, second);
}

#[test]
fn moving_back_returns_the_project_to_the_active_view() {
    let mut store = ProjectStore::new();
    let active = ProjectListView::attach(&mut store, ProjectStatus::Active);
    let finished = ProjectListView::attach(&mut store, ProjectStatus::Finished);

    let id = store.add_project("Build site", "Make a website", 3);
    store.move_project(id, ProjectStatus::Finished);
    store.move_project(id, ProjectStatus::Active);

    assert_eq!(active.len(), 1);
    assert!(finished.is_empty());
}

#[test]
fn view_attached_late_is_seeded_from_current_state() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Build site", "Make a website", 3);
    store.move_project(id, ProjectStatus::Finished);

    let finished = ProjectListView::attach(&mut store, ProjectStatus::Finished);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished.projects()[0].id, id);
}

#[test]
fn detached_view_keeps_last_contents_but_stops_updating() {
    let mut store = ProjectStore::new();
    let active = ProjectListView::attach(&mut store, ProjectStatus::Active);

    store.add_project("Build site", "Make a website", 3);
    assert_eq!(active.len(), 1);

    let frozen = active.projects();
    assert!(active.detach(&mut store));
    assert_eq!(store.listener_count(), 0);

    store.add_project("Write docs", "Document the site", 2);
    assert_eq!(store.len(), 2);
    assert_eq!(frozen.len(), 1, "detached copy must not change");
}

#[test]
fn views_preserve_insertion_order_within_a_status() {
    let mut store = ProjectStore::new();
    let active = ProjectListView::attach(&mut store, ProjectStatus::Active);

    let first = store.add_project("First", "first project entry", 1);
    let middle = store.add_project("Middle", "middle project entry", 2);
    let last = store.add_project("Last", "last project entry", 3);
    store.move_project(middle, ProjectStatus::Finished);

    let ids: Vec<_> = active.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first, last]);
}
