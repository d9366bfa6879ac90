//! Read-side projections over store snapshots.

pub mod list_view;
