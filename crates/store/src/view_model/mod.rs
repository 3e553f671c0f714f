//! Observable state for presentation layers.
//!
//! Each view model wraps repository calls and keeps a local copy of what it
//! last read, plus loading and error flags. Methods are `async` so callers
//! can treat them like network calls, but every underlying operation is
//! synchronous and completes immediately.

mod data;
mod profile;
mod projects;

pub use data::{BackupFile, DataViewModel, StorageInfoViewModel};
pub use profile::ProfileViewModel;
pub use projects::{
    ProjectViewModel, ProjectsViewModel, RecentProjectsViewModel, SearchViewModel,
    DEFAULT_RECENT_LIMIT,
};
