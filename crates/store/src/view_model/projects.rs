use arqdesign_core::error::CoreError;
use arqdesign_core::project::{CreateProject, Project, UpdateProject};

use crate::repositories::ProjectRepo;
use crate::SharedStore;

/// Number of projects shown in a "recent" list when none is requested.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

// ---------------------------------------------------------------------------
// Project list
// ---------------------------------------------------------------------------

/// The project list plus create/update/delete actions.
///
/// Successful mutations patch the local list in place (prepend, replace,
/// filter) instead of re-reading the store; [`ProjectsViewModel::refresh`]
/// re-reads it.
pub struct ProjectsViewModel {
    store: SharedStore,
    projects: Vec<Project>,
    loading: bool,
    error: Option<String>,
}

impl ProjectsViewModel {
    /// Create the view model and perform the initial load.
    pub async fn new(store: SharedStore) -> Self {
        let mut vm = Self {
            store,
            projects: Vec::new(),
            loading: true,
            error: None,
        };
        vm.refresh().await;
        vm
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-read the list from the store. Unreadable contents leave the list
    /// empty and set `error`.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match ProjectRepo::load(self.store.as_ref()) {
            Ok(projects) => {
                self.projects = projects;
                self.error = None;
            }
            Err(e) => {
                self.projects.clear();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn create(&mut self, input: CreateProject) -> Result<Project, CoreError> {
        self.error = None;
        let result = ProjectRepo::create(self.store.as_ref(), &input);
        match &result {
            Ok(project) => self.projects.insert(0, project.clone()),
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }

    pub async fn update(&mut self, id: &str, patch: UpdateProject) -> Result<Project, CoreError> {
        self.error = None;
        let result = ProjectRepo::update(self.store.as_ref(), id, &patch);
        match &result {
            Ok(updated) => {
                for project in self.projects.iter_mut().filter(|p| p.id == id) {
                    *project = updated.clone();
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }

    /// Delete a project. A missing id is reported as
    /// [`CoreError::NotFound`].
    pub async fn delete(&mut self, id: &str) -> Result<(), CoreError> {
        self.error = None;
        let result = match ProjectRepo::delete(self.store.as_ref(), id) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CoreError::NotFound {
                entity: "project",
                id: id.to_string(),
            }),
            Err(e) => Err(e),
        };
        match &result {
            Ok(()) => self.projects.retain(|p| p.id != id),
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Single project
// ---------------------------------------------------------------------------

/// One project looked up by id.
pub struct ProjectViewModel {
    store: SharedStore,
    id: String,
    project: Option<Project>,
    loading: bool,
    error: Option<String>,
}

impl ProjectViewModel {
    pub async fn load(store: SharedStore, id: &str) -> Self {
        let mut vm = Self {
            store,
            id: id.to_string(),
            project: None,
            loading: true,
            error: None,
        };
        vm.refresh().await;
        vm
    }

    /// `None` when no project has this id, or when the store could not be
    /// read (then `error` is set).
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        match ProjectRepo::load(self.store.as_ref()) {
            Ok(projects) => {
                self.project = projects.into_iter().find(|p| p.id == self.id);
                self.error = None;
            }
            Err(e) => {
                self.project = None;
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

pub struct SearchViewModel {
    store: SharedStore,
    query: String,
    results: Vec<Project>,
    is_searching: bool,
}

impl SearchViewModel {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            query: String::new(),
            results: Vec::new(),
            is_searching: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Project] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub async fn search(&mut self, query: &str) {
        self.is_searching = true;
        self.query = query.to_string();
        self.results = ProjectRepo::search(self.store.as_ref(), query);
        self.is_searching = false;
    }

    /// Reset the query and drop the results.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }
}

// ---------------------------------------------------------------------------
// Recent projects
// ---------------------------------------------------------------------------

pub struct RecentProjectsViewModel {
    store: SharedStore,
    limit: usize,
    recent: Vec<Project>,
    loading: bool,
    error: Option<String>,
}

impl RecentProjectsViewModel {
    pub async fn load(store: SharedStore, limit: usize) -> Self {
        let mut vm = Self {
            store,
            limit,
            recent: Vec::new(),
            loading: true,
            error: None,
        };
        vm.refresh().await;
        vm
    }

    pub fn recent(&self) -> &[Project] {
        &self.recent
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        match ProjectRepo::load(self.store.as_ref()) {
            Ok(projects) => {
                self.recent = ProjectRepo::most_recent(projects, self.limit);
                self.error = None;
            }
            Err(e) => {
                self.recent.clear();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }
}
