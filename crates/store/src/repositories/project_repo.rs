//! Repository for the projects collection.

use arqdesign_core::error::CoreError;
use arqdesign_core::ids::generate_project_id;
use arqdesign_core::project::{CreateProject, PartialProject, Project, UpdateProject};
use arqdesign_core::types::now_millis;
use arqdesign_core::validation::{ensure_valid, validate_project};

use crate::keys::PROJECTS_KEY;
use crate::kv::KeyValueStore;

/// Provides CRUD, search and recency queries over the stored project list.
///
/// The whole list lives under a single key; every mutation reads it, edits
/// it in memory and writes it back in full.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in stored order (newest first).
    ///
    /// Degrades to an empty list when the key is absent or its contents
    /// cannot be read; the failure is logged, not returned.
    pub fn list(store: &dyn KeyValueStore) -> Vec<Project> {
        match Self::load(store) {
            Ok(projects) => projects,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read projects from storage");
                Vec::new()
            }
        }
    }

    /// Validate and insert a new project at the head of the list.
    pub fn create(store: &dyn KeyValueStore, input: &CreateProject) -> Result<Project, CoreError> {
        ensure_valid(validate_project(&PartialProject::from(input)))?;

        let mut projects = Self::load(store)?;
        let created_at = now_millis();
        let project = Project {
            id: generate_project_id(created_at),
            client_name: input.client_name.clone(),
            created_at,
        };
        projects.insert(0, project.clone());
        Self::save_all(store, &projects)?;

        tracing::debug!(project_id = %project.id, "Project created");
        Ok(project)
    }

    /// Find a project by id.
    pub fn find_by_id(store: &dyn KeyValueStore, id: &str) -> Option<Project> {
        Self::list(store).into_iter().find(|p| p.id == id)
    }

    /// Apply `patch` to the project with `id`, re-validating the merged
    /// record before it is written. `id` and `created_at` never change.
    pub fn update(
        store: &dyn KeyValueStore,
        id: &str,
        patch: &UpdateProject,
    ) -> Result<Project, CoreError> {
        let mut projects = Self::load(store)?;
        let slot = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "project",
                id: id.to_string(),
            })?;

        let updated = slot.merged(patch);
        ensure_valid(validate_project(&PartialProject::from(&updated)))?;
        *slot = updated.clone();
        Self::save_all(store, &projects)?;

        tracing::debug!(project_id = %id, "Project updated");
        Ok(updated)
    }

    /// Delete a project by id. Returns `false` (and writes nothing) if no
    /// project has that id.
    pub fn delete(store: &dyn KeyValueStore, id: &str) -> Result<bool, CoreError> {
        let mut projects = Self::load(store)?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Ok(false);
        }
        Self::save_all(store, &projects)?;

        tracing::debug!(project_id = %id, "Project deleted");
        Ok(true)
    }

    /// Case-insensitive substring match on client name. A blank query
    /// returns every project.
    pub fn search(store: &dyn KeyValueStore, query: &str) -> Vec<Project> {
        let projects = Self::list(store);
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return projects;
        }
        projects
            .into_iter()
            .filter(|p| p.client_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Up to `limit` projects, most recently created first.
    pub fn recent(store: &dyn KeyValueStore, limit: usize) -> Vec<Project> {
        Self::most_recent(Self::list(store), limit)
    }

    pub fn count(store: &dyn KeyValueStore) -> usize {
        Self::list(store).len()
    }

    /// Strict read used by mutations: unreadable contents are an error so a
    /// write never replaces data it could not parse.
    pub(crate) fn load(store: &dyn KeyValueStore) -> Result<Vec<Project>, CoreError> {
        match store.get(PROJECTS_KEY)? {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
                .map_err(|e| CoreError::Format(format!("stored projects are unreadable: {e}"))),
            _ => Ok(Vec::new()),
        }
    }

    /// Stable sort by creation time, newest first, keeping `limit` entries.
    pub(crate) fn most_recent(mut projects: Vec<Project>, limit: usize) -> Vec<Project> {
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects.truncate(limit);
        projects
    }

    /// Replace the stored list.
    pub(crate) fn save_all(store: &dyn KeyValueStore, projects: &[Project]) -> Result<(), CoreError> {
        let json = serde_json::to_string(projects)
            .map_err(|e| CoreError::Format(format!("cannot serialize projects: {e}")))?;
        store.set(PROJECTS_KEY, &json)
    }
}
