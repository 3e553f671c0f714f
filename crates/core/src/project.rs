//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{iso_millis, ProjectId, Timestamp};

/// A client project as persisted under the projects key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub client_name: String,
    #[serde(with = "iso_millis")]
    pub created_at: Timestamp,
}

/// DTO for creating a new project. `id` and `created_at` are assigned by the
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub client_name: String,
}

impl CreateProject {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }
}

/// DTO for updating an existing project. All fields are optional; `id` and
/// `created_at` are not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub client_name: Option<String>,
}

impl Project {
    /// Return a copy of this project with every `Some` field of `patch`
    /// applied.
    pub fn merged(&self, patch: &UpdateProject) -> Project {
        let mut merged = self.clone();
        if let Some(client_name) = &patch.client_name {
            merged.client_name = client_name.clone();
        }
        merged
    }
}

/// Borrowed view of a possibly incomplete project, as accepted by
/// [`crate::validation::validate_project`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialProject<'a> {
    pub client_name: Option<&'a str>,
}

impl<'a> From<&'a Project> for PartialProject<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            client_name: Some(&project.client_name),
        }
    }
}

impl<'a> From<&'a CreateProject> for PartialProject<'a> {
    fn from(input: &'a CreateProject) -> Self {
        Self {
            client_name: Some(&input.client_name),
        }
    }
}

impl<'a> From<&'a UpdateProject> for PartialProject<'a> {
    fn from(patch: &'a UpdateProject) -> Self {
        Self {
            client_name: patch.client_name.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample() -> Project {
        Project {
            id: "abc123".into(),
            client_name: "Maria Silva".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "abc123");
        assert_eq!(json["clientName"], "Maria Silva");
        assert_eq!(json["createdAt"], "2024-05-10T08:00:00.000Z");
    }

    #[test]
    fn ignores_unknown_fields_on_read() {
        let raw = r#"{"id":"x1","clientName":"Ana","createdAt":"2024-05-10T08:00:00.000Z","color":"red"}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.client_name, "Ana");
    }

    #[test]
    fn merge_only_touches_supplied_fields() {
        let original = sample();
        let unchanged = original.merged(&UpdateProject::default());
        assert_eq!(unchanged, original);

        let renamed = original.merged(&UpdateProject {
            client_name: Some("João Pereira".into()),
        });
        assert_eq!(renamed.client_name, "João Pereira");
        assert_eq!(renamed.id, original.id);
        assert_eq!(renamed.created_at, original.created_at);
    }
}
