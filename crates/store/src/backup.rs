//! Whole-store export, import and reset.

use serde_json::Value;

use arqdesign_core::error::CoreError;
use arqdesign_core::export::{ExportPayload, ImportSummary};
use arqdesign_core::profile::{PartialProfile, UserProfile};
use arqdesign_core::project::{PartialProject, Project};
use arqdesign_core::types::now_millis;
use arqdesign_core::validation::{validate_project, validate_user_profile};

use crate::keys::ALL_KEYS;
use crate::kv::KeyValueStore;
use crate::repositories::{ProfileRepo, ProjectRepo};

/// Serialize every project and the profile into an indented JSON backup.
pub fn export_all(store: &dyn KeyValueStore) -> Result<String, CoreError> {
    let payload = ExportPayload::new(ProjectRepo::list(store), ProfileRepo::get(store), now_millis());
    serde_json::to_string_pretty(&payload)
        .map_err(|e| CoreError::Format(format!("cannot serialize export: {e}")))
}

/// Replace the stored data with the contents of a backup.
///
/// Every project and the profile (when present) must pass the same
/// validation as live writes. The first failure aborts the import before
/// anything is written. On success the project list is written, then the
/// profile if the backup carried one; an absent or `null` profile leaves the
/// stored profile untouched.
pub fn import_all(store: &dyn KeyValueStore, json: &str) -> Result<ImportSummary, CoreError> {
    let data: Value = serde_json::from_str(json)
        .map_err(|e| CoreError::Format(format!("backup is not valid JSON: {e}")))?;

    let entries = data
        .get("projects")
        .and_then(Value::as_array)
        .ok_or_else(|| CoreError::Format("projects array not found".to_string()))?;

    let mut projects = Vec::with_capacity(entries.len());
    for entry in entries {
        let client_name = entry.get("clientName").and_then(Value::as_str);
        let errors = validate_project(&PartialProject { client_name });
        if !errors.is_empty() {
            return Err(rejected("Invalid project data", errors));
        }
        let project: Project = serde_json::from_value(entry.clone())
            .map_err(|e| CoreError::Format(format!("invalid project record: {e}")))?;
        projects.push(project);
    }

    let profile = match data.get("profile") {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let errors = validate_user_profile(&PartialProfile::from_json(raw));
            if !errors.is_empty() {
                return Err(rejected("Invalid profile data", errors));
            }
            let profile: UserProfile = serde_json::from_value(raw.clone())
                .map_err(|e| CoreError::Format(format!("invalid profile record: {e}")))?;
            Some(profile)
        }
    };

    ProjectRepo::save_all(store, &projects)?;
    if let Some(profile) = &profile {
        ProfileRepo::write(store, profile)?;
    }

    let summary = ImportSummary {
        projects_imported: projects.len(),
        profile_imported: profile.is_some(),
    };
    tracing::info!(
        projects = summary.projects_imported,
        profile = summary.profile_imported,
        "Backup imported",
    );
    Ok(summary)
}

/// Remove every key this store owns.
pub fn clear_all(store: &dyn KeyValueStore) -> Result<(), CoreError> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    tracing::info!("All stored data cleared");
    Ok(())
}

fn rejected(context: &str, errors: Vec<String>) -> CoreError {
    CoreError::Validation(
        errors
            .into_iter()
            .map(|e| format!("{context}: {e}"))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::keys::{PROJECTS_KEY, USER_PROFILE_KEY};
    use crate::kv::MemoryStore;

    #[test]
    fn export_is_indented_and_versioned() {
        let store = MemoryStore::new();
        let json = export_all(&store).unwrap();
        assert!(json.contains("\n  \"projects\": []"));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "1.0");
        assert!(value["profile"].is_null());
        assert!(value["exportedAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn import_requires_projects_array() {
        let store = MemoryStore::new();
        assert_matches!(import_all(&store, "{}"), Err(CoreError::Format(_)));
        assert_matches!(
            import_all(&store, r#"{"projects": {"a": 1}}"#),
            Err(CoreError::Format(_))
        );
        assert_matches!(import_all(&store, "not json"), Err(CoreError::Format(_)));
    }

    #[test]
    fn import_rejects_invalid_project_without_writing() {
        let store = MemoryStore::new();
        let json = r#"{"projects": [
            {"id": "a", "clientName": "Maria Silva", "createdAt": "2024-01-01T00:00:00.000Z"},
            {"id": "b", "clientName": "X", "createdAt": "2024-01-02T00:00:00.000Z"}
        ]}"#;
        let err = import_all(&store, json).unwrap_err();
        assert_eq!(
            err.violations(),
            ["Invalid project data: Client name must be at least 2 characters"]
        );
        assert_eq!(store.get(PROJECTS_KEY).unwrap(), None);
    }

    #[test]
    fn import_rejects_project_missing_timestamp() {
        let store = MemoryStore::new();
        let json = r#"{"projects": [{"id": "a", "clientName": "Maria Silva"}]}"#;
        assert_matches!(import_all(&store, json), Err(CoreError::Format(_)));
    }

    #[test]
    fn import_rejects_invalid_profile_without_writing() {
        let store = MemoryStore::new();
        let json = r#"{"projects": [], "profile": {"name": "Ana", "email": "nope"}}"#;
        assert_matches!(import_all(&store, json), Err(CoreError::Validation(_)));
        assert_eq!(store.get(PROJECTS_KEY).unwrap(), None);
        assert_eq!(store.get(USER_PROFILE_KEY).unwrap(), None);
    }

    #[test]
    fn import_without_profile_keeps_existing_profile() {
        let store = MemoryStore::new();
        let existing = UserProfile {
            name: "Ana Costa".into(),
            email: String::new(),
            photo: None,
        };
        ProfileRepo::save(&store, &existing).unwrap();

        let summary = import_all(&store, r#"{"projects": [], "profile": null, "extra": true}"#).unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                projects_imported: 0,
                profile_imported: false
            }
        );
        assert_eq!(ProfileRepo::get(&store), Some(existing));
    }

    #[test]
    fn import_accepts_profile_with_null_email() {
        let store = MemoryStore::new();
        let json = r#"{"projects": [], "profile": {"name": "Ana Costa", "email": null}}"#;
        let summary = import_all(&store, json).unwrap();
        assert!(summary.profile_imported);
        assert_eq!(
            ProfileRepo::get(&store),
            Some(UserProfile {
                name: "Ana Costa".into(),
                email: String::new(),
                photo: None,
            })
        );
    }

    #[test]
    fn import_accepts_date_only_timestamps() {
        let store = MemoryStore::new();
        let json = r#"{"projects": [{"id": "a", "clientName": "Maria Silva", "createdAt": "2024-01-01"}]}"#;
        import_all(&store, json).unwrap();
        let stored = store.get(PROJECTS_KEY).unwrap().unwrap();
        assert!(stored.contains(r#""createdAt":"2024-01-01T00:00:00.000Z""#));
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemoryStore::new();
        store.set(PROJECTS_KEY, "[]").unwrap();
        store.set(USER_PROFILE_KEY, "{}").unwrap();
        clear_all(&store).unwrap();
        assert_eq!(store.get(PROJECTS_KEY).unwrap(), None);
        assert_eq!(store.get(USER_PROFILE_KEY).unwrap(), None);
        clear_all(&store).unwrap();
    }
}
