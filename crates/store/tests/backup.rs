//! Integration tests for whole-store export / import / clear.

use assert_matches::assert_matches;

use arqdesign_core::error::CoreError;
use arqdesign_core::export::ExportPayload;
use arqdesign_core::profile::UserProfile;
use arqdesign_core::project::CreateProject;
use arqdesign_store::backup::{clear_all, export_all, import_all};
use arqdesign_store::repositories::{ProfileRepo, ProjectRepo};
use arqdesign_store::stats::storage_stats;
use arqdesign_store::MemoryStore;

fn populated() -> MemoryStore {
    let store = MemoryStore::new();
    for name in ["Maria Silva", "João Souza", "Ana Costa"] {
        ProjectRepo::create(&store, &CreateProject::new(name)).unwrap();
    }
    let profile = UserProfile {
        name: "Carla Mendes".into(),
        email: "carla@estudio.com.br".into(),
        photo: Some("https://cdn.example.com/carla.jpg".into()),
    };
    ProfileRepo::save(&store, &profile).unwrap();
    store
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn export_then_import_into_empty_store_reproduces_data() {
    let source = populated();
    let json = export_all(&source).unwrap();

    let target = MemoryStore::new();
    let summary = import_all(&target, &json).unwrap();
    assert_eq!(summary.projects_imported, 3);
    assert!(summary.profile_imported);

    assert_eq!(ProjectRepo::list(&target), ProjectRepo::list(&source));
    assert_eq!(ProfileRepo::get(&target), ProfileRepo::get(&source));
}

#[test]
fn export_payload_deserializes() {
    let source = populated();
    let payload: ExportPayload = serde_json::from_str(&export_all(&source).unwrap()).unwrap();

    assert_eq!(payload.version, "1.0");
    assert_eq!(payload.projects, ProjectRepo::list(&source));
    assert_eq!(payload.profile, ProfileRepo::get(&source));
}

#[test]
fn import_replaces_existing_projects() {
    let store = populated();
    let json = r#"{
        "projects": [
            {"id": "imported1", "clientName": "Paulo Nunes", "createdAt": "2023-11-20T10:15:00.000Z"}
        ],
        "profile": null,
        "exportedAt": "2023-11-21T00:00:00.000Z",
        "version": "1.0"
    }"#;

    import_all(&store, json).unwrap();
    let projects = ProjectRepo::list(&store);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, "imported1");
    assert_eq!(projects[0].client_name, "Paulo Nunes");
    // No profile in the backup: the stored one is kept.
    assert!(ProfileRepo::get(&store).is_some());
}

#[test]
fn failed_import_is_all_or_nothing() {
    let store = populated();
    let before = ProjectRepo::list(&store);
    let json = r#"{
        "projects": [
            {"id": "ok", "clientName": "Paulo Nunes", "createdAt": "2023-11-20T10:15:00.000Z"}
        ],
        "profile": {"name": "P", "email": ""}
    }"#;

    let err = import_all(&store, json).unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
    assert_eq!(err.violations(), ["Invalid profile data: Name must be at least 2 characters"]);
    assert_eq!(ProjectRepo::list(&store), before);
}

// ---------------------------------------------------------------------------
// Clear / stats
// ---------------------------------------------------------------------------

#[test]
fn clear_all_empties_store_and_stats() {
    let store = populated();
    let stats = storage_stats(&store);
    assert_eq!(stats.projects_count, 3);
    assert!(stats.has_user_profile);
    assert!(stats.storage_used > 0);
    assert_eq!(
        stats.last_modified,
        ProjectRepo::list(&store).iter().map(|p| p.created_at).max()
    );

    clear_all(&store).unwrap();
    let stats = storage_stats(&store);
    assert_eq!(stats.projects_count, 0);
    assert!(!stats.has_user_profile);
    assert_eq!(stats.storage_used, 0);
    assert_eq!(stats.last_modified, None);
}
