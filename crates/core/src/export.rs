//! Backup export envelope and related constants.
//!
//! A backup is a single indented JSON document holding every project and the
//! optional profile, stamped with the export time and a format version.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::project::Project;
use crate::types::{iso_millis, Timestamp};

/// Format version written into every export.
pub const EXPORT_VERSION: &str = "1.0";

/// File name prefix for downloaded backups.
pub const BACKUP_FILE_PREFIX: &str = "arqdesign-backup";

/// Full snapshot of the store as written by an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub projects: Vec<Project>,
    pub profile: Option<UserProfile>,
    #[serde(with = "iso_millis")]
    pub exported_at: Timestamp,
    pub version: String,
}

impl ExportPayload {
    pub fn new(projects: Vec<Project>, profile: Option<UserProfile>, exported_at: Timestamp) -> Self {
        Self {
            projects,
            profile,
            exported_at,
            version: EXPORT_VERSION.to_string(),
        }
    }
}

/// What a successful import wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub projects_imported: usize,
    pub profile_imported: bool,
}

/// File name offered for a backup taken on `date`, e.g.
/// `arqdesign-backup-2024-03-01.json`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("{BACKUP_FILE_PREFIX}-{}.json", date.format("%Y-%m-%d"))
}
