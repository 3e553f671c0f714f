//! Command execution. Output goes to the supplied writer so commands can be
//! exercised without a terminal.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};

use arqdesign_core::error::CoreError;
use arqdesign_core::export::backup_file_name;
use arqdesign_core::profile::UserProfile;
use arqdesign_core::project::{CreateProject, Project, UpdateProject};
use arqdesign_store::backup::{clear_all, export_all, import_all};
use arqdesign_store::repositories::{ProfileRepo, ProjectRepo};
use arqdesign_store::stats::storage_stats;
use arqdesign_store::KeyValueStore;

use crate::cli::{Command, ProfileCommand};
use crate::config::CliConfig;

/// Run one command against `store`.
pub fn run(
    command: Command,
    store: &dyn KeyValueStore,
    config: &CliConfig,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::List => print_projects(out, &ProjectRepo::list(store)),
        Command::Add { client_name } => {
            let project = ProjectRepo::create(store, &CreateProject::new(client_name))?;
            writeln!(out, "Created {}", format_project(&project))?;
            Ok(())
        }
        Command::Show { id } => {
            let project = ProjectRepo::find_by_id(store, &id).ok_or(CoreError::NotFound {
                entity: "project",
                id,
            })?;
            writeln!(out, "{}", format_project(&project))?;
            Ok(())
        }
        Command::Rename { id, client_name } => {
            let patch = UpdateProject {
                client_name: Some(client_name),
            };
            let project = ProjectRepo::update(store, &id, &patch)?;
            writeln!(out, "Updated {}", format_project(&project))?;
            Ok(())
        }
        Command::Remove { id } => {
            if !ProjectRepo::delete(store, &id)? {
                return Err(CoreError::NotFound {
                    entity: "project",
                    id,
                }
                .into());
            }
            writeln!(out, "Removed {id}")?;
            Ok(())
        }
        Command::Search { query } => print_projects(out, &ProjectRepo::search(store, &query)),
        Command::Recent { limit } => {
            let limit = limit.unwrap_or(config.recent_limit);
            print_projects(out, &ProjectRepo::recent(store, limit))
        }
        Command::Profile(ProfileCommand::Show) => {
            match ProfileRepo::get(store) {
                Some(profile) => {
                    writeln!(out, "Name:  {}", profile.name)?;
                    writeln!(out, "Email: {}", profile.email)?;
                    if let Some(photo) = &profile.photo {
                        writeln!(out, "Photo: {photo}")?;
                    }
                }
                None => writeln!(out, "No profile saved")?,
            }
            Ok(())
        }
        Command::Profile(ProfileCommand::Set { name, email, photo }) => {
            ProfileRepo::save(store, &UserProfile { name, email, photo })?;
            writeln!(out, "Profile saved")?;
            Ok(())
        }
        Command::Export { out: dir } => {
            let path = export_to(store, &dir)?;
            writeln!(out, "Exported to {}", path.display())?;
            Ok(())
        }
        Command::Import { file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("reading backup {}", file.display()))?;
            let summary = import_all(store, &contents)?;
            writeln!(
                out,
                "Imported {} project(s){}",
                summary.projects_imported,
                if summary.profile_imported { " and the profile" } else { "" }
            )?;
            Ok(())
        }
        Command::Clear { yes } => {
            if !yes {
                bail!("refusing to delete all data without --yes");
            }
            clear_all(store)?;
            writeln!(out, "All data cleared")?;
            Ok(())
        }
        Command::Stats => {
            let stats = storage_stats(store);
            writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            Ok(())
        }
    }
}

/// Write a dated backup into `dir`, returning the file path.
pub fn export_to(store: &dyn KeyValueStore, dir: &Path) -> Result<std::path::PathBuf> {
    let contents = export_all(store)?;
    let path = dir.join(backup_file_name(chrono::Utc::now().date_naive()));
    std::fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "Backup written");
    Ok(path)
}

/// One-line rendering: id, creation date and client name.
pub fn format_project(project: &Project) -> String {
    format!(
        "{}  {}  {}",
        project.id,
        project.created_at.format("%Y-%m-%d %H:%M"),
        project.client_name
    )
}

fn print_projects(out: &mut dyn Write, projects: &[Project]) -> Result<()> {
    if projects.is_empty() {
        writeln!(out, "No projects")?;
    }
    for project in projects {
        writeln!(out, "{}", format_project(project))?;
    }
    Ok(())
}
