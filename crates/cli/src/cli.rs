use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage client projects and the user profile stored on this machine.
#[derive(Debug, Parser)]
#[command(name = "arqdesign", version)]
pub struct Cli {
    /// Data directory (overrides `ARQDESIGN_DATA_DIR`)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every project, newest first
    List,
    /// Create a project for a client
    Add { client_name: String },
    /// Show one project
    Show { id: String },
    /// Change a project's client name
    Rename { id: String, client_name: String },
    /// Delete a project
    Remove { id: String },
    /// Find projects whose client name contains the query
    Search { query: String },
    /// Most recently created projects
    Recent {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show or replace the user profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Write a dated backup file
    Export {
        /// Directory to write the backup into
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },
    /// Replace stored data with the contents of a backup file
    Import { file: PathBuf },
    /// Delete all stored projects and the profile
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Storage usage summary
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Print the stored profile
    Show,
    /// Save the profile, replacing any existing one
    Set {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Absolute URL of a profile photo
        #[arg(long)]
        photo: Option<String>,
    },
}
