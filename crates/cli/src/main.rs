//! `arqdesign` -- manage client projects stored in a local data directory.
//!
//! # Environment variables
//!
//! | Variable                 | Required | Default      | Description                         |
//! |--------------------------|----------|--------------|-------------------------------------|
//! | `ARQDESIGN_DATA_DIR`     | no       | `.arqdesign` | Directory holding the stored data   |
//! | `ARQDESIGN_RECENT_LIMIT` | no       | `5`          | Default size of the `recent` list   |
//! | `RUST_LOG`               | no       | `arqdesign_cli=info,arqdesign_store=info` | Log filter |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arqdesign_cli::cli::Cli;
use arqdesign_cli::commands;
use arqdesign_cli::config::CliConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arqdesign_cli=info,arqdesign_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "Opening store");

    let store = arqdesign_store::open_file_store(&config.data_dir)?;
    let stdout = std::io::stdout();
    commands::run(cli.command, store.as_ref(), &config, &mut stdout.lock())
}
