use std::path::PathBuf;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".arqdesign";

/// Default number of projects shown by `recent`.
pub const DEFAULT_RECENT_LIMIT: usize = arqdesign_store::view_model::DEFAULT_RECENT_LIMIT;

/// Command-line configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding one JSON file per storage key.
    pub data_dir: PathBuf,
    /// Projects listed by `recent` when `--limit` is not given.
    pub recent_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default        |
    /// |--------------------------|----------------|
    /// | `ARQDESIGN_DATA_DIR`     | `.arqdesign`   |
    /// | `ARQDESIGN_RECENT_LIMIT` | `5`            |
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup("ARQDESIGN_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let recent_limit = lookup("ARQDESIGN_RECENT_LIMIT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.recent_limit);

        Self {
            data_dir,
            recent_limit,
        }
    }
}
