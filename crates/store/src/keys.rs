//! Fixed storage keys.

/// JSON array of every project, newest first.
pub const PROJECTS_KEY: &str = "arqdesign_projects";

/// JSON object holding the single user profile.
pub const USER_PROFILE_KEY: &str = "arqdesign_user_profile";

/// Every key owned by this store.
pub const ALL_KEYS: &[&str] = &[PROJECTS_KEY, USER_PROFILE_KEY];
