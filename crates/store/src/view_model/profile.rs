use arqdesign_core::error::CoreError;
use arqdesign_core::profile::UserProfile;

use crate::repositories::ProfileRepo;
use crate::SharedStore;

/// The user profile plus a save action.
pub struct ProfileViewModel {
    store: SharedStore,
    profile: Option<UserProfile>,
    loading: bool,
    error: Option<String>,
}

impl ProfileViewModel {
    pub async fn new(store: SharedStore) -> Self {
        let mut vm = Self {
            store,
            profile: None,
            loading: true,
            error: None,
        };
        vm.refresh().await;
        vm
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        self.profile = ProfileRepo::get(self.store.as_ref());
        self.loading = false;
    }

    /// Validate and save `profile`, replacing the local copy on success.
    pub async fn update(&mut self, profile: UserProfile) -> Result<(), CoreError> {
        self.error = None;
        match ProfileRepo::save(self.store.as_ref(), &profile) {
            Ok(()) => {
                self.profile = Some(profile);
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
