//! Explicit session context for the signed-in traveler.
//!
//! The profile is read from storage once, when the context is loaded, and
//! every change is written through before the in-memory copy is updated.

use crate::domain::user::{UpdateProfile, UserProfile};
use crate::repository::ProfileStore;
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    profile: Option<UserProfile>,
}

impl SessionContext {
    /// Session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn load<S>(store: &S) -> RepositoryResult<Self>
    where
        S: ProfileStore + ?Sized,
    {
        let profile = store.load_profile()?;
        if let Some(profile) = &profile {
            log::info!("Restored session for {}", profile.email);
        }
        Ok(Self { profile })
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.name.as_str())
    }

    pub fn sign_in<S>(&mut self, store: &S, profile: UserProfile) -> RepositoryResult<&UserProfile>
    where
        S: ProfileStore + ?Sized,
    {
        store.save_profile(&profile)?;
        Ok(self.profile.insert(profile))
    }

    /// Applies `update` to the current profile; fails when signed out.
    pub fn update<S>(&mut self, store: &S, update: UpdateProfile) -> RepositoryResult<&UserProfile>
    where
        S: ProfileStore + ?Sized,
    {
        let mut profile = self.profile.clone().ok_or(RepositoryError::NotFound)?;
        profile.apply(update);
        store.save_profile(&profile)?;
        Ok(self.profile.insert(profile))
    }

    pub fn sign_out<S>(&mut self, store: &S) -> RepositoryResult<()>
    where
        S: ProfileStore + ?Sized,
    {
        store.clear_profile()?;
        self.profile = None;
        Ok(())
    }
}
