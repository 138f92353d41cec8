//! Session state and its persistence.
//!
//! A [`Session`] is an explicit value passed to whoever needs it. The
//! [`SessionStore`] loads it once at startup and clears it on logout.

use scholarhub_domain::{ProfilePatch, User};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SessionError;

/// Current user and access token
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// Session after a successful login
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    /// Session after registration: the user is known but not signed in
    pub fn registered(user: User) -> Self {
        Self {
            user: Some(user),
            token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Apply a local profile edit; no-op without a user
    pub fn update_profile(&mut self, patch: ProfilePatch) -> bool {
        match self.user.as_mut() {
            Some(user) => {
                user.apply(patch);
                true
            }
            None => false,
        }
    }
}

/// JSON file holding the persisted session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured path or the platform data directory
    pub fn resolve(configured: Option<&Path>) -> Result<Self, SessionError> {
        if let Some(path) = configured {
            return Ok(Self::new(path));
        }
        let dir = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
        Ok(Self::new(dir.join("scholarhub").join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session.
    ///
    /// Only a file with both a user and a token restores a signed-in
    /// session; anything else starts anonymous.
    pub fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let stored: Session = serde_json::from_str(&content)?;
        if stored.is_authenticated() {
            tracing::debug!(path = %self.path.display(), "restored session");
            Ok(stored)
        } else {
            Ok(Session::default())
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove any persisted session
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("1", "Dr. María García", "maria.garcia@universidad.edu")
    }

    #[test]
    fn test_missing_file_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let session = store.load().unwrap();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));
        let session = Session::authenticated(user(), "tok-123".to_string());
        store.save(&session).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, session);

        store.clear().unwrap();
        assert!(!store.load().unwrap().is_authenticated());
        store.clear().unwrap();
    }

    #[test]
    fn test_user_without_token_not_restored() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save(&Session::registered(user())).unwrap();
        assert_eq!(store.load().unwrap(), Session::default());
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            SessionStore::new(path).load(),
            Err(SessionError::Serialization(_))
        ));
    }

    #[test]
    fn test_update_profile() {
        let mut anonymous = Session::default();
        assert!(!anonymous.update_profile(ProfilePatch::default()));

        let mut session = Session::authenticated(user(), "t".to_string());
        assert!(session.update_profile(ProfilePatch {
            affiliation: Some("Universidad Digital".to_string()),
            ..Default::default()
        }));
        assert_eq!(session.user().map(|u| u.affiliation.as_str()), Some("Universidad Digital"));
    }
}
