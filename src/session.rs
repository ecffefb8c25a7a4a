//! Login state kept in a local key/value store.
//!
//! The store is a flat JSON object of string keys to string values, the same
//! shape browser local storage has. Only two keys matter here: `token` and
//! `user`, the latter holding the profile as a JSON string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::{Result, ShowcaseError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// File-backed string map.
#[derive(Debug, Default)]
pub struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store at `path`. A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!("Ignoring malformed local store {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Could not read local store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text).map_err(|source| ShowcaseError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Who is signed in, as far as the local store says.
#[derive(Debug)]
pub struct Session {
    store: LocalStore,
}

impl Session {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(LocalStore::open(path))
    }

    pub fn token(&self) -> Option<&str> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The signed-in user, or `None` when there is no token or the stored
    /// profile does not parse.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.token()?;
        let blob = self.store.get(USER_KEY)?;
        match serde_json::from_str(blob) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!("Stored user profile is malformed: {}", e);
                None
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Forget the token and profile, then persist the store.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.store.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn signed_in_store(dir: &Path) -> LocalStore {
        let mut store = LocalStore::open(dir.join("storage.json"));
        store.set(TOKEN_KEY, "abc123");
        store.set(USER_KEY, r#"{"name":"Alex","email":"alex@example.com"}"#);
        store.save().unwrap();
        store
    }

    #[test]
    fn test_missing_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path().join("nothing.json"));
        assert_eq!(session.token(), None);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_reads_user_from_saved_store() {
        let dir = tempfile::tempdir().unwrap();
        signed_in_store(dir.path());
        let session = Session::open(dir.path().join("storage.json"));
        let user = session.current_user().unwrap();
        assert_eq!(user.name, "Alex");
        assert_eq!(user.email, "alex@example.com");
    }

    #[test]
    fn test_malformed_profile_means_no_user() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = signed_in_store(dir.path());
        store.set(USER_KEY, "{not json");
        let session = Session::new(store);
        assert_eq!(session.token(), Some("abc123"));
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_profile_without_token_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = signed_in_store(dir.path());
        store.set(TOKEN_KEY, "");
        assert!(!Session::new(store).is_signed_in());
    }

    #[test]
    fn test_malformed_store_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let store = LocalStore::open(&path);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_sign_out_clears_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = signed_in_store(dir.path());
        store.set("theme", "dark");
        store.save().unwrap();

        let mut session = Session::new(store);
        session.sign_out().unwrap();
        assert!(!session.is_signed_in());

        let reopened = LocalStore::open(dir.path().join("storage.json"));
        assert_eq!(reopened.get(TOKEN_KEY), None);
        assert_eq!(reopened.get(USER_KEY), None);
        assert_eq!(reopened.get("theme"), Some("dark"));
    }
}
