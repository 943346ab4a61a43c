use log::warn;
use model::admin_user::AdminUser;
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// Fixed persistence keys. The browser build keeps these in local storage;
/// the CLI keeps them in a file. Either way the session only ever reads and
/// writes these three.
pub const TOKEN_KEY: &str = "nakmuay.auth.token";
pub const REFRESH_TOKEN_KEY: &str = "nakmuay.auth.refresh";
pub const PROFILE_KEY: &str = "nakmuay.auth.profile";

pub trait TokenStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, used by tests and as a fallback when no persistent
/// storage is available.
#[derive(Default)]
pub struct MemoryStore {
    map: parking_lot::Mutex<HashMap<String, String>>,
}

impl TokenStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.map.lock().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.map.lock().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.map.lock().remove(key);
    }
}

#[derive(Clone)]
struct SessionState {
    token: String,
    refresh_token: String,
    profile: AdminUser,
}

/// Process-wide session, injected wherever the current token or profile is
/// needed. `hydrate` restores a previous sign-in from the store on startup;
/// `sign_out` clears both the store and the in-memory state.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<Option<SessionState>>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn hydrate(store: Arc<dyn TokenStore>) -> Self {
        let state = match (store.load(TOKEN_KEY), store.load(REFRESH_TOKEN_KEY)) {
            (Some(token), Some(refresh_token)) => {
                let profile = store
                    .load(PROFILE_KEY)
                    .and_then(|raw| match serde_json::from_str(&raw) {
                        Ok(profile) => Some(profile),
                        Err(err) => {
                            warn!("stored profile is unreadable: {err}");
                            None
                        }
                    });
                profile.map(|profile| SessionState {
                    token,
                    refresh_token,
                    profile,
                })
            }
            _ => None,
        };
        Session {
            state: Arc::new(RwLock::new(state)),
            store,
        }
    }

    pub fn signed_in(&self) -> bool {
        self.state.read().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.refresh_token.clone())
    }

    pub fn profile(&self) -> Option<AdminUser> {
        self.state.read().as_ref().map(|s| s.profile.clone())
    }

    pub fn sign_in(&self, token: String, refresh_token: String, profile: AdminUser) {
        self.store.save(TOKEN_KEY, &token);
        self.store.save(REFRESH_TOKEN_KEY, &refresh_token);
        match serde_json::to_string(&profile) {
            Ok(raw) => self.store.save(PROFILE_KEY, &raw),
            Err(err) => warn!("failed to persist profile: {err}"),
        }
        *self.state.write() = Some(SessionState {
            token,
            refresh_token,
            profile,
        });
    }

    /// Token rotation after a refresh call; the profile stays as is.
    pub fn update_tokens(&self, token: String, refresh_token: String) {
        self.store.save(TOKEN_KEY, &token);
        self.store.save(REFRESH_TOKEN_KEY, &refresh_token);
        let mut state = self.state.write();
        if let Some(state) = state.as_mut() {
            state.token = token;
            state.refresh_token = refresh_token;
        }
    }

    pub fn sign_out(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(PROFILE_KEY);
        *self.state.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{admin_user::Role, ids::AdminUserId};

    fn profile() -> AdminUser {
        AdminUser {
            id: AdminUserId::new("u-1"),
            email: "admin@example.com".to_owned(),
            display_name: "Admin".to_owned(),
            role: Role::Admin,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_sign_in_persists_and_hydrates() {
        let store = Arc::new(MemoryStore::default());
        let session = Session::hydrate(store.clone());
        assert!(!session.signed_in());

        session.sign_in("tok".to_owned(), "ref".to_owned(), profile());
        assert_eq!(session.token().as_deref(), Some("tok"));

        // a fresh session over the same store restores everything
        let restored = Session::hydrate(store);
        assert!(restored.signed_in());
        assert_eq!(restored.refresh_token().as_deref(), Some("ref"));
        assert_eq!(restored.profile().unwrap().email, "admin@example.com");
    }

    #[test]
    fn test_sign_out_clears_store_and_memory() {
        let store = Arc::new(MemoryStore::default());
        let session = Session::hydrate(store.clone());
        session.sign_in("tok".to_owned(), "ref".to_owned(), profile());
        session.sign_out();

        assert!(!session.signed_in());
        assert!(store.load(TOKEN_KEY).is_none());
        assert!(!Session::hydrate(store).signed_in());
    }

    #[test]
    fn test_corrupt_profile_means_signed_out() {
        let store = Arc::new(MemoryStore::default());
        store.save(TOKEN_KEY, "tok");
        store.save(REFRESH_TOKEN_KEY, "ref");
        store.save(PROFILE_KEY, "{not json");
        assert!(!Session::hydrate(store).signed_in());
    }

    #[test]
    fn test_update_tokens_keeps_profile() {
        let store = Arc::new(MemoryStore::default());
        let session = Session::hydrate(store);
        session.sign_in("tok".to_owned(), "ref".to_owned(), profile());
        session.update_tokens("tok2".to_owned(), "ref2".to_owned());
        assert_eq!(session.token().as_deref(), Some("tok2"));
        assert_eq!(session.profile().unwrap().display_name, "Admin");
    }
}
