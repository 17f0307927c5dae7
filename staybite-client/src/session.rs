//! Persistent session store: the client-local-storage analog.
//!
//! Token and user live under the same fixed keys the browser build used and
//! are always written or cleared together. Flows hold one shared store
//! instead of reaching into ambient global state, and can subscribe to a
//! broadcast channel to hear about sign-in/sign-out from elsewhere in the
//! process. A sign-out performed by another process is not observed until
//! the next explicit `reload`.

use chrono::Utc;
use staybite_shared::models::{SessionEvent, UserProfile};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tokio::sync::broadcast;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stored user record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

pub struct SessionStore {
    dir: PathBuf,
    current: RwLock<Option<Session>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Open the store, creating the storage directory if needed, and read
    /// whatever session is already on disk.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, SessionError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let (events, _) = broadcast::channel(16);
        let store = Self {
            dir,
            current: RwLock::new(None),
            events,
        };
        store.reload()?;
        Ok(store)
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_KEY)
    }

    /// Re-read the persisted keys. Both must be present and well-formed for
    /// a session to exist; anything else counts as signed out.
    pub fn reload(&self) -> Result<(), SessionError> {
        let session = match (
            fs::read_to_string(self.token_path()),
            fs::read_to_string(self.user_path()),
        ) {
            (Ok(token), Ok(user_json)) => {
                let user: UserProfile = serde_json::from_str(&user_json)?;
                Some(Session { token, user })
            }
            _ => None,
        };
        *self.current.write().expect("session lock poisoned") = session;
        Ok(())
    }

    pub fn session(&self) -> Option<Session> {
        self.current.read().expect("session lock poisoned").clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .expect("session lock poisoned")
            .is_some()
    }

    /// Persist a fresh session. Both keys are written together, then
    /// subscribers are notified.
    pub fn sign_in(&self, token: String, user: UserProfile) -> Result<(), SessionError> {
        fs::write(self.token_path(), &token)?;
        fs::write(self.user_path(), serde_json::to_string(&user)?)?;
        *self.current.write().expect("session lock poisoned") = Some(Session {
            token,
            user: user.clone(),
        });
        let _ = self.events.send(SessionEvent::SignedIn {
            user,
            at: Utc::now(),
        });
        tracing::info!("session stored");
        Ok(())
    }

    /// Remove both keys. Idempotent: signing out while signed out is fine.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        for path in [self.token_path(), self.user_path()] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        *self.current.write().expect("session lock poisoned") = None;
        let _ = self.events.send(SessionEvent::SignedOut { at: Utc::now() });
        tracing::info!("session cleared");
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staybite_shared::models::Role;

    fn profile() -> UserProfile {
        UserProfile {
            id: "665f1c2e9b1d2a0012a4e111".into(),
            full_name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            role: Role::User,
        }
    }

    #[test]
    fn sign_in_persists_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        store.sign_in("tok-123".into(), profile()).unwrap();

        assert!(dir.path().join(TOKEN_KEY).exists());
        assert!(dir.path().join(USER_KEY).exists());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn sign_out_clears_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        store.sign_in("tok-123".into(), profile()).unwrap();
        store.sign_out().unwrap();

        assert!(!dir.path().join(TOKEN_KEY).exists());
        assert!(!dir.path().join(USER_KEY).exists());
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
        // Second sign-out is a no-op, not an error.
        store.sign_out().unwrap();
    }

    #[test]
    fn fresh_store_picks_up_existing_session() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = SessionStore::open(dir.path()).unwrap();
            store.sign_in("tok-456".into(), profile()).unwrap();
        }
        let reopened = SessionStore::open(dir.path()).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("tok-456"));
        assert_eq!(reopened.user().unwrap().email, "asha@example.com");
    }

    #[test]
    fn external_sign_out_is_seen_only_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        store.sign_in("tok-789".into(), profile()).unwrap();

        // Another process clears the storage behind our back.
        fs::remove_file(dir.path().join(TOKEN_KEY)).unwrap();
        fs::remove_file(dir.path().join(USER_KEY)).unwrap();
        assert!(store.is_authenticated());

        store.reload().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn token_without_user_counts_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TOKEN_KEY), "orphan").unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn subscribers_hear_sign_in_and_sign_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        let mut rx = store.subscribe();

        store.sign_in("tok-123".into(), profile()).unwrap();
        store.sign_out().unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            SessionEvent::SignedIn { .. }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            SessionEvent::SignedOut { .. }
        ));
    }
}
