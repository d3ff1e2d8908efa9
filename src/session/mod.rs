//! Session store
//!
//! Holds the signed-in user, or nothing. The record is persisted as a JSON
//! blob under [`SESSION_KEY`] and rehydrated once by [`SessionStore::initialize`].
//!
//! Login and signup never fail: there is no backend, so after the simulated
//! delay a session is always set. Persistence failures do not undo the
//! in-memory state; they are logged and handed back so callers can decide.

mod record;

pub use record::{ProfilePatch, Session};

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{VennError, VennResult};
use crate::storage::{KeyValueStore, StorageError, SESSION_KEY};

/// Where the session lifecycle currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// `initialize` has not run yet
    Unknown,
    Anonymous,
    Authenticated,
}

/// Single-writer store for the current session
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
    session: Option<Session>,
    loaded: bool,
    delay: Duration,
}

impl SessionStore {
    /// Create a store that has not yet read persisted state
    pub fn new(kv: Arc<dyn KeyValueStore>, delay: Duration) -> Self {
        Self {
            kv,
            session: None,
            loaded: false,
            delay,
        }
    }

    /// True until `initialize` has completed
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    pub fn status(&self) -> SessionStatus {
        match (self.loaded, &self.session) {
            (false, _) => SessionStatus::Unknown,
            (true, None) => SessionStatus::Anonymous,
            (true, Some(_)) => SessionStatus::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Rehydrate the persisted session
    ///
    /// On a missing blob the store is anonymous. On a read or parse failure the
    /// store is also anonymous, and the error is returned.
    pub fn initialize(&mut self) -> Result<(), StorageError> {
        let result = self.read_persisted();
        self.loaded = true;

        match result {
            Ok(session) => {
                self.session = session;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Could not restore session, continuing signed out");
                self.session = None;
                Err(e)
            }
        }
    }

    fn read_persisted(&self) -> Result<Option<Session>, StorageError> {
        match self.kv.get(SESSION_KEY)? {
            Some(blob) => serde_json::from_str(&blob)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(format!("session record: {}", e))),
            None => Ok(None),
        }
    }

    /// Sign in; the credentials are not checked against anything
    pub async fn login(&mut self, identifier: &str, _secret: &str) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        info!(identifier, "Signed in");
        self.establish(Session::demo_user())
    }

    /// Create an account and sign in as it
    pub async fn signup(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        _secret: &str,
    ) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        let user_id = chrono::Utc::now().timestamp_millis().to_string();
        let session = Session::new(user_id, first_name, last_name, email);
        info!(user_id = %session.user_id, "Signed up");
        self.establish(session)
    }

    /// Merge `patch` into the current session and persist it
    ///
    /// Returns `Ok(false)` when nobody is signed in.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Result<bool, StorageError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        patch.apply_to(session);
        self.persist()?;
        Ok(true)
    }

    /// Sign out and forget the persisted session
    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(session) = self.session.take() {
            info!(user_id = %session.user_id, "Signed out");
        }
        self.kv.remove(SESSION_KEY).inspect_err(|e| {
            warn!(error = %e, "Could not remove persisted session");
        })
    }

    fn establish(&mut self, session: Session) -> Result<(), StorageError> {
        self.session = Some(session);
        self.loaded = true;
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let blob =
            serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.kv.set(SESSION_KEY, &blob).inspect_err(|e| {
            warn!(error = %e, "Could not persist session");
        })
    }
}

/// Inline check on the sign-in form; the only validation message in the app
pub fn validate_credentials(identifier: &str, secret: &str) -> VennResult<()> {
    if identifier.is_empty() || secret.is_empty() {
        return Err(VennError::Validation("Please fill in all fields".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::testing::FailingStore;
    use crate::storage::MemoryStore;

    const DELAY: Duration = Duration::from_millis(800);

    fn store_with(kv: Arc<dyn KeyValueStore>) -> SessionStore {
        SessionStore::new(kv, DELAY)
    }

    #[test]
    fn test_loading_until_initialized() {
        let mut store = store_with(Arc::new(MemoryStore::new()));
        assert!(store.is_loading());
        assert_eq!(store.status(), SessionStatus::Unknown);

        store.initialize().unwrap();
        assert!(!store.is_loading());
        assert_eq!(store.status(), SessionStatus::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_is_idempotent() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store_with(kv.clone()).login("a", "b").await.unwrap();

        let mut store = store_with(kv);
        store.initialize().unwrap();
        let first = store.current().cloned();
        store.initialize().unwrap();
        assert_eq!(store.current().cloned(), first);
        assert!(first.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_always_succeeds_and_rehydrates() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut store = store_with(kv.clone());
        store.initialize().unwrap();

        let started = tokio::time::Instant::now();
        store.login("", "wrong").await.unwrap();
        assert!(started.elapsed() >= DELAY);
        assert_eq!(store.status(), SessionStatus::Authenticated);
        assert_eq!(store.current().unwrap().display_name(), "Confidence Ezeorah");

        // A fresh process sees the same session
        let mut next = store_with(kv);
        next.initialize().unwrap();
        assert_eq!(next.current(), store.current());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_clears_persistence() {
        let kv = Arc::new(MemoryStore::new());
        let mut store = store_with(kv.clone());
        store.login("me@venn.ca", "pw").await.unwrap();
        assert!(!kv.is_empty());

        store.logout().unwrap();
        assert!(!store.is_authenticated());
        assert!(kv.is_empty());

        let mut next = store_with(kv);
        next.initialize().unwrap();
        assert_eq!(next.status(), SessionStatus::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signup_derives_initials() {
        let mut store = store_with(Arc::new(MemoryStore::new()));
        store
            .signup("ada", "lovelace", "ada@example.com", "pw")
            .await
            .unwrap();

        let session = store.current().unwrap();
        assert_eq!(session.avatar_initials, "AL");
        assert_eq!(session.email, "ada@example.com");
        assert!(session.phone.is_none());
        assert!(session.user_id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_anonymous() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(SESSION_KEY, "{not json").unwrap();

        let mut store = store_with(kv);
        let err = store.initialize().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
        assert_eq!(store.status(), SessionStatus::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_storage_failures_are_reported_not_fatal() {
        let mut store = store_with(Arc::new(FailingStore));

        assert!(store.initialize().is_err());
        assert_eq!(store.status(), SessionStatus::Anonymous);

        // The session is established even though it could not be saved
        assert!(store.login("a", "b").await.is_err());
        assert!(store.is_authenticated());

        assert!(store.logout().is_err());
        assert!(!store.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_profile() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut store = store_with(kv.clone());
        store.initialize().unwrap();
        assert!(!store.update_profile(ProfilePatch::default()).unwrap());

        store.login("a", "b").await.unwrap();
        let patch = ProfilePatch {
            company: Some("Acme".into()),
            ..ProfilePatch::default()
        };
        assert!(store.update_profile(patch).unwrap());

        let mut next = store_with(kv);
        next.initialize().unwrap();
        let session = next.current().unwrap();
        assert_eq!(session.company.as_deref(), Some("Acme"));
        assert_eq!(session.phone.as_deref(), Some("+1 (416) 555-0142"));
    }

    #[test]
    fn test_validate_credentials() {
        let err = validate_credentials("", "pw").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Please fill in all fields");
        assert!(validate_credentials("me@venn.ca", "").is_err());
        assert!(validate_credentials("me@venn.ca", "pw").is_ok());
    }
}
