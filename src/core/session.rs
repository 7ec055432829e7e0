//! Session model and the session store seam
//!
//! The session itself is issued by the hosted auth provider; this module only
//! describes what the app reads from it and how it is notified of changes:
//! - `Session` / `User` records as returned by the provider
//! - `AuthState` as seen by the UI (loading is distinct from anonymous)
//! - `SessionStore` trait with an `on_change` subscription
//! - `MemorySessionStore` for tests and server-side rendering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::error::AuthError;
use super::role::{Role, RoleError};

/// Free-form metadata attached to a user at registration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identity record owned by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Validated role from the metadata bag
    pub fn role(&self) -> Result<Role, RoleError> {
        Role::from_metadata(self.user_metadata.role.as_deref())
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> String {
        match self.user_metadata.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// First word of the full name, else the email's local part, else "Student"
    pub fn first_name(&self) -> String {
        let from_name = self
            .user_metadata
            .full_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next());
        let from_email = self.email.split('@').next().filter(|local| !local.is_empty());
        from_name.or(from_email).unwrap_or("Student").to_string()
    }

    /// Registration date, e.g. "March 4, 2025"
    pub fn joined_label(&self) -> Option<String> {
        self.created_at.map(|at| at.format("%B %-d, %Y").to_string())
    }
}

/// Bearer credential plus the user it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Unix seconds; `None` when the provider did not say
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// Whether the access token expires within `margin_secs` of `now_secs`
    pub fn is_expired(&self, now_secs: i64, margin_secs: i64) -> bool {
        self.expires_at
            .map(|expires_at| expires_at <= now_secs + margin_secs)
            .unwrap_or(false)
    }
}

/// Authentication state as observed by the component tree
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial lookup has not finished yet
    #[default]
    Loading,
    /// Lookup finished and nobody is signed in
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Anonymous,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }

    /// Apply the result of the initial session lookup
    ///
    /// A change event that arrived while the lookup was in flight is newer,
    /// so only a still-loading state takes the lookup result. A failed lookup
    /// counts as signed out.
    pub fn settle(self, lookup: Result<Option<Session>, AuthError>) -> Self {
        match self {
            AuthState::Loading => AuthState::from_session(lookup.unwrap_or(None)),
            settled => settled,
        }
    }
}

/// Kind of change reported by the session store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChangeEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

pub type ChangeHandler = Arc<dyn Fn(AuthChangeEvent, Option<Session>) + Send + Sync>;

/// Handle returned by `SessionStore::on_change`
///
/// Dropping it (or calling `unsubscribe`) detaches the handler.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Source of the current session and its change notifications
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    /// Current session, refreshing it first if the store supports that
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    /// Register a handler for every later session change
    fn on_change(&self, handler: ChangeHandler) -> Subscription;

    /// Invalidate the session
    async fn sign_out(&self) -> Result<(), AuthError>;
}

impl<S: SessionStore> SessionStore for Arc<S> {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        (**self).get_session().await
    }

    fn on_change(&self, handler: ChangeHandler) -> Subscription {
        (**self).on_change(handler)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        (**self).sign_out().await
    }
}

/// Forward every change on `store` to `on_state` as a new `AuthState`
pub fn watch_session<S: SessionStore>(
    store: &S,
    on_state: impl Fn(AuthState) + Send + Sync + 'static,
) -> Subscription {
    store.on_change(Arc::new(move |_event, session| {
        on_state(AuthState::from_session(session))
    }))
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
struct ListenerMap {
    next_id: u64,
    handlers: Vec<(u64, ChangeHandler)>,
}

/// Handler registry shared by session store implementations
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Arc<Mutex<ListenerMap>>,
}

impl Listeners {
    pub fn subscribe(&self, handler: ChangeHandler) -> Subscription {
        let id = {
            let mut map = lock(&self.inner);
            let id = map.next_id;
            map.next_id += 1;
            map.handlers.push((id, handler));
            id
        };

        let registry: Weak<Mutex<ListenerMap>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                lock(&registry).handlers.retain(|(handler_id, _)| *handler_id != id);
            }
        })
    }

    /// Call every handler; the registry is not locked while handlers run
    pub fn emit(&self, event: AuthChangeEvent, session: Option<Session>) {
        let handlers: Vec<ChangeHandler> = lock(&self.inner)
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in handlers {
            handler(event, session.clone());
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory session store
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    session: Arc<Mutex<Option<Session>>>,
    listeners: Listeners,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let store = Self::default();
        *lock(&store.session) = Some(session);
        store
    }

    /// Replace the session and notify subscribers
    pub fn set_session(&self, event: AuthChangeEvent, session: Option<Session>) {
        *lock(&self.session) = session.clone();
        self.listeners.emit(event, session);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl SessionStore for MemorySessionStore {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(lock(&self.session).clone())
    }

    fn on_change(&self, handler: ChangeHandler) -> Subscription {
        self.listeners.subscribe(handler)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.set_session(AuthChangeEvent::SignedOut, None);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn user_with_role(role: Option<&str>) -> User {
        User {
            id: "user-1".to_string(),
            email: "asha@example.edu".to_string(),
            user_metadata: UserMetadata {
                full_name: Some("Asha Rao".to_string()),
                role: role.map(str::to_string),
                extra: Map::new(),
            },
            created_at: None,
        }
    }

    pub fn session_with_role(role: Option<&str>) -> Session {
        Session {
            access_token: "token-abc".to_string(),
            refresh_token: "refresh-abc".to_string(),
            expires_at: Some(2_000_000_000),
            user: user_with_role(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_user_role_validation() {
        assert_eq!(user_with_role(Some("student")).role(), Ok(Role::Student));
        assert_eq!(user_with_role(None).role(), Err(RoleError::Missing));
        assert_eq!(
            user_with_role(Some("superuser")).role(),
            Err(RoleError::Unknown("superuser".to_string()))
        );
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = user_with_role(None);
        assert_eq!(user.display_name(), "Asha Rao");
        user.user_metadata.full_name = None;
        assert_eq!(user.display_name(), "asha");
    }

    #[test]
    fn test_first_name() {
        let mut user = user_with_role(Some("student"));
        assert_eq!(user.first_name(), "Asha");
        user.user_metadata.full_name = Some("   ".to_string());
        assert_eq!(user.first_name(), "asha");
        user.email = String::new();
        assert_eq!(user.first_name(), "Student");
    }

    #[test]
    fn test_joined_label() {
        let json = r#"{"id":"u-1","email":"a@b.c","created_at":"2025-03-04T10:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.joined_label().as_deref(), Some("March 4, 2025"));
        assert_eq!(user_with_role(None).joined_label(), None);
    }

    #[test]
    fn test_user_deserializes_provider_payload() {
        let json = r#"{
            "id": "u-42",
            "email": "t@example.edu",
            "aud": "authenticated",
            "user_metadata": {"full_name": "T. Teacher", "role": "teacher", "avatar": "x.png"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), Ok(Role::Teacher));
        assert_eq!(user.user_metadata.extra.get("avatar"), Some(&Value::from("x.png")));
    }

    #[test]
    fn test_session_expiry_margin() {
        let session = session_with_role(Some("student"));
        assert!(!session.is_expired(1_000_000_000, 60));
        assert!(session.is_expired(2_000_000_000 - 30, 60));

        let open_ended = Session {
            expires_at: None,
            ..session
        };
        assert!(!open_ended.is_expired(i64::MAX - 100, 60));
    }

    #[test]
    fn test_auth_state_from_session() {
        assert_eq!(AuthState::from_session(None), AuthState::Anonymous);
        let state = AuthState::from_session(Some(session_with_role(Some("admin"))));
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("user-1"));
        assert!(!state.is_loading());
        assert!(AuthState::default().is_loading());
    }

    #[tokio::test]
    async fn test_memory_store_notifies_until_unsubscribed() {
        let store = MemorySessionStore::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let subscription = store.on_change(Arc::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(store.subscriber_count(), 1);

        store.set_session(
            AuthChangeEvent::SignedIn,
            Some(session_with_role(Some("student"))),
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(store.get_session().await.unwrap().is_some());

        subscription.unsubscribe();
        assert_eq!(store.subscriber_count(), 0);

        store.sign_out().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(store.get_session().await.unwrap().is_none());
    }

    #[test]
    fn test_dropping_subscription_detaches_handler() {
        let listeners = Listeners::default();
        {
            let _subscription = listeners.subscribe(Arc::new(|_, _| {}));
            assert_eq!(listeners.len(), 1);
        }
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_handler_may_subscribe_during_emit() {
        let listeners = Listeners::default();
        let nested = listeners.clone();
        let kept = Arc::new(Mutex::new(Vec::new()));
        let kept_inner = kept.clone();
        let _subscription = listeners.subscribe(Arc::new(move |_, _| {
            lock(&kept_inner).push(nested.subscribe(Arc::new(|_, _| {})));
        }));

        listeners.emit(AuthChangeEvent::SignedOut, None);
        assert_eq!(listeners.len(), 2);
    }

    #[test]
    fn test_settle_only_replaces_loading() {
        let session = session_with_role(Some("student"));
        assert_eq!(
            AuthState::Loading.settle(Ok(Some(session.clone()))),
            AuthState::Authenticated(session.clone())
        );
        assert_eq!(
            AuthState::Loading.settle(Err(AuthError::Network("offline".into()))),
            AuthState::Anonymous
        );
        assert_eq!(
            AuthState::Anonymous.settle(Ok(Some(session))),
            AuthState::Anonymous
        );
    }

    #[test]
    fn test_watch_session_maps_events_to_state() {
        let store = MemorySessionStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let subscription = watch_session(&store, move |state| lock(&sink).push(state));

        let session = session_with_role(Some("teacher"));
        store.set_session(AuthChangeEvent::SignedIn, Some(session.clone()));
        store.set_session(AuthChangeEvent::SignedOut, None);
        drop(subscription);
        store.set_session(AuthChangeEvent::SignedIn, Some(session.clone()));

        assert_eq!(
            *lock(&seen),
            vec![AuthState::Authenticated(session), AuthState::Anonymous]
        );
        assert_eq!(store.subscriber_count(), 0);
    }
}
