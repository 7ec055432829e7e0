//! Client for the hosted authentication provider
//!
//! Talks to the provider's REST API under `{auth_url}/auth/v1`. The current
//! session lives in a `SessionPersistence` backend (localStorage in the
//! browser, memory elsewhere) and every change is broadcast to `on_change`
//! subscribers.
//!
//! Expired access tokens are refreshed lazily from `get_session`. A refresh
//! gate serializes refreshes so concurrent callers don't spend the same
//! single-use refresh token twice.

use futures::lock::Mutex as AsyncMutex;
use leptos::logging::{log, warn};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use super::api_client::parse_body;
use super::clock::now_secs;
use super::error::AuthError;
use super::http::{HttpMethod, HttpRequest, HttpTransport, RequestBody};
use super::role::Role;
use super::route::with_query;
use super::session::{
    AuthChangeEvent, ChangeHandler, Listeners, Session, SessionStore, Subscription, User, lock,
};

/// Seconds before expiry at which a token is treated as expired
pub const REFRESH_MARGIN_SECS: i64 = 60;

const FALLBACK_AUTH_ERROR: &str = "Authentication failed";

/// Where the signed-in session is kept between page loads
pub trait SessionPersistence {
    fn load(&self) -> Result<Option<Session>, AuthError>;
    fn save(&self, session: &Session) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

/// Process-local persistence
#[derive(Clone, Default)]
pub struct MemoryPersistence {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(lock(&self.slot).clone())
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        *lock(&self.slot) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *lock(&self.slot) = None;
        Ok(())
    }
}

/// Token grant as returned by `/token` and `/signup`
#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

impl TokenGrant {
    fn into_session(self, now: i64) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: self
                .expires_at
                .or_else(|| self.expires_in.map(|secs| now + secs)),
            user: self.user,
        }
    }
}

/// Tokens carried in the fragment of an email link
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<i64>,
    /// Link type, e.g. `recovery` or `signup`
    pub link_type: Option<String>,
}

impl FragmentTokens {
    pub fn is_recovery(&self) -> bool {
        self.link_type.as_deref() == Some("recovery")
    }
}

/// Parse the `#access_token=...&type=recovery` fragment of an email link
pub fn session_from_fragment(fragment: &str, now: i64) -> Result<FragmentTokens, AuthError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(fragment.trim_start_matches('#'))
        .map_err(|_| AuthError::InvalidRecoveryLink)?;
    let get = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .filter(|value| !value.is_empty())
    };

    if let Some(description) = get("error_description").or_else(|| get("error")) {
        return Err(AuthError::Provider(description));
    }

    let access_token = get("access_token").ok_or(AuthError::InvalidRecoveryLink)?;
    let expires_at = get("expires_at")
        .and_then(|v| v.parse().ok())
        .or_else(|| {
            get("expires_in")
                .and_then(|v| v.parse::<i64>().ok())
                .map(|secs| now + secs)
        });

    Ok(FragmentTokens {
        access_token,
        refresh_token: get("refresh_token").unwrap_or_default(),
        expires_at,
        link_type: get("type"),
    })
}

/// Provider error text from an error body
fn provider_message(body: Option<&Value>) -> String {
    ["error_description", "msg", "message", "error"]
        .into_iter()
        .find_map(|field| {
            body.and_then(|value| value.get(field))
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
        })
        .unwrap_or(FALLBACK_AUTH_ERROR)
        .to_string()
}

/// Session store backed by the hosted auth provider
pub struct HostedAuth<T, P> {
    endpoint: String,
    anon_key: String,
    transport: T,
    persistence: P,
    listeners: Listeners,
    refresh_gate: AsyncMutex<()>,
}

impl<T: HttpTransport, P: SessionPersistence> HostedAuth<T, P> {
    pub fn new(auth_url: &str, anon_key: impl Into<String>, transport: T, persistence: P) -> Self {
        Self {
            endpoint: format!("{}/auth/v1", auth_url.trim_end_matches('/')),
            anon_key: anon_key.into(),
            transport,
            persistence,
            listeners: Listeners::default(),
            refresh_gate: AsyncMutex::new(()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> Result<Option<Value>, AuthError> {
        let token = bearer.unwrap_or(&self.anon_key);
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.endpoint, path),
            headers: vec![
                ("apikey".to_string(), self.anon_key.clone()),
                ("Authorization".to_string(), format!("Bearer {}", token)),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: body.map(|value| RequestBody::Json(value.to_string())),
        };

        let response = self.transport.send(request).await?;
        let data = parse_body(&response.body);

        if !response.ok() {
            return Err(AuthError::Provider(provider_message(data.as_ref())));
        }
        Ok(data)
    }

    async fn grant(&self, path: &str, body: Value) -> Result<Session, AuthError> {
        let data = self.request(HttpMethod::Post, path, None, Some(body)).await?;
        let grant: TokenGrant = data
            .ok_or_else(|| AuthError::Provider(FALLBACK_AUTH_ERROR.to_string()))
            .and_then(|value| {
                serde_json::from_value(value).map_err(|e| AuthError::Provider(e.to_string()))
            })?;
        Ok(grant.into_session(now_secs()))
    }

    fn install(&self, event: AuthChangeEvent, session: Session) -> Result<Session, AuthError> {
        self.persistence.save(&session)?;
        self.listeners.emit(event, Some(session.clone()));
        Ok(session)
    }

    fn drop_session(&self) -> Result<(), AuthError> {
        let cleared = self.persistence.clear();
        self.listeners.emit(AuthChangeEvent::SignedOut, None);
        cleared
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let session = self
            .grant(
                "/token?grant_type=password",
                json!({ "email": email, "password": password }),
            )
            .await?;
        log!("Signed in as {}", session.user.id);
        self.install(AuthChangeEvent::SignedIn, session)
    }

    /// Register a new account; `None` when the provider wants email confirmation first
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
    ) -> Result<Option<Session>, AuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name, "role": role.as_str() },
        });
        let data = self.request(HttpMethod::Post, "/signup", None, Some(body)).await?;

        match data.filter(|value| value.get("access_token").is_some()) {
            Some(value) => {
                let grant: TokenGrant =
                    serde_json::from_value(value).map_err(|e| AuthError::Provider(e.to_string()))?;
                let session = grant.into_session(now_secs());
                self.install(AuthChangeEvent::SignedIn, session).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Email a password reset link that lands on `redirect_to`
    pub async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), AuthError> {
        let path = with_query("/recover", "redirect_to", redirect_to);
        self.request(HttpMethod::Post, &path, None, Some(json!({ "email": email })))
            .await?;
        Ok(())
    }

    pub async fn update_password(&self, new_password: &str) -> Result<User, AuthError> {
        let session = self.get_session().await?.ok_or(AuthError::NotSignedIn)?;
        let data = self
            .request(
                HttpMethod::Put,
                "/user",
                Some(&session.access_token),
                Some(json!({ "password": new_password })),
            )
            .await?;

        let user: User = data
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| AuthError::Provider(e.to_string()))?
            .unwrap_or_else(|| session.user.clone());

        self.install(
            AuthChangeEvent::UserUpdated,
            Session {
                user: user.clone(),
                ..session
            },
        )?;
        Ok(user)
    }

    /// Fetch the user for `tokens` and make them the current session
    pub async fn adopt_session(&self, tokens: FragmentTokens) -> Result<Session, AuthError> {
        let data = self
            .request(HttpMethod::Get, "/user", Some(&tokens.access_token), None)
            .await?
            .ok_or(AuthError::InvalidRecoveryLink)?;
        let user: User =
            serde_json::from_value(data).map_err(|e| AuthError::Provider(e.to_string()))?;

        let event = if tokens.is_recovery() {
            AuthChangeEvent::PasswordRecovery
        } else {
            AuthChangeEvent::SignedIn
        };
        self.install(
            event,
            Session {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                expires_at: tokens.expires_at,
                user,
            },
        )
    }

    async fn refresh(&self, stale: Session) -> Result<Option<Session>, AuthError> {
        let _gate = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited
        match self.persistence.load()? {
            Some(current) if !current.is_expired(now_secs(), REFRESH_MARGIN_SECS) => {
                return Ok(Some(current));
            }
            None => return Ok(None),
            Some(_) => {}
        }

        let result = self
            .grant(
                "/token?grant_type=refresh_token",
                json!({ "refresh_token": stale.refresh_token }),
            )
            .await;

        match result {
            Ok(session) => self
                .install(AuthChangeEvent::TokenRefreshed, session)
                .map(Some),
            Err(AuthError::Network(msg)) => Err(AuthError::Network(msg)),
            Err(e) => {
                warn!("Token refresh rejected, signing out: {}", e);
                self.drop_session()?;
                Ok(None)
            }
        }
    }
}

impl<T: HttpTransport, P: SessionPersistence> SessionStore for HostedAuth<T, P> {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        match self.persistence.load()? {
            Some(session) if session.is_expired(now_secs(), REFRESH_MARGIN_SECS) => {
                self.refresh(session).await
            }
            other => Ok(other),
        }
    }

    fn on_change(&self, handler: ChangeHandler) -> Subscription {
        self.listeners.subscribe(handler)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.persistence.load()? {
            if let Err(e) = self
                .request(HttpMethod::Post, "/logout", Some(&session.access_token), None)
                .await
            {
                warn!("Provider logout failed, clearing local session anyway: {}", e);
            }
        }
        self.drop_session()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::core::http::mock::MockTransport;
    use crate::core::session::fixtures::session_with_role;

    const AUTH_URL: &str = "https://auth.zpluse.test/";

    fn client() -> (HostedAuth<MockTransport, MemoryPersistence>, MockTransport, MemoryPersistence) {
        let transport = MockTransport::new();
        let persistence = MemoryPersistence::new();
        let auth = HostedAuth::new(AUTH_URL, "anon-key", transport.clone(), persistence.clone());
        (auth, transport, persistence)
    }

    fn grant_body(access_token: &str, role: &str) -> String {
        json!({
            "access_token": access_token,
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-next",
            "user": {
                "id": "user-1",
                "email": "asha@example.edu",
                "user_metadata": { "full_name": "Asha Rao", "role": role }
            }
        })
        .to_string()
    }

    fn recorded_events(
        auth: &HostedAuth<MockTransport, MemoryPersistence>,
    ) -> (Arc<Mutex<Vec<AuthChangeEvent>>>, Subscription) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let subscription = auth.on_change(Arc::new(move |event, _| lock(&sink).push(event)));
        (events, subscription)
    }

    #[tokio::test]
    async fn test_sign_in_persists_and_notifies() {
        let (auth, transport, persistence) = client();
        let (events, _sub) = recorded_events(&auth);
        transport.respond(200, &grant_body("token-1", "student"));

        let session = auth
            .sign_in_with_password("asha@example.edu", "secret")
            .await
            .unwrap();

        assert_eq!(session.access_token, "token-1");
        assert!(session.expires_at.is_some());
        assert_eq!(persistence.load().unwrap(), Some(session));
        assert_eq!(*lock(&events), vec![AuthChangeEvent::SignedIn]);

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://auth.zpluse.test/auth/v1/token?grant_type=password"
        );
        assert_eq!(request.header("apikey"), Some("anon-key"));
    }

    #[tokio::test]
    async fn test_bad_credentials_use_error_description() {
        let (auth, transport, persistence) = client();
        transport.respond(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );

        let err = auth
            .sign_in_with_password("asha@example.edu", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::Provider("Invalid login credentials".into()));
        assert_eq!(persistence.load().unwrap(), None);
    }

    #[test]
    fn test_provider_message_fields() {
        assert_eq!(provider_message(Some(&json!({"msg": "User already registered"}))), "User already registered");
        assert_eq!(provider_message(Some(&json!({"message": "rate limited"}))), "rate limited");
        assert_eq!(provider_message(None), "Authentication failed");
    }

    #[tokio::test]
    async fn test_sign_up_sends_metadata() {
        let (auth, transport, _) = client();
        transport.respond(200, r#"{"id":"user-9","email":"new@example.edu"}"#);

        let session = auth
            .sign_up("new@example.edu", "pw123456", "New Teacher", Role::Teacher)
            .await
            .unwrap();
        assert!(session.is_none());

        let request = transport.last_request().unwrap();
        let Some(RequestBody::Json(body)) = request.body else {
            panic!("expected JSON body");
        };
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["data"]["role"], "teacher");
        assert_eq!(body["data"]["full_name"], "New Teacher");
    }

    #[tokio::test]
    async fn test_sign_up_with_immediate_session() {
        let (auth, transport, persistence) = client();
        transport.respond(200, &grant_body("token-s", "student"));

        let session = auth
            .sign_up("asha@example.edu", "pw123456", "Asha Rao", Role::Student)
            .await
            .unwrap();
        assert_eq!(session.map(|s| s.access_token), Some("token-s".to_string()));
        assert!(persistence.load().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_get_session_returns_fresh_session_without_network() {
        let (auth, transport, persistence) = client();
        persistence.save(&session_with_role(Some("admin"))).unwrap();

        let session = auth.get_session().await.unwrap().unwrap();
        assert_eq!(session.access_token, "token-abc");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_expired_session_is_refreshed() {
        let (auth, transport, persistence) = client();
        let (events, _sub) = recorded_events(&auth);
        let mut stale = session_with_role(Some("student"));
        stale.expires_at = Some(0);
        persistence.save(&stale).unwrap();
        transport.respond(200, &grant_body("token-2", "student"));

        let session = auth.get_session().await.unwrap().unwrap();

        assert_eq!(session.access_token, "token-2");
        assert_eq!(*lock(&events), vec![AuthChangeEvent::TokenRefreshed]);
        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/token?grant_type=refresh_token"));
        assert_eq!(
            request.body,
            Some(RequestBody::Json(r#"{"refresh_token":"refresh-abc"}"#.to_string()))
        );
    }

    #[tokio::test]
    async fn test_rejected_refresh_signs_out() {
        let (auth, transport, persistence) = client();
        let (events, _sub) = recorded_events(&auth);
        let mut stale = session_with_role(Some("student"));
        stale.expires_at = Some(0);
        persistence.save(&stale).unwrap();
        transport.respond(400, r#"{"error_description":"Invalid Refresh Token"}"#);

        assert_eq!(auth.get_session().await.unwrap(), None);
        assert_eq!(persistence.load().unwrap(), None);
        assert_eq!(*lock(&events), vec![AuthChangeEvent::SignedOut]);
    }

    #[tokio::test]
    async fn test_offline_refresh_keeps_session() {
        let (auth, transport, persistence) = client();
        let mut stale = session_with_role(Some("student"));
        stale.expires_at = Some(0);
        persistence.save(&stale).unwrap();
        transport.fail(ApiError::Network("offline".into()));

        let err = auth.get_session().await.unwrap_err();
        assert_eq!(err, AuthError::Network("offline".into()));
        assert!(persistence.load().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_when_logout_fails() {
        let (auth, transport, persistence) = client();
        let (events, _sub) = recorded_events(&auth);
        persistence.save(&session_with_role(Some("teacher"))).unwrap();
        transport.respond(500, "");

        auth.sign_out().await.unwrap();

        assert_eq!(persistence.load().unwrap(), None);
        assert_eq!(*lock(&events), vec![AuthChangeEvent::SignedOut]);
        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/logout"));
        assert_eq!(request.header("Authorization"), Some("Bearer token-abc"));
    }

    #[tokio::test]
    async fn test_reset_password_encodes_redirect() {
        let (auth, transport, _) = client();
        auth.reset_password_for_email("asha@example.edu", "https://zpluse.edu/reset-password")
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().unwrap().url,
            "https://auth.zpluse.test/auth/v1/recover?redirect_to=https%3A%2F%2Fzpluse.edu%2Freset-password"
        );
    }

    #[tokio::test]
    async fn test_update_password_requires_session() {
        let (auth, _, _) = client();
        assert_eq!(
            auth.update_password("new-secret").await.unwrap_err(),
            AuthError::NotSignedIn
        );
    }

    #[tokio::test]
    async fn test_update_password_emits_user_updated() {
        let (auth, transport, persistence) = client();
        let (events, _sub) = recorded_events(&auth);
        persistence.save(&session_with_role(Some("student"))).unwrap();
        transport.respond(200, r#"{"id":"user-1","email":"asha@example.edu"}"#);

        let user = auth.update_password("new-secret").await.unwrap();

        assert_eq!(user.id, "user-1");
        assert_eq!(transport.last_request().unwrap().method, HttpMethod::Put);
        assert_eq!(*lock(&events), vec![AuthChangeEvent::UserUpdated]);
    }

    #[test]
    fn test_fragment_parsing() {
        let tokens = session_from_fragment(
            "#access_token=tok%2B1&expires_in=3600&refresh_token=r1&token_type=bearer&type=recovery",
            1_000,
        )
        .unwrap();

        assert_eq!(tokens.access_token, "tok+1");
        assert_eq!(tokens.expires_at, Some(4_600));
        assert!(tokens.is_recovery());
    }

    #[test]
    fn test_fragment_decodes_form_values() {
        let tokens = session_from_fragment(
            "access_token=a%2Fb+c&refresh_token=r%3D1&expires_at=99&type=signup&flag",
            0,
        )
        .unwrap();

        assert_eq!(tokens.access_token, "a/b c");
        assert_eq!(tokens.refresh_token, "r=1");
        assert_eq!(tokens.expires_at, Some(99));
        assert!(!tokens.is_recovery());
    }

    #[test]
    fn test_fragment_errors() {
        assert_eq!(
            session_from_fragment("#type=recovery", 0).unwrap_err(),
            AuthError::InvalidRecoveryLink
        );
        assert_eq!(
            session_from_fragment("#error=access_denied&error_description=Email+link+is+invalid+or+has+expired", 0)
                .unwrap_err(),
            AuthError::Provider("Email link is invalid or has expired".into())
        );
    }

    #[tokio::test]
    async fn test_adopt_recovery_session() {
        let (auth, transport, persistence) = client();
        let (events, _sub) = recorded_events(&auth);
        transport.respond(
            200,
            r#"{"id":"user-1","email":"asha@example.edu","user_metadata":{"role":"student"}}"#,
        );
        let tokens = session_from_fragment("access_token=tok&refresh_token=r&type=recovery", 0).unwrap();

        let session = auth.adopt_session(tokens).await.unwrap();

        assert_eq!(session.user.role(), Ok(Role::Student));
        assert_eq!(persistence.load().unwrap(), Some(session));
        assert_eq!(*lock(&events), vec![AuthChangeEvent::PasswordRecovery]);
        assert_eq!(
            transport.last_request().unwrap().header("Authorization"),
            Some("Bearer tok")
        );
    }
}
