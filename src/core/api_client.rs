//! Authenticated fetch wrapper
//!
//! Every call asks the session store for the current session, so a token
//! refreshed by the store is picked up without any caching here.

use leptos::logging::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, GENERIC_API_ERROR};
use super::http::{FormField, HttpMethod, HttpRequest, HttpTransport, RequestBody};
use super::session::SessionStore;

/// Per-call options: method, extra headers and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn method(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn post_json<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self::method(HttpMethod::Post).json(body)
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(RequestBody::Json(text));
        Ok(self)
    }

    pub fn multipart(mut self, fields: Vec<FormField>) -> Self {
        self.body = Some(RequestBody::Multipart(fields));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
    }
}

/// Client for the application's REST API
#[derive(Clone)]
pub struct ApiClient<S, T> {
    base_url: String,
    session: S,
    transport: T,
}

impl<S: SessionStore, T: HttpTransport> ApiClient<S, T> {
    pub fn new(base_url: impl Into<String>, session: S, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            session,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_store(&self) -> &S {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Current access token; a failing lookup counts as signed out
    async fn bearer_token(&self) -> Option<String> {
        match self.session.get_session().await {
            Ok(session) => session
                .map(|s| s.access_token)
                .filter(|token| !token.is_empty()),
            Err(e) => {
                warn!("Session lookup failed, calling API without a token: {}", e);
                None
            }
        }
    }

    /// Perform a request and return the parsed JSON body
    ///
    /// Empty or non-JSON bodies come back as `None`. Any status outside 2xx
    /// becomes `ApiError::Status` carrying the body's `message` field.
    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let mut headers = options.headers.clone();

        if let Some(token) = self.bearer_token().await {
            headers.retain(|(key, _)| !key.eq_ignore_ascii_case("Authorization"));
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let is_multipart = options
            .body
            .as_ref()
            .map(RequestBody::is_multipart)
            .unwrap_or(false);
        if !options.has_header("Content-Type") && !is_multipart {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = HttpRequest {
            method: options.method,
            url: self.url(path),
            headers,
            body: options.body,
        };

        let response = self.transport.send(request).await?;
        let data = parse_body(&response.body);

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status,
                message: error_message(data.as_ref()),
            });
        }

        Ok(data)
    }

    /// Call and decode the `data` field of the envelope (or the bare payload)
    pub async fn call_data<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<R>, ApiError> {
        let body = self.call(path, options).await?;
        match unwrap_envelope(body) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string())),
            None => Ok(None),
        }
    }

    /// Call and decode a list, treating an absent payload as empty
    pub async fn call_list<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Vec<R>, ApiError> {
        Ok(self.call_data(path, options).await?.unwrap_or_default())
    }
}

/// Parse a body as JSON; empty, invalid, or `null` bodies are absent
pub fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Server-provided `message` field, or the generic fallback
pub fn error_message(body: Option<&Value>) -> String {
    body.and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
}

/// Strip the `{ "data": ... }` envelope when present
pub fn unwrap_envelope(body: Option<Value>) -> Option<Value> {
    match body {
        Some(Value::Object(mut map)) if map.contains_key("data") => {
            match map.remove("data") {
                Some(Value::Null) | None => None,
                data => data,
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AuthError;
    use crate::core::http::mock::MockTransport;
    use crate::core::session::fixtures::session_with_role;
    use crate::core::session::{
        AuthChangeEvent, ChangeHandler, MemorySessionStore, Session, Subscription,
    };
    use serde::Deserialize;

    const BASE: &str = "http://localhost:5000/api/v1";

    fn client_with(
        store: MemorySessionStore,
    ) -> (ApiClient<MemorySessionStore, MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        (ApiClient::new(BASE, store, transport.clone()), transport)
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn test_attaches_bearer_token_when_signed_in() {
        let store = MemorySessionStore::with_session(session_with_role(Some("student")));
        let (api, transport) = client_with(store);
        transport.respond(200, r#"{"data": []}"#);

        api.call("/colleges", RequestOptions::get()).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://localhost:5000/api/v1/colleges");
        assert_eq!(request.header("Authorization"), Some("Bearer token-abc"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_omits_authorization_when_anonymous() {
        let (api, transport) = client_with(MemorySessionStore::new());
        api.call("/colleges", RequestOptions::get()).await.unwrap();
        assert!(!transport.last_request().unwrap().has_header("Authorization"));
    }

    #[tokio::test]
    async fn test_reads_fresh_token_on_every_call() {
        let store = MemorySessionStore::with_session(session_with_role(Some("student")));
        let (api, transport) = client_with(store.clone());

        api.call("/courses", RequestOptions::get()).await.unwrap();

        let mut refreshed = session_with_role(Some("student"));
        refreshed.access_token = "token-new".to_string();
        store.set_session(AuthChangeEvent::TokenRefreshed, Some(refreshed));
        api.call("/courses", RequestOptions::get()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), Some("Bearer token-abc"));
        assert_eq!(requests[1].header("Authorization"), Some("Bearer token-new"));
    }

    #[tokio::test]
    async fn test_colleges_scenario_returns_data_array() {
        let store = MemorySessionStore::with_session(session_with_role(Some("student")));
        let (api, transport) = client_with(store);
        transport.respond(
            200,
            r#"{"data": [{"name": "IIT Bombay"}, {"name": "Delhi University"}]}"#,
        );

        let colleges: Vec<Named> = api.call_list("/colleges", RequestOptions::get()).await.unwrap();
        assert_eq!(
            colleges,
            vec![
                Named { name: "IIT Bombay".into() },
                Named { name: "Delhi University".into() }
            ]
        );
    }

    #[tokio::test]
    async fn test_server_message_becomes_error_message() {
        let (api, transport) = client_with(MemorySessionStore::new());
        transport.respond(500, r#"{"message":"db down"}"#);

        let err = api.call("/colleges", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err.to_string(), "db down");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_generic_message_without_message_field() {
        let (api, transport) = client_with(MemorySessionStore::new());
        transport.respond(404, "<html>Not Found</html>");
        transport.respond(502, r#"{"error": "bad gateway"}"#);

        let first = api.call("/x", RequestOptions::get()).await.unwrap_err();
        let second = api.call("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(first.to_string(), "API Error");
        assert_eq!(second.to_string(), "API Error");
    }

    #[tokio::test]
    async fn test_empty_and_non_json_success_bodies_are_null() {
        let (api, transport) = client_with(MemorySessionStore::new());
        transport.respond(204, "");
        transport.respond(200, "ok");

        assert_eq!(api.call("/a", RequestOptions::get()).await.unwrap(), None);
        assert_eq!(api.call("/b", RequestOptions::get()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let (api, transport) = client_with(MemorySessionStore::new());
        transport.fail(ApiError::Network("connection refused".into()));

        let err = api.call("/colleges", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_multipart_body_gets_no_json_content_type() {
        let (api, transport) = client_with(MemorySessionStore::new());
        let options = RequestOptions::method(HttpMethod::Post).multipart(vec![
            FormField::text("course_id", "c-1"),
            FormField::file("file", "notes.pdf", "application/pdf", vec![1, 2, 3]),
        ]);

        api.call("/materials", options).await.unwrap();

        let request = transport.last_request().unwrap();
        assert!(!request.has_header("Content-Type"));
        assert!(matches!(request.body, Some(RequestBody::Multipart(ref f)) if f.len() == 2));
    }

    #[tokio::test]
    async fn test_caller_content_type_is_kept() {
        let (api, transport) = client_with(MemorySessionStore::new());
        let options = RequestOptions::method(HttpMethod::Post).header("content-type", "text/plain");

        api.call("/notes", options).await.unwrap();

        let request = transport.last_request().unwrap();
        let content_types: Vec<_> = request
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_post_json_serializes_body() {
        let (api, transport) = client_with(MemorySessionStore::new());
        let options =
            RequestOptions::post_json(&serde_json::json!({"target_url": "https://x.edu"})).unwrap();

        api.call("admin/scrape-and-create", options).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, format!("{}/admin/scrape-and-create", BASE));
        assert_eq!(
            request.body,
            Some(RequestBody::Json(r#"{"target_url":"https://x.edu"}"#.to_string()))
        );
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        async fn get_session(&self) -> Result<Option<Session>, AuthError> {
            Err(AuthError::Storage("quota exceeded".into()))
        }

        fn on_change(&self, _handler: ChangeHandler) -> Subscription {
            Subscription::new(|| {})
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_session_lookup_failure_sends_anonymous_request() {
        let transport = MockTransport::new();
        let api = ApiClient::new(BASE, BrokenStore, transport.clone());

        api.call("/colleges", RequestOptions::get()).await.unwrap();
        assert!(!transport.last_request().unwrap().has_header("Authorization"));
    }

    #[test]
    fn test_unwrap_envelope() {
        use serde_json::json;
        assert_eq!(unwrap_envelope(Some(json!({"data": [1]}))), Some(json!([1])));
        assert_eq!(unwrap_envelope(Some(json!([1, 2]))), Some(json!([1, 2])));
        assert_eq!(unwrap_envelope(Some(json!({"data": null}))), None);
        assert_eq!(unwrap_envelope(None), None);
    }

    #[tokio::test]
    async fn test_call_list_tolerates_missing_data() {
        let (api, transport) = client_with(MemorySessionStore::new());
        transport.respond(200, "");
        let items: Vec<Named> = api.call_list("/colleges", RequestOptions::get()).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_call_data_reports_shape_mismatch() {
        let (api, transport) = client_with(MemorySessionStore::new());
        transport.respond(200, r#"{"data": {"title": "no name"}}"#);
        let result = api.call_data::<Named>("/x", RequestOptions::get()).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
