//! REST API client for the CollabSphere backend.
//!
//! Every remote call the UI makes is built here: URL, body encoding, bearer
//! header and status classification. The transport underneath is swappable
//! (`gloo-net` in the browser, a recording mock in tests).
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so auth and CRUD
//! failures degrade into UI messages without crashing hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{Body, HttpRequest, HttpResponse, HttpTransport, Method, Transport};
use super::types::{ListPage, ListQuery, RecordId, RegisterRequest, TokenResponse, User};
use crate::config::ClientConfig;
use crate::state::entity::EntityKind;

const LOGIN_PATH: &str = "auth/login";
const REGISTER_PATH: &str = "auth/register";
const CURRENT_USER_PATH: &str = "users/me";

/// Produces the bearer token for authenticated calls, read fresh per request.
pub type TokenSource = Box<dyn Fn() -> Option<String>>;

pub struct ApiClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
    token: TokenSource,
}

impl ApiClient<HttpTransport> {
    /// Browser client configured from the build environment.
    #[must_use]
    pub fn browser(token: impl Fn() -> Option<String> + 'static) -> Self {
        Self::new(ClientConfig::from_env(), HttpTransport).with_token_source(token)
    }
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport, token: Box::new(|| None) }
    }

    #[must_use]
    pub fn with_token_source(mut self, token: impl Fn() -> Option<String> + 'static) -> Self {
        self.token = Box::new(token);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchange credentials for a token via the OAuth2 password flow.
    ///
    /// The backend expects form encoding, not JSON; the email travels as
    /// `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for bad credentials, or a transport
    /// or decode error.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let request = HttpRequest::new(Method::Post, self.config.endpoint(LOGIN_PATH))
            .body(Body::Form(login_form_body(email, password)));
        let resp = self.execute(request).await?;
        decode(&resp)
    }

    /// Fetch the profile for an explicit token, independent of the token
    /// source (used right after login, before the session holds a profile).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for an invalid or expired token.
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let request = HttpRequest::new(Method::Get, self.config.endpoint(CURRENT_USER_PATH)).bearer(token);
        let resp = self.execute(request).await?;
        decode(&resp)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for duplicate emails or missing fields.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<User, ApiError> {
        let request = HttpRequest::new(Method::Post, self.config.endpoint(REGISTER_PATH))
            .body(Body::Json(encode(payload)?));
        let resp = self.execute(request).await?;
        decode(&resp)
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that is neither an array nor an `{ items, total }` envelope.
    pub async fn list(&self, kind: EntityKind, query: &ListQuery) -> Result<ListPage, ApiError> {
        let url = format!("{}?{}", self.config.endpoint(&collection_path(kind)), query.to_query_string());
        let request = self.authorized(HttpRequest::new(Method::Get, url));
        let resp = self.execute(request).await?;
        let value: Value = decode(&resp)?;
        ListPage::from_value(value).ok_or_else(|| ApiError::Decode(format!("unexpected {} list shape", kind.slug())))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the backend rejects the payload.
    pub async fn create(&self, kind: EntityKind, payload: &Value) -> Result<Value, ApiError> {
        let request = self.authorized(
            HttpRequest::new(Method::Post, self.config.endpoint(&collection_path(kind)))
                .body(Body::Json(payload.to_string())),
        );
        let resp = self.execute(request).await?;
        decode_or_null(&resp)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the backend rejects the payload.
    pub async fn update(&self, kind: EntityKind, id: &RecordId, payload: &Value) -> Result<Value, ApiError> {
        let request = self.authorized(
            HttpRequest::new(Method::Put, self.config.endpoint(&item_path(kind, id)))
                .body(Body::Json(payload.to_string())),
        );
        let resp = self.execute(request).await?;
        decode_or_null(&resp)
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn delete(&self, kind: EntityKind, id: &RecordId) -> Result<(), ApiError> {
        let request = self.authorized(HttpRequest::new(Method::Delete, self.config.endpoint(&item_path(kind, id))));
        self.execute(request).await?;
        Ok(())
    }

    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        match (self.token)() {
            Some(token) => request.bearer(&token),
            None => request,
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            leptos::logging::warn!("{} {url} -> {}", method.as_str(), resp.status);
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        Ok(resp)
    }
}

fn login_form_body(email: &str, password: &str) -> String {
    format!(
        "username={}&password={}&grant_type=password",
        urlencoding::encode(email),
        urlencoding::encode(password)
    )
}

fn collection_path(kind: EntityKind) -> String {
    format!("{}/", kind.slug())
}

fn item_path(kind: EntityKind, id: &RecordId) -> String {
    format!("{}/{}", kind.slug(), urlencoding::encode(&id.to_string()))
}

fn encode<B: serde::Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create/update responses are informational; an empty body is not an error.
fn decode_or_null(resp: &HttpResponse) -> Result<Value, ApiError> {
    if resp.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    decode(resp)
}
