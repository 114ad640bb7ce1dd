//! HTTP transport core
//!
//! One `request` path handles every endpoint: bearer attachment, request-id
//! tagging, JSON/text response normalization and status mapping. Auth
//! endpoints live here because they mutate the session store; the domain
//! endpoint surface is in `endpoints.rs`.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::{Session, SessionStore};
use nmp_domain::{Credentials, User};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Client for the NMP REST backend
///
/// Cheap to clone; clones share the session store and the request counter.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
    session: Arc<dyn SessionStore>,
    request_counter: Arc<AtomicU64>,
}

/// Normalized response body: JSON when the server says so, text otherwise
enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    fn into_typed<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        };
        Ok(serde_json::from_value(value)?)
    }

    /// Server-provided `error`/`message` field, if the body carries one
    fn server_message(&self) -> Option<String> {
        match self {
            Payload::Json(value) => value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string),
            Payload::Text(_) => None,
        }
    }
}

impl ApiClient {
    /// Create a client over `config` with the given session store
    ///
    /// The base URL is fixed here; later changes to the environment are not
    /// observed.
    #[must_use]
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            session,
            request_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The configured base URL
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The injected session store
    #[inline]
    #[must_use]
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Currently stored session, if any
    pub fn current_session(&self) -> Result<Option<Session>, ApiError> {
        Ok(self.session.load()?)
    }

    /// Log in and persist the session
    ///
    /// On success the token and user record are stored as a side effect
    /// before the session is returned.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        #[derive(Deserialize)]
        struct LoginResponse {
            token: String,
            user: User,
        }

        let response: LoginResponse = self.post("/auth/login", credentials).await?;
        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.session.store(&session)?;
        tracing::info!(user = %session.user.name, "login successful");
        Ok(session)
    }

    /// Log out
    ///
    /// Best-effort notifies the backend, then clears the local session
    /// unconditionally; a failed network call never fails the local clear.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if let Err(err) = self.post_empty::<Value>("/auth/logout").await {
            tracing::warn!(error = %err, "server logout failed, continuing with local logout");
        }
        self.session.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get("/health").await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, &[], None).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, query, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, endpoint, &[], None).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, endpoint, &[], Some(body)).await
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let _: Value = self.request(Method::DELETE, endpoint, &[], None).await?;
        Ok(())
    }

    /// Upload a file as `multipart/form-data` to `POST /upload`
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        category: &str,
        metadata: &Value,
    ) -> Result<Value, ApiError> {
        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string()),
            )
            .text("category", category.to_string())
            .text("metadata", metadata.to_string());

        let url = format!("{}/upload", self.config.base_url);
        let request_id = self.next_request_id();
        let mut request = self
            .http
            .post(&url)
            .header("X-Request-ID", request_id.to_string())
            .multipart(form);
        if let Some(session) = self.session.load()? {
            request = request.bearer_auth(session.token);
        }

        tracing::debug!(%url, request_id, file_name, "uploading file");
        let response = request.send().await.map_err(|source| ApiError::Network {
            url: self.config.base_url.clone(),
            source,
        })?;
        self.consume(response, "/upload", request_id).await
    }

    /// Single request path for the JSON endpoints
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let request_id = self.next_request_id();

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("X-Request-ID", request_id.to_string());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(session) = self.session.load()? {
            request = request.bearer_auth(session.token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, request_id, has_body = body.is_some(), "api request");
        let response = request.send().await.map_err(|source| ApiError::Network {
            url: self.config.base_url.clone(),
            source,
        })?;
        self.consume(response, endpoint, request_id).await
    }

    /// Normalize the body and map the status
    async fn consume<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        endpoint: &str,
        request_id: u64,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let text = response.text().await.map_err(|source| ApiError::Network {
            url: self.config.base_url.clone(),
            source,
        })?;
        let payload = if is_json {
            Payload::Json(serde_json::from_str(&text)?)
        } else {
            Payload::Text(text)
        };
        tracing::debug!(status = status.as_u16(), request_id, endpoint, "api response");

        if status.is_success() {
            return payload.into_typed();
        }
        Err(self.map_failure(status, endpoint, &payload))
    }

    fn map_failure(&self, status: StatusCode, endpoint: &str, payload: &Payload) -> ApiError {
        match status.as_u16() {
            401 => {
                tracing::warn!(endpoint, "authentication failed, clearing session");
                if let Err(err) = self.session.clear() {
                    tracing::error!(error = %err, "failed to clear session after 401");
                }
                ApiError::AuthRequired
            }
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound {
                endpoint: endpoint.to_string(),
            },
            429 => ApiError::RateLimited,
            code if code >= 500 => ApiError::Server { status: code },
            code => {
                let message = payload.server_message().unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
                ApiError::Http {
                    status: code,
                    message,
                }
            }
        }
    }

    fn next_request_id(&self) -> u64 {
        self.request_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}
