use coursemgr_core::{Event, EventRef, Tag, User};
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::api::{EventRequest, TagInput, UserRegistration, UserUpdate};
use crate::error::{ClientError, ClientResult};

/// HTTP client for the Course Manager REST backend.
///
/// Every call is a single request: no retries and no timeout unless one is
/// configured explicitly.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client without a request timeout
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::config("Backend URL is required"));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::config(format!(
                "Backend URL must start with http:// or https://: {}",
                base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::config(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Response> {
        debug!("{} {}", method, path);

        let mut request = self.http_client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, path, e);
            ClientError::from(e)
        })?;

        Self::check(path, response).await
    }

    async fn check(path: &str, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| status.to_string());

        error!("{} answered {}: {}", path, status, message);

        if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(path.to_string()))
        } else {
            Err(ClientError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.send(method, path, Some(body)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Like `send_json`, but a body that is empty or not a `T` yields `None`
    async fn send_json_lenient<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let response = self.send(method, path, Some(body)).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<T>(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!("{} returned a body that is not a record: {}", path, e);
                Ok(None)
            }
        }
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    // Tags

    pub async fn list_tags(&self) -> ClientResult<Vec<Tag>> {
        self.get_json("/api/tags").await
    }

    pub async fn get_tag(&self, id: i64) -> ClientResult<Tag> {
        self.get_json(&format!("/api/tags/{}", id)).await
    }

    pub async fn create_tag(&self, input: &TagInput) -> ClientResult<Tag> {
        self.send_json(Method::POST, "/api/tags", input).await
    }

    pub async fn update_tag(&self, id: i64, input: &TagInput) -> ClientResult<Tag> {
        self.send_json(Method::PUT, &format!("/api/tags/{}", id), input).await
    }

    pub async fn delete_tag(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/tags/{}", id)).await
    }

    // Users

    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get_json("/api/users").await
    }

    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        self.get_json(&format!("/api/users/{}", id)).await
    }

    /// Look a user up by email. A 404 is `Ok(None)`.
    pub async fn get_user_by_email(&self, email: &str) -> ClientResult<Option<User>> {
        let path = user_email_path(email);
        match self.get_json::<User>(&path).await {
            Ok(user) => Ok(Some(user)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn register_user(&self, registration: &UserRegistration) -> ClientResult<User> {
        self.send_json(Method::POST, "/api/users/register", registration)
            .await
    }

    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> ClientResult<User> {
        self.send_json(Method::PUT, &format!("/api/users/{}", id), update)
            .await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/users/{}", id)).await
    }

    // Events

    pub async fn list_events(&self) -> ClientResult<Vec<Event>> {
        self.get_json("/api/events").await
    }

    /// Create an event. `None` when the backend does not echo the record.
    pub async fn create_event(&self, request: &EventRequest) -> ClientResult<Option<Event>> {
        self.send_json_lenient(Method::POST, "/api/events/create", request)
            .await
    }

    /// Update an event. `None` when the backend does not echo the record.
    pub async fn update_event(
        &self,
        id: i64,
        request: &EventRequest,
    ) -> ClientResult<Option<Event>> {
        self.send_json_lenient(Method::PUT, &format!("/api/events/{}/update", id), request)
            .await
    }

    pub async fn delete_event(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/events/{}/delete", id)).await
    }

    pub async fn organizer_events(&self, organizer_id: i64) -> ClientResult<Vec<Event>> {
        self.get_json(&format!("/api/events/organizers/{}/events", organizer_id))
            .await
    }

    // Participation

    pub async fn past_events(&self, user_id: i64) -> ClientResult<Vec<EventRef>> {
        self.get_json(&format!("/api/participants/{}/past", user_id)).await
    }

    pub async fn future_events(&self, user_id: i64) -> ClientResult<Vec<EventRef>> {
        self.get_json(&format!("/api/participants/{}/future", user_id))
            .await
    }
}

/// Path of the by-email lookup. `@` is a legal path character and is sent as-is.
fn user_email_path(email: &str) -> String {
    format!(
        "/api/users/email/{}",
        urlencoding::encode(email).replace("%40", "@")
    )
}
