//! Assistant API client for backend communication.
//!
//! Typed wrappers over the assistant backend's JSON endpoints. The client
//! is generic over [`HttpClient`] so the whole crate can run against the
//! production reqwest adapter or an in-memory mock.

use std::sync::Arc;

use crate::error::{classify_http_error, LumenError, LumenResult, NetworkError};
use crate::models::{
    AckResponse, ChatRequest, ChatResponse, ConfirmRequest, ConfirmResponse,
    ConversationsResponse, MessagesResponse, PageQuery, RenameRequest,
};
use crate::traits::{Headers, HttpClient, Response};

/// Default base URL for the assistant service.
pub const DEFAULT_BASE_URL: &str = "https://api.lumen.trade";

const API_PATH: &str = "/api/v1/assistant";

/// Client for the assistant backend API.
///
/// Cheap to clone; the underlying transport is shared.
#[derive(Debug)]
pub struct AssistantClient<C: HttpClient> {
    base_url: String,
    auth_token: Option<String>,
    http: Arc<C>,
}

impl<C: HttpClient> Clone for AssistantClient<C> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            auth_token: self.auth_token.clone(),
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient> AssistantClient<C> {
    /// Create a client with the default base URL.
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(http: C, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, auth_token: None, http: Arc::new(http) }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PATH, path)
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = &self.auth_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Check a response status and decode its JSON body.
    fn decode<T: serde::de::DeserializeOwned>(
        operation: &str,
        response: Response,
    ) -> LumenResult<T> {
        if !response.is_success() {
            let message = response.text().unwrap_or_default();
            tracing::warn!(operation, status = response.status, "request failed");
            return Err(NetworkError::HttpStatus { status: response.status, message }.into());
        }
        Ok(response.json::<T>()?)
    }

    /// Send a user utterance to the assistant.
    ///
    /// For a first message in a draft conversation the response carries the
    /// server-assigned `conversation_id`.
    pub async fn send_message(&self, request: &ChatRequest) -> LumenResult<ChatResponse> {
        let url = self.url("/chat");
        let body = serde_json::to_string(request)?;
        tracing::debug!(conversation = ?request.conversation_id, "sending chat message");

        let response = self
            .http
            .post(&url, &body, &self.headers())
            .await
            .map_err(|e| classify_http_error("send message", e))?;

        Self::decode("send message", response)
    }

    /// Resolve a pending confirmation.
    pub async fn send_confirmation(&self, request: &ConfirmRequest) -> LumenResult<ConfirmResponse> {
        let url = self.url("/confirm");
        let body = serde_json::to_string(request)?;
        tracing::debug!(
            interaction_id = request.interaction_id,
            confirmed = request.confirmed,
            "sending confirmation"
        );

        let response = self
            .http
            .post(&url, &body, &self.headers())
            .await
            .map_err(|e| classify_http_error("send confirmation", e))?;

        Self::decode("send confirmation", response)
    }

    /// Fetch the conversation list.
    pub async fn list_conversations(&self) -> LumenResult<ConversationsResponse> {
        let url = self.url("/conversations");

        let response = self
            .http
            .get(&url, &self.headers())
            .await
            .map_err(|e| classify_http_error("list conversations", e))?;

        let parsed: ConversationsResponse = Self::decode("list conversations", response)?;
        if !parsed.success {
            return Err(LumenError::Rejected {
                reason: "conversation list unavailable".to_string(),
            });
        }
        Ok(parsed)
    }

    /// Fetch one page of messages for a conversation.
    pub async fn get_messages(
        &self,
        conversation_id: &str,
        query: PageQuery,
    ) -> LumenResult<MessagesResponse> {
        let url = format!(
            "{}{}",
            self.url(&format!("/conversations/{}/messages", conversation_id)),
            query.to_query_string()
        );

        let response = self
            .http
            .get(&url, &self.headers())
            .await
            .map_err(|e| classify_http_error("load messages", e))?;

        let parsed: MessagesResponse = Self::decode("load messages", response)?;
        if !parsed.success {
            return Err(LumenError::Rejected { reason: "message history unavailable".to_string() });
        }
        Ok(parsed)
    }

    /// Delete (archive) a conversation.
    pub async fn delete_conversation(&self, conversation_id: &str) -> LumenResult<()> {
        let url = self.url(&format!("/conversations/{}", conversation_id));

        let response = self
            .http
            .delete(&url, &self.headers())
            .await
            .map_err(|e| classify_http_error("delete conversation", e))?;

        let parsed: AckResponse = Self::decode("delete conversation", response)?;
        if !parsed.success {
            return Err(LumenError::Rejected { reason: "conversation not deleted".to_string() });
        }
        Ok(())
    }

    /// Rename a conversation.
    pub async fn rename_conversation(
        &self,
        conversation_id: &str,
        title: &str,
    ) -> LumenResult<()> {
        let url = self.url(&format!("/conversations/{}", conversation_id));
        let body = serde_json::to_string(&RenameRequest { title: title.to_string() })?;

        let response = self
            .http
            .patch(&url, &body, &self.headers())
            .await
            .map_err(|e| classify_http_error("rename conversation", e))?;

        let parsed: AckResponse = Self::decode("rename conversation", response)?;
        if !parsed.success {
            return Err(LumenError::Rejected { reason: "conversation not renamed".to_string() });
        }
        Ok(())
    }

    /// Check whether the assistant service is reachable and healthy.
    pub async fn health_check(&self) -> LumenResult<bool> {
        let url = self.url("/health");

        let response = self
            .http
            .get(&url, &self.headers())
            .await
            .map_err(|e| classify_http_error("health check", e))?;

        Ok(response.is_success())
    }
}
