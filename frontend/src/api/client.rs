use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url).unwrap_or(base_url)),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_registry::lookup(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }

        self.client.execute(request).await.map_err(|e| {
            log::warn!("transport failure: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }
}

pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response, fallback).await)
    }
}

pub(crate) async fn expect_success(response: Response, fallback: &str) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response, fallback).await)
    }
}

async fn error_from_response(response: Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let error = parse_error_body(status, &body, fallback);
    log::warn!("request failed with {}: {}", status, error.error);
    error
}

/// Understands `{error, code, details}` and FastAPI-style `{detail}` bodies.
pub fn parse_error_body(status: u16, body: &str, fallback: &str) -> ApiError {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return ApiError::http_status(status, fallback);
    };

    if let Ok(mut error) = serde_json::from_value::<ApiError>(value.clone()) {
        if !error.error.trim().is_empty() {
            if error.code.is_empty() {
                error.code = format!("HTTP_{}", status);
            }
            return error;
        }
    }

    match value.get("detail") {
        Some(Value::String(message)) if !message.trim().is_empty() => {
            ApiError::http_status(status, message.clone())
        }
        Some(Value::Array(items)) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            let mut error = if messages.is_empty() {
                ApiError::validation(fallback)
            } else {
                ApiError::validation(messages.join("; "))
            };
            error.details = Some(Value::Array(items.clone()));
            error
        }
        _ => ApiError::http_status(status, fallback),
    }
}
