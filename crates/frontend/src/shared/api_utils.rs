//! API utilities for frontend-backend communication
//!
//! Provides the backend base URL and the generic list/create/update/delete
//! calls used by the resource pages.

use contracts::shared::api::{ApiMethod, ApiResource, DEFAULT_API_BASE_URL};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("response body is neither an array nor a known envelope")]
    UnexpectedShape,
    #[error("{0:?} is not supported by this resource")]
    Unsupported(ApiMethod),
}

/// Get the base URL for API requests
///
/// Taken from `API_BASE_URL` at compile time, without a trailing slash.
pub fn api_base() -> String {
    option_env!("API_BASE_URL")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/zones");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn item_url(resource: ApiResource, id: &str) -> String {
    api_url(&resource.item_path(&urlencoding::encode(id)))
}

fn ensure_supported(resource: ApiResource, method: ApiMethod) -> Result<(), ApiError> {
    if resource.supports(method) {
        Ok(())
    } else {
        Err(ApiError::Unsupported(method))
    }
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// `GET /<resource>`; accepts a bare array or the `{ "<resource>": [...] }` envelope.
pub async fn fetch_records(resource: ApiResource) -> Result<Vec<Value>, ApiError> {
    ensure_supported(resource, ApiMethod::Get)?;

    let response = Request::get(&api_url(resource.collection_path()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response)?;

    let body: Value = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    resource.records_from(body).ok_or(ApiError::UnexpectedShape)
}

/// `POST /<resource>` with a JSON body.
pub async fn create_record(resource: ApiResource, body: &Value) -> Result<(), ApiError> {
    ensure_supported(resource, ApiMethod::Post)?;

    let response = Request::post(&api_url(resource.collection_path()))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response)
}

/// `PUT /<resource>/<id>`; plans reject this with [`ApiError::Unsupported`].
pub async fn update_record(resource: ApiResource, id: &str, body: &Value) -> Result<(), ApiError> {
    ensure_supported(resource, ApiMethod::Put)?;

    let response = Request::put(&item_url(resource, id))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response)
}

/// `DELETE /<resource>/<id>` with the id URL-encoded.
pub async fn delete_record(resource: ApiResource, id: &str) -> Result<(), ApiError> {
    ensure_supported(resource, ApiMethod::Delete)?;

    let response = Request::delete(&item_url(resource, id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_url("/zones").ends_with("/zones"));
    }

    #[test]
    fn item_ids_are_url_encoded() {
        let url = item_url(ApiResource::Zones, "north/ 1");
        assert!(url.ends_with("/zones/north%2F%201"), "{url}");
    }

    #[test]
    fn plans_cannot_be_updated() {
        assert!(ensure_supported(ApiResource::Zones, ApiMethod::Put).is_ok());
        assert!(matches!(
            ensure_supported(ApiResource::Plans, ApiMethod::Put),
            Err(ApiError::Unsupported(ApiMethod::Put))
        ));
        assert!(ensure_supported(ApiResource::Plans, ApiMethod::Post).is_ok());
    }
}
