//! Backend REST Client
//!
//! One async function per backend operation against the contact store.
//! Bodies are JSON; `.json(..)` sets `Content-Type: application/json`.

use serde_json::Value;
use thiserror::Error;

use crate::models::{Contact, ContactDraft};

/// Fixed base URL of the contact store
pub const BASE_URL: &str = "http://localhost:3001/users";

/// Errors at the backend boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected before any response arrived (network failure,
    /// unreadable response body)
    #[error("request failed: {0}")]
    Transport(String),
    /// Response received but not ok
    #[error("server responded with status {0}")]
    Server(u16),
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn ok_or_server(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Server(response.status().as_u16()))
    }
}

/// Load the full contact list
pub async fn fetch_contacts() -> Result<Vec<Contact>, ApiError> {
    let response = reqwest::Client::new()
        .get(BASE_URL)
        .send()
        .await
        .map_err(transport)?;
    ok_or_server(response)?.json().await.map_err(transport)
}

/// Create a contact from the draft fields.
///
/// Success is any ok response; the body is not read, so the caller only
/// ever sees the locally-held draft values.
pub async fn create_contact(draft: &ContactDraft) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .post(BASE_URL)
        .json(draft)
        .send()
        .await
        .map_err(transport)?;
    ok_or_server(response).map(|_| ())
}

/// Update the contact stored under `id` with the full field set,
/// returning the response JSON for merging back into the record.
pub async fn update_contact(id: u32, contact: &Contact) -> Result<Value, ApiError> {
    let response = reqwest::Client::new()
        .put(format!("{}/{}", BASE_URL, id))
        .json(contact)
        .send()
        .await
        .map_err(transport)?;
    ok_or_server(response)?.json().await.map_err(transport)
}
