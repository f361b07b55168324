//! Remote Chore API
//!
//! The `ChoreApi` seam between the controller and the backend, plus its
//! HTTP implementation.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Chore, CreatedChore, NewChore, TouchedChore};

pub use http::HttpChoreApi;

/// Failures talking to the chore backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (including malformed URLs)
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Operations offered by the chore backend
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait ChoreApi {
    /// `GET /items`
    async fn list_chores(&self) -> Result<Vec<Chore>, ApiError>;

    /// `PUT /items`, answered with the new ID only
    async fn create_chore(&self, payload: &NewChore) -> Result<CreatedChore, ApiError>;

    /// `GET /items/{id}`
    async fn get_chore(&self, id: &str) -> Result<Chore, ApiError>;

    /// `DELETE /items/{id}`
    ///
    /// Returns the response status without judging it; only a request that
    /// never completed is an error.
    async fn delete_chore(&self, id: &str) -> Result<u16, ApiError>;

    /// `PATCH /items/{id}`, answered with the recomputed dates
    async fn touch_chore(&self, id: &str) -> Result<TouchedChore, ApiError>;
}
