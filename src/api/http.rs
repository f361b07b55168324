//! HTTP Chore API
//!
//! `ChoreApi` over the backend's REST endpoints using reqwest.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ChoreApi};
use crate::config::AppConfig;
use crate::models::{Chore, CreatedChore, NewChore, TouchedChore};

/// Characters escaped when an ID is placed in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// reqwest-backed client for the chore backend
#[derive(Debug, Clone)]
pub struct HttpChoreApi {
    client: Client,
    base_url: String,
}

impl HttpChoreApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!(
            "{}/items/{}",
            self.base_url,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Check the status, then decode the JSON body
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(status, &body)
    }
}

fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ChoreApi for HttpChoreApi {
    async fn list_chores(&self) -> Result<Vec<Chore>, ApiError> {
        let url = self.items_url();
        tracing::debug!(%url, "GET chores");
        let response = self.send(self.client.get(&url)).await?;
        Self::read_json(response).await
    }

    async fn create_chore(&self, payload: &NewChore) -> Result<CreatedChore, ApiError> {
        let url = self.items_url();
        tracing::debug!(%url, name = %payload.name, "PUT chore");
        let response = self.send(self.client.put(&url).json(payload)).await?;
        Self::read_json(response).await
    }

    async fn get_chore(&self, id: &str) -> Result<Chore, ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "GET chore");
        let response = self.send(self.client.get(&url)).await?;
        Self::read_json(response).await
    }

    async fn delete_chore(&self, id: &str) -> Result<u16, ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE chore");
        let response = self.send(self.client.delete(&url)).await?;
        Ok(response.status().as_u16())
    }

    async fn touch_chore(&self, id: &str) -> Result<TouchedChore, ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "PATCH chore");
        let response = self.send(self.client.patch(&url)).await?;
        Self::read_json(response).await
    }
}
