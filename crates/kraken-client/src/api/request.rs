use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{ACCEPT_V5, AccessClient, Client};
use crate::KrakenError;

/// Status and body of a completed call, captured before any decoding so
/// resource operations can map provider status codes first.
pub(super) struct ApiResponse {
    pub(super) status: StatusCode,
    pub(super) body: String,
}

impl ApiResponse {
    /// Decode the body, mapping any remaining non-2xx status to
    /// [`KrakenError::Api`].
    pub(super) fn decode<T: DeserializeOwned>(self) -> Result<T, KrakenError> {
        if !self.status.is_success() {
            tracing::warn!(status = self.status.as_u16(), "unexpected API status");
            return Err(KrakenError::Api {
                status: self.status.as_u16(),
                message: self.body,
            });
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

async fn capture(resp: reqwest::Response) -> Result<ApiResponse, KrakenError> {
    let status = resp.status();
    let body = resp.text().await?;
    Ok(ApiResponse { status, body })
}

impl Client {
    /// Headers every call carries.
    pub(super) fn base_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Client-ID", HeaderValue::from_str(self.client_id()).unwrap());
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V5));
        headers
    }

    /// Execute an unauthenticated GET request.
    pub(super) async fn get(&self, url: &str) -> Result<ApiResponse, KrakenError> {
        let resp = self
            .http()
            .get(url)
            .headers(self.base_headers())
            .send()
            .await?;
        capture(resp).await
    }
}

impl AccessClient {
    /// Base headers plus the bearer token.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = self.client.base_headers();
        let bearer = format!("OAuth {}", self.access.token);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer).unwrap());
        headers
    }

    /// Execute a GET request with auth headers.
    pub(super) async fn get(&self, url: &str) -> Result<ApiResponse, KrakenError> {
        let resp = self
            .client
            .http()
            .get(url)
            .headers(self.auth_headers())
            .send()
            .await?;
        capture(resp).await
    }

    /// Execute a PUT request with auth headers and a JSON body.
    pub(super) async fn put_json(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse, KrakenError> {
        let resp = self
            .client
            .http()
            .put(url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;
        capture(resp).await
    }

    /// Execute a PUT request with auth headers and no body.
    pub(super) async fn put_empty(&self, url: &str) -> Result<ApiResponse, KrakenError> {
        let resp = self
            .client
            .http()
            .put(url)
            .headers(self.auth_headers())
            .send()
            .await?;
        capture(resp).await
    }

    /// Execute a DELETE request with auth headers.
    pub(super) async fn delete(&self, url: &str) -> Result<ApiResponse, KrakenError> {
        let resp = self
            .client
            .http()
            .delete(url)
            .headers(self.auth_headers())
            .send()
            .await?;
        capture(resp).await
    }
}
