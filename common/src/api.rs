//! REST client for the memo backend.

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ClientError, RequestError, Result};
use crate::http::{HttpRequest, HttpResponse, Method, Transport};
use crate::{Memo, MemoId, MemoPayload};

/// One attempt per call, no retry, no cache.
#[derive(Debug)]
pub struct ApiClient<T> {
    base: Url,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &ApiConfig, transport: T) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|_| ClientError::BaseUrl(config.base_url.clone()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(config.base_url.clone()));
        }
        Ok(Self { base, transport })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /memos`, filtered by `search` when it has non-blank text.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Memo>> {
        let mut url = self.endpoint(&["memos"])?;
        if let Some(query) = search.map(str::trim).filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair("search", query);
        }
        let response = self.send(Method::Get, url, None).await?;
        decode(&response)
    }

    pub async fn get(&self, id: &MemoId) -> Result<Memo> {
        let url = self.endpoint(&["memos", &id.to_string()])?;
        let response = self.send(Method::Get, url, None).await?;
        decode(&response)
    }

    pub async fn create(&self, payload: &MemoPayload) -> Result<Memo> {
        let url = self.endpoint(&["memos"])?;
        let body = serde_json::to_string(payload)?;
        let response = self.send(Method::Post, url, Some(body)).await?;
        decode(&response)
    }

    pub async fn update(&self, id: &MemoId, payload: &MemoPayload) -> Result<Memo> {
        let url = self.endpoint(&["memos", &id.to_string()])?;
        let body = serde_json::to_string(payload)?;
        let response = self.send(Method::Put, url, Some(body)).await?;
        decode(&response)
    }

    /// The success body is ignored; both `200` and `204` are accepted.
    pub async fn delete(&self, id: &MemoId) -> Result<()> {
        let url = self.endpoint(&["memos", &id.to_string()])?;
        self.send(Method::Delete, url, None).await?;
        Ok(())
    }

    pub async fn health(&self) -> Result<bool> {
        #[derive(serde::Deserialize)]
        struct Health {
            status: String,
        }

        let url = self.endpoint(&["health"])?;
        let response = self.send(Method::Get, url, None).await?;
        let health: Health = decode(&response)?;
        Ok(health.status == "ok")
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url, body: Option<String>) -> Result<HttpResponse> {
        let request = HttpRequest {
            method,
            url: url.into(),
            body,
        };
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request.clone()).await.map_err(|err| {
            log::warn!("{} {} failed: {err}", request.method, request.url);
            err
        })?;

        if !response.is_success() {
            log::warn!(
                "{} {} returned HTTP {}",
                request.method,
                request.url,
                response.status
            );
            return Err(RequestError {
                status: response.status,
                body: response.body,
            }
            .into());
        }
        Ok(response)
    }
}

fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D> {
    Ok(serde_json::from_str(&response.body)?)
}
