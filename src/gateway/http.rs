//! reqwest-backed gateway

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

use super::{
    comments_path, endpoint, moment_path, moments_path, MomentGateway, TransportError,
    DEFAULT_API_BASE,
};
use crate::model::{CommentPayload, Moment, MomentId, MomentList, MomentPayload};

/// Configuration for [`HttpGateway`]
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Base URL up to and including `/api`
    pub base_url: String,
    /// Per-request timeout; `None` leaves reqwest's default (no timeout)
    pub request_timeout_ms: Option<u64>,
}

impl Default for HttpGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: None,
        }
    }
}

/// Moments API client over HTTP/JSON
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: HttpGatewayConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().map_err(TransportError::from)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Send a request and turn non-2xx statuses into errors
    async fn send(&self, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait(?Send)]
impl MomentGateway for HttpGateway {
    async fn list_moments(&self) -> Result<Vec<Moment>, TransportError> {
        let response = self.send(self.client.get(self.url(moments_path()))).await?;
        let list: MomentList = response.json().await?;
        Ok(list.data)
    }

    async fn create_moment(&self, data: &MomentPayload) -> Result<Moment, TransportError> {
        let request = self.client.post(self.url(moments_path())).json(data);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    async fn update_moment(
        &self,
        id: MomentId,
        data: &MomentPayload,
    ) -> Result<Moment, TransportError> {
        let request = self.client.put(self.url(&moment_path(id))).json(data);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    async fn delete_moment(&self, id: MomentId) -> Result<(), TransportError> {
        self.send(self.client.delete(self.url(&moment_path(id))))
            .await?;
        Ok(())
    }

    async fn create_comment(
        &self,
        moment_id: MomentId,
        data: &CommentPayload,
    ) -> Result<(), TransportError> {
        let request = self.client.post(self.url(&comments_path(moment_id))).json(data);
        self.send(request).await?;
        Ok(())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpGatewayConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:3333/api");
        assert!(config.request_timeout_ms.is_none());
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let gateway = HttpGateway::new(HttpGatewayConfig {
            base_url: "http://localhost:3333/api/".to_string(),
            request_timeout_ms: Some(1000),
        })
        .unwrap();

        assert_eq!(gateway.base_url(), "http://localhost:3333/api");
        assert_eq!(gateway.url(&moment_path(4)), "http://localhost:3333/api/moments/4");
    }
}
