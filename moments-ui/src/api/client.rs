//! HTTP API Client
//!
//! [`MomentGateway`] over gloo-net, for use in the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use moments::gateway::{comments_path, endpoint, moment_path, moments_path};
use moments::{
    BoardSettings, CommentPayload, Language, Moment, MomentGateway, MomentId, MomentList,
    MomentPayload, TransportError, DEFAULT_API_BASE,
};

const API_URL_KEY: &str = "moments_api_url";
const RATINGS_KEY: &str = "moments_ratings";
const LANGUAGE_KEY: &str = "moments_language";

fn stored(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(key)
        .ok()?
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = stored(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Board variant from local storage; rated Portuguese board by default
pub fn get_board_settings() -> BoardSettings {
    let mut settings = match stored(RATINGS_KEY).as_deref() {
        Some("off") | Some("false") | Some("0") => BoardSettings::plain(),
        _ => BoardSettings::rated(),
    };
    if let Some(language) = stored(LANGUAGE_KEY).as_deref().and_then(Language::parse) {
        settings.language = language;
    }
    settings
}

/// Moments API client for the browser
pub struct GlooGateway {
    base_url: String,
}

impl GlooGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

fn network(e: gloo_net::Error) -> TransportError {
    TransportError::Request(format!("Network error: {}", e))
}

fn decode(e: gloo_net::Error) -> TransportError {
    TransportError::Decode(format!("Parse error: {}", e))
}

/// Turn non-2xx responses into errors
async fn check(response: Response) -> Result<Response, TransportError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Status { status, body })
    }
}

#[async_trait(?Send)]
impl MomentGateway for GlooGateway {
    async fn list_moments(&self) -> Result<Vec<Moment>, TransportError> {
        let response = Request::get(&self.url(moments_path()))
            .send()
            .await
            .map_err(network)?;

        let list: MomentList = check(response).await?.json().await.map_err(decode)?;
        Ok(list.data)
    }

    async fn create_moment(&self, data: &MomentPayload) -> Result<Moment, TransportError> {
        let response = Request::post(&self.url(moments_path()))
            .json(data)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json().await.map_err(decode)
    }

    async fn update_moment(
        &self,
        id: MomentId,
        data: &MomentPayload,
    ) -> Result<Moment, TransportError> {
        let response = Request::put(&self.url(&moment_path(id)))
            .json(data)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json().await.map_err(decode)
    }

    async fn delete_moment(&self, id: MomentId) -> Result<(), TransportError> {
        let response = Request::delete(&self.url(&moment_path(id)))
            .send()
            .await
            .map_err(network)?;

        check(response).await.map(|_| ())
    }

    async fn create_comment(
        &self,
        moment_id: MomentId,
        data: &CommentPayload,
    ) -> Result<(), TransportError> {
        let response = Request::post(&self.url(&comments_path(moment_id)))
            .json(data)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        check(response).await.map(|_| ())
    }
}
