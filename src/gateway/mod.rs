//! Remote Gateway
//!
//! The five calls MomentBoard makes against the Moments REST API.
//!
//! | Operation      | Method | Path                          |
//! |----------------|--------|-------------------------------|
//! | List moments   | GET    | `/moments`                    |
//! | Create moment  | POST   | `/moments`                    |
//! | Update moment  | PUT    | `/moments/{id}`               |
//! | Delete moment  | DELETE | `/moments/{id}`               |
//! | Create comment | POST   | `/moments/{momentId}/comments`|
//!
//! Paths are relative to a base URL ending in `/api`. Implementations never
//! retry; every failure surfaces as a [`TransportError`].

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::{HttpGateway, HttpGatewayConfig};

use async_trait::async_trait;

use crate::model::{CommentPayload, Moment, MomentId, MomentPayload};

/// Default API base, matching the journal server's development address
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3333/api";

/// HTTP client boundary to the Moments API.
///
/// Everything runs on one logical thread, so returned futures need not be
/// `Send`; browser and native clients share this trait.
#[async_trait(?Send)]
pub trait MomentGateway {
    /// Every moment with its comments, in server order
    async fn list_moments(&self) -> Result<Vec<Moment>, TransportError>;

    /// Create a moment; returns it with the server-assigned id and timestamps
    async fn create_moment(&self, data: &MomentPayload) -> Result<Moment, TransportError>;

    async fn update_moment(
        &self,
        id: MomentId,
        data: &MomentPayload,
    ) -> Result<Moment, TransportError>;

    async fn delete_moment(&self, id: MomentId) -> Result<(), TransportError>;

    /// Create a comment under `moment_id`; the response body is not read
    async fn create_comment(
        &self,
        moment_id: MomentId,
        data: &CommentPayload,
    ) -> Result<(), TransportError>;
}

/// Any failed call to the API.
///
/// Variants only enrich diagnostics; callers handle them all the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Join a base URL and a path without doubling slashes
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn moments_path() -> &'static str {
    "moments"
}

pub fn moment_path(id: MomentId) -> String {
    format!("moments/{}", id)
}

pub fn comments_path(moment_id: MomentId) -> String {
    format!("moments/{}/comments", moment_id)
}
