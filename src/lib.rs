//! # Moments
//!
//! Client for the Moments journal API: posts ("moments") with a title,
//! description and optional image, each carrying comments that may be rated
//! 0-5.
//!
//! ## Modules
//!
//! - [`model`]: Moment and comment types as the API serves them
//! - [`draft`]: The moment and comment edit buffers
//! - [`gateway`]: The five REST calls behind a trait
//! - [`state`]: View state and the store abstraction over it
//! - [`board`]: Submission handling and list reconciliation
//! - [`labels`]: The rated/Portuguese and plain/English variants
//!
//! With the default `native` feature the crate also provides an HTTP gateway
//! over reqwest, TOML configuration and a terminal renderer. Without it the
//! library builds for `wasm32-unknown-unknown`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moments::{BoardSettings, HttpGateway, HttpGatewayConfig, MomentBoard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = HttpGateway::new(HttpGatewayConfig::default())?;
//!     let board = MomentBoard::new(gateway, BoardSettings::rated());
//!
//!     board.mount().await?;
//!
//!     board.update_moment_field("title", "Trip")?;
//!     board.update_moment_field("description", "Beach day")?;
//!     let created = board.submit_moment().await?;
//!
//!     board.update_comment_field("username", "ana")?;
//!     board.update_comment_field("text", "nice")?;
//!     board.set_comment_rating(Some(4));
//!     board.submit_comment(created.id).await?;
//!
//!     println!("{} moments", board.moments().len());
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod draft;
pub mod gateway;
pub mod image;
pub mod labels;
pub mod model;
pub mod state;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod render;

pub use board::{LocalStore, MomentBoard};
pub use draft::{CommentDraft, DraftError, MomentDraft, Submission};
pub use gateway::{MomentGateway, TransportError, DEFAULT_API_BASE};
pub use image::encode_data_uri;
pub use labels::{rating_label, BoardSettings, Labels, Language, MAX_RATING};
pub use model::{Comment, CommentPayload, Moment, MomentId, MomentList, MomentPayload, UNSAVED_ID};
pub use state::{BoardState, BoardStore};

#[cfg(feature = "native")]
pub use gateway::{HttpGateway, HttpGatewayConfig};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
