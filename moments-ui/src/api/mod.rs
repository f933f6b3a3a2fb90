//! API Access
//!
//! gloo-net gateway to the Moments REST API and the locally stored settings.

pub mod client;

pub use client::{get_api_base, get_board_settings, GlooGateway};
