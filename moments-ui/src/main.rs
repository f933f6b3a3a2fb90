//! Moments Board
//!
//! Single-page journal of moments and comments built with Leptos (WASM).
//!
//! # Features
//!
//! - Create and edit moments with an optional image
//! - Comment on moments, optionally with a 0-5 rating
//! - List refreshed from the API after every change
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Drafts, submission and list reconciliation come from the
//! `moments` crate; this crate supplies the gloo-net gateway, a signal-backed
//! store and the view.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
