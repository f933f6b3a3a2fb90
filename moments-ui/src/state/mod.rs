//! State Management
//!
//! Global application state shared through Leptos context.

pub mod global;

pub use global::{provide_global_state, use_global_state, GlobalState};
