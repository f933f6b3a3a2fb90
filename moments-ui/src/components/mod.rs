//! UI Components
//!
//! Leptos components for the moment board.

pub mod comment_form;
pub mod moment_card;
pub mod moment_form;
pub mod toast;

pub use comment_form::CommentForm;
pub use moment_card::MomentList;
pub use moment_form::MomentForm;
pub use toast::Toast;
