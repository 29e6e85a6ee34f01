//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod home;
pub mod post;

pub use home::{render_home_page, HomePageParams};
pub use post::{render_post_dialog_page, DialogKind};
