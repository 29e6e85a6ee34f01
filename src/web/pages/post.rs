//! Create and update dialogs.

use maud::{Markup, Render};

use crate::components::{BaseLayout, PostDialog};
use crate::models::{PostForm, ValidationError};

/// Which dialog is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Create,
    Update(i64),
}

impl DialogKind {
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Create Blog Post",
            Self::Update(_) => "Update Blog Post",
        }
    }

    /// Form target.
    #[must_use]
    pub fn action(&self) -> String {
        match self {
            Self::Create => "/posts".to_string(),
            Self::Update(id) => format!("/posts/{id}"),
        }
    }
}

/// Render a post dialog page, with the fields left blank on the last attempt.
#[must_use]
pub fn render_post_dialog_page(
    kind: DialogKind,
    form: &PostForm,
    errors: Option<&ValidationError>,
) -> Markup {
    let action = kind.action();
    let dialog = PostDialog::new(kind.heading(), &action, form).with_errors(errors);
    BaseLayout::new(kind.heading()).render(dialog.render())
}
