//! Delete confirmation panel.

use maud::{html, Markup, Render};

use super::{Button, Form};

/// Confirmation panel for a pending delete.
///
/// Both buttons post to `/confirm`; the `answer` field carries the decision.
#[derive(Debug, Clone)]
pub struct ConfirmationPanel<'a> {
    pub post_title: &'a str,
}

impl<'a> ConfirmationPanel<'a> {
    #[must_use]
    pub const fn new(post_title: &'a str) -> Self {
        Self { post_title }
    }
}

impl Render for ConfirmationPanel<'_> {
    fn render(&self) -> Markup {
        html! {
            div id="confirmation-panel" class="confirmation-panel" role="alertdialog" {
                p id="confirmation-text" {
                    "Are you sure you want to delete this '"
                    strong class="highlight" { (self.post_title) }
                    "' post?"
                }
                (Form::post("/confirm", html! {
                    button type="submit" name="answer" value="yes" class="btn btn-danger" id="confirmButton" { "Delete" }
                    button type="submit" name="answer" value="no" class="btn btn-secondary" id="cancelButton" { "Cancel" }
                }))
                (Button::secondary("Back to posts").href("/"))
            }
        }
    }
}
