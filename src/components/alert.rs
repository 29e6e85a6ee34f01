//! Alert components for transient notifications.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
    Info,
}

impl AlertVariant {
    /// Get the CSS class for the alert element.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Success => "quick-panel success",
            Self::Error => "quick-panel error",
            Self::Info => "quick-panel info",
        }
    }
}

/// An alert message component.
///
/// Errors are prefixed with "Error:" and the message is highlighted.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self { variant, message }
    }

    #[must_use]
    pub const fn success(message: &'a str) -> Self {
        Self::new(AlertVariant::Success, message)
    }

    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    #[must_use]
    pub const fn info(message: &'a str) -> Self {
        Self::new(AlertVariant::Info, message)
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            div class=(self.variant.class()) role="status" {
                p class="quick-message" {
                    @if self.variant == AlertVariant::Error {
                        "Error: "
                        strong class="highlight" { (self.message) }
                    } @else {
                        (self.message)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_alert() {
        let html = Alert::success("Post deleted successfully!")
            .render()
            .into_string();
        assert!(html.contains("quick-panel success"));
        assert!(html.contains("Post deleted successfully!"));
        assert!(!html.contains("Error:"));
    }

    #[test]
    fn test_error_alert_highlights_message() {
        let html = Alert::error("Internal server error").render().into_string();
        assert!(html.contains("quick-panel error"));
        assert!(html.contains("Error: <strong class=\"highlight\">Internal server error</strong>"));
    }
}
