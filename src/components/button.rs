//! Button component for the web UI.
//!
//! Renders as a `<button>` or, when an href is set, as an `<a>` styled like one.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    /// Compact icon-style button used in toolbars and post footers
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Danger => "btn btn-danger",
            Self::Icon => "btn btn-icon",
        }
    }
}

/// A configurable button component.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    /// Renders as `<a>` if present
    pub href: Option<&'a str>,
    pub disabled: bool,
    /// Button type attribute, `submit` unless set
    pub r#type: &'a str,
    /// Extra CSS classes appended to the variant's
    pub class: Option<&'a str>,
    pub id: Option<&'a str>,
    pub title: Option<&'a str>,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            href: None,
            disabled: false,
            r#type: "submit",
            class: None,
            id: None,
            title: None,
        }
    }

    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    #[must_use]
    pub fn secondary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Secondary)
    }

    #[must_use]
    pub fn danger(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Danger)
    }

    #[must_use]
    pub fn icon(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Icon)
    }

    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    #[must_use]
    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn button_type(mut self, r#type: &'a str) -> Self {
        self.r#type = r#type;
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    fn full_class(&self) -> String {
        match self.class {
            Some(extra) => format!("{} {extra}", self.variant.class()),
            None => self.variant.class().to_string(),
        }
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let class = self.full_class();
        html! {
            @if let Some(href) = self.href {
                a href=(href) class=(class) id=[self.id] title=[self.title] role="button" { (self.label) }
            } @else {
                button type=(self.r#type) class=(class) id=[self.id] title=[self.title] disabled[self.disabled] {
                    (self.label)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_submit_button() {
        let html = Button::primary("Search").render().into_string();
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_link_button() {
        let html = Button::secondary("Add post")
            .href("/posts/new")
            .render()
            .into_string();
        assert!(html.starts_with("<a"));
        assert!(html.contains(r#"href="/posts/new""#));
    }

    #[test]
    fn test_disabled_with_extra_class() {
        let html = Button::icon("A-Z")
            .class("sort-order")
            .disabled_if(true)
            .render()
            .into_string();
        assert!(html.contains(r#"class="btn btn-icon sort-order""#));
        assert!(html.contains("disabled"));
    }
}
