//! Form components for maud templates.
//!
//! Every toolbar action is a small POST form, so these builders carry the
//! `disabled` state derived from the session's control projection.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    pub class: Option<&'a str>,
    pub id: Option<&'a str>,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
            id: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
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
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] id=[self.id] {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    pub name: &'a str,
    /// Input type ("text", "url" or "search")
    pub r#type: &'a str,
    pub value: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub required: bool,
    pub disabled: bool,
    pub id: Option<&'a str>,
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            value: None,
            placeholder: None,
            required: false,
            disabled: false,
            id: None,
        }
    }

    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self::new(name, "text")
    }

    #[must_use]
    pub fn search(name: &'a str) -> Self {
        Self::new(name, "search")
    }

    #[must_use]
    pub fn url(name: &'a str) -> Self {
        Self::new(name, "url")
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                required[self.required]
                disabled[self.disabled]
                id=[self.id];
        }
    }
}

/// A textarea element.
#[derive(Debug)]
pub struct TextArea<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub rows: Option<u32>,
    pub required: bool,
    pub id: Option<&'a str>,
}

impl<'a> TextArea<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            rows: None,
            required: false,
            id: None,
        }
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        html! {
            textarea name=(self.name) rows=[self.rows] required[self.required] id=[self.id] {
                @if let Some(value) = self.value {
                    (value)
                }
            }
        }
    }
}

/// A select dropdown element.
#[derive(Debug)]
pub struct Select<'a> {
    pub name: &'a str,
    pub options: Vec<SelectOption<'a>>,
    pub selected: Option<&'a str>,
    pub id: Option<&'a str>,
    pub disabled: bool,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: None,
            id: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn option(mut self, value: &'a str, label: &'a str) -> Self {
        self.options.push(SelectOption { value, label });
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: &'a str) -> Self {
        self.selected = Some(selected);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Render for Select<'_> {
    fn render(&self) -> Markup {
        html! {
            select name=(self.name) id=[self.id] disabled[self.disabled] {
                @for opt in &self.options {
                    option value=(opt.value) selected[self.selected == Some(opt.value)] {
                        (opt.label)
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

/// A label paired with its control.
#[derive(Debug)]
pub struct FormGroup<'a> {
    pub label: &'a str,
    pub r#for: &'a str,
    pub control: Markup,
}

impl<'a> FormGroup<'a> {
    #[must_use]
    pub fn new(label: &'a str, r#for: &'a str, control: Markup) -> Self {
        Self {
            label,
            r#for,
            control,
        }
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="form-group" {
                label for=(self.r#for) { (self.label) }
                (self.control)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_post() {
        let html = Form::post("/sort/toggle", html! { "x" })
            .class("inline")
            .render()
            .into_string();
        assert!(html.contains(r#"action="/sort/toggle""#));
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"class="inline""#));
    }

    #[test]
    fn test_input_disabled() {
        let html = Input::search("query")
            .value("rust")
            .disabled_if(true)
            .render()
            .into_string();
        assert!(html.contains(r#"type="search""#));
        assert!(html.contains(r#"value="rust""#));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_input_value_is_escaped() {
        let html = Input::text("title")
            .value("<script>")
            .render()
            .into_string();
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_select_marks_selected() {
        let html = Select::new("field")
            .option("title", "Title")
            .option("author", "Author")
            .selected("author")
            .render()
            .into_string();
        assert!(html.contains(r#"<option value="author" selected>Author</option>"#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_textarea_content() {
        let html = TextArea::new("content")
            .value("Body")
            .rows(6)
            .render()
            .into_string();
        assert!(html.contains(r#"rows="6""#));
        assert!(html.contains(">Body</textarea>"));
    }
}
