//! Base layout components for the web UI.
//!
//! This module provides the HTML skeleton shared by every page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Stylesheet inlined into every page; the front end serves no static files.
const STYLE: &str = r"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 60rem; padding: 1rem; }
.toolbar-container, .pagination-container, .pages-container { display: flex; flex-wrap: wrap; gap: .5rem; align-items: center; margin: .75rem 0; }
form { display: inline-flex; gap: .25rem; align-items: center; margin: 0; }
.btn { padding: .3rem .7rem; border-radius: .3rem; border: 1px solid #888; background: #f4f4f4; cursor: pointer; text-decoration: none; color: inherit; }
.btn-primary { background: #007bff; color: #fff; border-color: #007bff; }
.btn-danger { background: #dc3545; color: #fff; border-color: #dc3545; }
.btn[disabled], select[disabled], input[disabled] { opacity: .5; cursor: not-allowed; }
.page-button { min-width: 2rem; }
.hilited-button { background: #007bff; color: #fff; }
.blog-post { list-style: none; border: 1px solid #ddd; border-radius: .5rem; padding: .75rem 1rem; margin: .75rem 0; }
.blog-post-header { display: flex; justify-content: space-between; align-items: center; }
.quick-panel { padding: .5rem 1rem; border-radius: .3rem; margin: .5rem 0; }
.quick-panel.success { background: #e6f4ea; }
.quick-panel.error { background: #fdecea; }
.highlight { color: red; }
.confirmation-panel { border: 2px solid #dc3545; padding: 1rem; border-radius: .5rem; }
.no-posts-message { color: #666; font-style: italic; }
";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Blog Posts" } };
/// let page = BaseLayout::new("Posts").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - MasterBlog" }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    header {
                        a href="/" { strong { "MasterBlog" } }
                    }
                    main class="container" {
                        (content)
                    }
                }
            }
        }
    }
}
