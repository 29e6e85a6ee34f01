//! Post list, post card and the create/update dialog.

use maud::{html, Markup, Render};

use super::{Button, Form, FormGroup, Input, TextArea};
use crate::models::{Post, PostForm, ValidationError};

/// A single post with its update, delete and like actions.
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self { post }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let edit_url = format!("/posts/{}/edit", post.id);
        let delete_url = format!("/posts/{}/delete", post.id);
        let like_url = format!("/posts/{}/like", post.id);

        html! {
            li class="blog-post" id=(format!("post-{}", post.id)) {
                @if !post.date.is_empty() {
                    p class="date" { strong { "Date:" } " " (post.date) }
                }
                div class="blog-post-header" {
                    h2 { (post.title) }
                    div class="blog-post-actions" {
                        (Button::secondary("Update").href(&edit_url).class("update-button"))
                        (Form::post(&delete_url, html! {
                            (Button::danger("Delete").class("delete-button"))
                        }))
                    }
                }
                p class="author" { strong { "Author:" } " " (post.author) }
                p class="post-content" { (post.content) }
                div class="blog-post-footer" {
                    (Form::post(&like_url, html! {
                        button type="submit" class="btn btn-icon like-button" title="Like" {
                            "\u{1F44D} "
                            span class="like-count" id=(format!("like-count-{}", post.id)) { (post.like_count) }
                        }
                    }))
                }
            }
        }
    }
}

/// The posts of one page, or the empty-state message when there are none.
#[derive(Debug, Clone)]
pub struct PostList<'a> {
    pub posts: &'a [Post],
    pub total_posts: u64,
}

impl<'a> PostList<'a> {
    #[must_use]
    pub const fn new(posts: &'a [Post], total_posts: u64) -> Self {
        Self { posts, total_posts }
    }
}

impl Render for PostList<'_> {
    fn render(&self) -> Markup {
        html! {
            div id="container" {
                h1 { "Blog Posts" }
                @if self.total_posts == 0 {
                    div class="no-posts-message" { "No posts available." }
                } @else {
                    ul {
                        @for post in self.posts {
                            (PostCard::new(post))
                        }
                    }
                }
            }
        }
    }
}

/// Create or update dialog.
#[derive(Debug)]
pub struct PostDialog<'a> {
    pub heading: &'a str,
    /// Form target
    pub action: &'a str,
    pub form: &'a PostForm,
    /// Blank fields from the last submission attempt
    pub errors: Option<&'a ValidationError>,
}

impl<'a> PostDialog<'a> {
    #[must_use]
    pub const fn new(heading: &'a str, action: &'a str, form: &'a PostForm) -> Self {
        Self {
            heading,
            action,
            form,
            errors: None,
        }
    }

    #[must_use]
    pub const fn with_errors(mut self, errors: Option<&'a ValidationError>) -> Self {
        self.errors = errors;
        self
    }
}

impl Render for PostDialog<'_> {
    fn render(&self) -> Markup {
        let content = html! {
            div class="dialog-fields" {
                (FormGroup::new("Title", "title",
                    Input::text("title").id("title").value(&self.form.title).required().render()))
                (FormGroup::new("Author", "author",
                    Input::text("author").id("author").value(&self.form.author).required().render()))
                (FormGroup::new("Content", "content",
                    TextArea::new("content").id("content").value(&self.form.content).rows(6).required().render()))
                div class="dialog-actions" {
                    (Button::primary("Submit").id("submit-button"))
                    (Button::secondary("Cancel").href("/").id("cancel-button"))
                }
            }
        };

        html! {
            section id="modal" class="dialog" {
                h2 id="form-title" { (self.heading) }
                @if let Some(errors) = self.errors {
                    p class="quick-panel error" {
                        "Please fill in: " (errors.missing.join(", "))
                    }
                }
                (Form::post(self.action, content).id("blogPostForm"))
            }
        }
    }
}
