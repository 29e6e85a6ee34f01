//! Pagination component for navigating through multi-page content.
//!
//! Renders a [`PaginationPlan`] as a row of small POST forms, one per button,
//! each targeting `/page/{n}`.

use maud::{html, Markup, Render};

use crate::pagination::{PageButton, PaginationPlan};

/// Pagination bar for the posts list.
///
/// Renders nothing when the plan is empty (zero or one page).
#[derive(Debug, Clone)]
pub struct Pagination<'a> {
    pub plan: &'a PaginationPlan,
}

impl<'a> Pagination<'a> {
    #[must_use]
    pub fn new(plan: &'a PaginationPlan) -> Self {
        Self { plan }
    }

    fn build_url(page_num: u32) -> String {
        format!("/page/{page_num}")
    }

    /// Check if pagination should be displayed.
    #[must_use]
    pub fn should_display(&self) -> bool {
        !self.plan.is_empty()
    }
}

impl Render for Pagination<'_> {
    fn render(&self) -> Markup {
        if !self.should_display() {
            return html! {};
        }

        html! {
            nav class="pages-container" aria-label="Pagination" {
                @for entry in &self.plan.buttons {
                    form class="page-form" method="post" action=(Self::build_url(entry.target())) {
                        @match entry {
                            PageButton::Page { number, current: true } => {
                                button type="submit" class="page-button hilited-button" aria-current="page" { (number) }
                            }
                            PageButton::Page { number, current: false } => {
                                button type="submit" class="page-button" { (number) }
                            }
                            PageButton::Nav { action, .. } => {
                                button type="submit" class="page-button nav-button" { (action.label()) }
                            }
                        }
                    }
                }
            }
        }
    }
}
