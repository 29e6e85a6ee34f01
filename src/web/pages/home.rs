//! Home page: toolbar, notices, the post list and pagination.

use maud::{html, Markup};

use crate::components::{
    Alert, BaseLayout, ConfirmationPanel, PageSizeMenu, Pagination, PostList, Toolbar,
};
use crate::session::{Controls, Listing, SessionState};
use crate::web::Notice;

/// Parameters for rendering the home page.
#[derive(Debug, Clone)]
pub struct HomePageParams<'a> {
    pub state: &'a SessionState,
    pub controls: Controls,
    pub search_text: &'a str,
    pub base_url: Option<&'a str>,
    /// Latest listing; `None` until the first successful fetch
    pub listing: Option<&'a Listing>,
    pub notice: Option<&'a Notice>,
    /// Title of the post awaiting delete confirmation
    pub pending_delete: Option<&'a str>,
}

/// Render the home page.
#[must_use]
pub fn render_home_page(params: &HomePageParams<'_>) -> Markup {
    let content = html! {
        (Toolbar::new(params.state, params.controls, params.search_text, params.base_url))

        @if let Some(notice) = params.notice {
            (Alert::new(notice.variant, &notice.message))
        }

        @if let Some(title) = params.pending_delete {
            (ConfirmationPanel::new(title))
        }

        @match (params.base_url, params.listing) {
            (None, _) => {
                (Alert::info("Enter the API base URL above to load posts."))
            }
            (Some(_), None) => {
                (PostList::new(&[], 0))
            }
            (Some(_), Some(listing)) => {
                @if params.state.search_enabled {
                    p class="search-summary" {
                        "Results for \u{201C}" (params.state.search_query) "\u{201D} in "
                        (params.state.search_field.label())
                    }
                }
                (PostList::new(&listing.page.posts, listing.page.total_posts))
                div class="pagination-container" {
                    (PageSizeMenu { selected: params.state.page_size.get() })
                    (Pagination::new(&listing.plan))
                }
            }
        }
    };

    BaseLayout::new("Blog Posts").render(content)
}
