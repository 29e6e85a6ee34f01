//! Interaction state for the posts list.
//!
//! [`SessionState`] holds the sort, search and paging choices of the one
//! browsing session. Everything the UI enables or disables, and every query
//! sent to the API, is derived from it. [`Session`] owns the state and is the
//! only way to change it.

mod machine;

pub use machine::{ActionError, Mutation, Session};

use serde::Serialize;

use crate::api::PostQuery;
use crate::models::{Direction, Field, PageResult, PageSize};
use crate::pagination::{self, PaginationPlan};

/// The last operation that triggered a reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LastOperation {
    #[default]
    None,
    Add,
    Delete,
    Update,
    List,
    Search,
    Sort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Always at least 1.
    pub current_page: u32,
    pub page_size: PageSize,
    pub sort_enabled: bool,
    pub sort_field: Field,
    pub sort_direction: Direction,
    pub search_enabled: bool,
    pub search_field: Field,
    pub search_query: String,
    /// Page to return to when search mode is left.
    pub saved_page_before_search: u32,
    pub last_operation: LastOperation,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl SessionState {
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
            sort_enabled: false,
            sort_field: Field::default(),
            sort_direction: Direction::Asc,
            search_enabled: false,
            search_field: Field::default(),
            search_query: String::new(),
            saved_page_before_search: 1,
            last_operation: LastOperation::None,
        }
    }

    /// The request a reload sends for this state.
    ///
    /// Search mode wins over sort mode: while searching, no sort parameters
    /// are sent even if sorting is switched on.
    #[must_use]
    pub fn query(&self) -> PostQuery {
        let page_size = self.page_size.get();
        let page = self.current_page.max(1);

        if self.search_enabled {
            PostQuery::Search {
                search_for: self.search_query.clone(),
                search_by: self.search_field,
                page_size,
                page,
            }
        } else {
            PostQuery::List {
                sort: self
                    .sort_enabled
                    .then_some((self.sort_field, self.sort_direction)),
                page_size,
                page,
            }
        }
    }

    /// Enablement of the toolbar controls, given the text in the search box.
    #[must_use]
    pub fn controls(&self, search_text: &str) -> Controls {
        let has_text = !search_text.trim().is_empty();
        Controls {
            sort_field_enabled: self.sort_enabled,
            sort_direction_enabled: self.sort_enabled,
            direction_icon: if self.sort_enabled {
                self.sort_direction
            } else {
                Direction::Asc
            },
            search_submit_enabled: has_text,
            search_field_enabled: has_text,
            exit_search_enabled: self.search_enabled,
        }
    }
}

/// Which toolbar controls are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub sort_field_enabled: bool,
    pub sort_direction_enabled: bool,
    /// Direction shown on the sort-order button.
    pub direction_icon: Direction,
    pub search_submit_enabled: bool,
    pub search_field_enabled: bool,
    pub exit_search_enabled: bool,
}

/// A fetched page together with its pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub page: PageResult,
    pub plan: PaginationPlan,
}

impl Listing {
    #[must_use]
    pub fn new(page: PageResult, page_size: PageSize, current_page: u32) -> Self {
        let plan = pagination::plan(page.total_posts, page_size.get(), current_page);
        Self { page, plan }
    }

    /// True when the whole result set is empty.
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        self.page.total_posts == 0
    }
}
