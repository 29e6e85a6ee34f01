use thiserror::Error;
use tracing::{debug, info};

use super::{Controls, LastOperation, Listing, SessionState};
use crate::api::{ApiError, PostsApi};
use crate::confirm::Decision;
use crate::models::{Direction, Field, PageSize, Post, PostForm, ValidationError};

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result of a successful write: the API's answer plus the reload that
/// followed it. The write stands even when the reload fails.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub listing: Result<Listing, ApiError>,
}

/// The interaction state machine.
///
/// Each transition builds the next state, fetches the page it describes and
/// commits the state only once that fetch succeeded, so a failed request
/// leaves the session as it was. Transitions take `&mut self` and hold it
/// across the fetch, which keeps at most one listing request in flight.
#[derive(Debug)]
pub struct Session<A> {
    api: A,
    state: SessionState,
    search_text: String,
    total_pages: Option<u32>,
}

impl<A: PostsApi> Session<A> {
    #[must_use]
    pub fn new(api: A, page_size: PageSize) -> Self {
        Self {
            api,
            state: SessionState::new(page_size),
            search_text: String::new(),
            total_pages: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Current contents of the search box.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        self.state.controls(&self.search_text)
    }

    /// Page count of the most recent successful listing.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Reload the current page.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn refresh(&mut self) -> Result<Listing, ApiError> {
        let mut next = self.state.clone();
        next.last_operation = LastOperation::List;
        self.load(next, false).await
    }

    /// Save a new API base URL and show its first page.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the first page cannot be fetched.
    pub async fn set_base_url(&mut self, url: &str) -> Result<Listing, ApiError> {
        self.api.set_base_url(url)?;
        let mut next = self.state.clone();
        next.current_page = 1;
        next.last_operation = LastOperation::List;
        self.load(next, false).await
    }

    /// Switch sort mode on or off and reload the current page.
    ///
    /// Switching off resets the direction to ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn toggle_sort(&mut self) -> Result<Listing, ApiError> {
        let mut next = self.state.clone();
        next.sort_enabled = !next.sort_enabled;
        if !next.sort_enabled {
            next.sort_direction = Direction::Asc;
        }
        next.last_operation = LastOperation::Sort;
        debug!(sort_enabled = next.sort_enabled, "Toggling sort mode");
        self.load(next, false).await
    }

    /// Flip the sort direction. Does nothing while sort mode is off.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn toggle_sort_order(&mut self) -> Result<Option<Listing>, ApiError> {
        if !self.state.sort_enabled {
            return Ok(None);
        }
        let mut next = self.state.clone();
        next.sort_direction = next.sort_direction.flipped();
        next.last_operation = LastOperation::Sort;
        self.load(next, false).await.map(Some)
    }

    /// Choose the sort field. Reloads only while sort mode is on.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn change_sort_field(&mut self, field: Field) -> Result<Option<Listing>, ApiError> {
        if !self.state.sort_enabled {
            self.state.sort_field = field;
            return Ok(None);
        }
        let mut next = self.state.clone();
        next.sort_field = field;
        next.last_operation = LastOperation::Sort;
        self.load(next, false).await.map(Some)
    }

    /// Enter search mode for `query` and show the first page of matches.
    ///
    /// A blank query is ignored: no request is made and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn enter_search(
        &mut self,
        query: &str,
        field: Field,
    ) -> Result<Option<Listing>, ApiError> {
        self.search_text = query.to_string();
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring empty search");
            return Ok(None);
        }

        let mut next = self.state.clone();
        next.saved_page_before_search = self.state.current_page;
        next.search_enabled = true;
        next.search_query = query.to_string();
        next.search_field = field;
        next.current_page = 1;
        next.last_operation = LastOperation::Search;
        info!(query = %query, field = %field, "Entering search mode");
        self.load(next, false).await.map(Some)
    }

    /// Leave search mode and return to the page shown before it.
    ///
    /// Does nothing when search mode is already off.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn exit_search(&mut self) -> Result<Option<Listing>, ApiError> {
        if !self.state.search_enabled {
            return Ok(None);
        }
        let mut next = self.state.clone();
        next.search_enabled = false;
        next.search_query.clear();
        next.current_page = next.saved_page_before_search.max(1);
        next.last_operation = LastOperation::List;
        let listing = self.load(next, false).await?;
        self.search_text.clear();
        info!("Left search mode");
        Ok(Some(listing))
    }

    /// Record new search-box text and return the resulting control state.
    pub fn search_field_changed(&mut self, text: &str) -> Controls {
        self.search_text = text.to_string();
        self.controls()
    }

    /// Change the page size and go back to the first page.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn change_page_size(&mut self, size: PageSize) -> Result<Listing, ApiError> {
        let mut next = self.state.clone();
        next.page_size = size;
        next.current_page = 1;
        next.last_operation = LastOperation::List;
        self.load(next, false).await
    }

    /// Show page `page`, clamped to the last known page range.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails; the state is unchanged.
    pub async fn go_to_page(&mut self, page: u32) -> Result<Listing, ApiError> {
        let mut page = page.max(1);
        if let Some(total) = self.total_pages.filter(|t| *t > 0) {
            page = page.min(total);
        }
        let mut next = self.state.clone();
        next.current_page = page;
        next.last_operation = LastOperation::List;
        self.load(next, false).await
    }

    /// Create a post and reload the current page.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields (nothing is sent), or the
    /// API error if creation fails.
    pub async fn add_post(&mut self, form: &PostForm) -> Result<Mutation<Post>, ActionError> {
        form.validate()?;
        let post = self.api.create_post(form).await?;
        let mut next = self.state.clone();
        next.last_operation = LastOperation::Add;
        let listing = self.load(next, false).await;
        Ok(Mutation {
            value: post,
            listing,
        })
    }

    /// Replace a post's fields and reload the current page.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields (nothing is sent), or the
    /// API error if the update fails.
    pub async fn update_post(
        &mut self,
        id: i64,
        form: &PostForm,
    ) -> Result<Mutation<Post>, ActionError> {
        form.validate()?;
        let post = self.api.update_post(id, form).await?;
        let mut next = self.state.clone();
        next.last_operation = LastOperation::Update;
        let listing = self.load(next, false).await;
        Ok(Mutation {
            value: post,
            listing,
        })
    }

    /// Delete a post once the user confirms.
    ///
    /// Returns `Ok(None)` when the user declines.
    ///
    /// # Errors
    ///
    /// Returns the API error if the delete request fails.
    pub async fn delete_post(
        &mut self,
        id: i64,
        decision: Decision,
    ) -> Result<Option<Mutation<()>>, ApiError> {
        if !decision.await {
            debug!(post_id = id, "Delete declined");
            return Ok(None);
        }
        self.delete_confirmed(id).await.map(Some)
    }

    /// Delete a post the user has already agreed to delete.
    ///
    /// If the current page comes back empty and is not the first, the
    /// previous page is loaded instead, once.
    ///
    /// # Errors
    ///
    /// Returns the API error if the delete request fails.
    pub async fn delete_confirmed(&mut self, id: i64) -> Result<Mutation<()>, ApiError> {
        self.api.delete_post(id).await?;
        let mut next = self.state.clone();
        next.last_operation = LastOperation::Delete;
        let listing = self.load(next, true).await;
        Ok(Mutation { value: (), listing })
    }

    /// Like a post and reload the current page.
    ///
    /// # Errors
    ///
    /// Returns the API error if the like request fails.
    pub async fn like_post(&mut self, id: i64) -> Result<Mutation<()>, ApiError> {
        self.api.like_post(id).await?;
        let mut next = self.state.clone();
        next.last_operation = LastOperation::List;
        let listing = self.load(next, false).await;
        Ok(Mutation { value: (), listing })
    }

    /// Fetch the page `next` describes and commit `next` on success.
    ///
    /// With `step_back_if_empty`, an empty page past the first is replaced by
    /// the page before it (a single corrective fetch, not a retry loop).
    async fn load(
        &mut self,
        mut next: SessionState,
        step_back_if_empty: bool,
    ) -> Result<Listing, ApiError> {
        let mut page = self.api.fetch_posts(&next.query()).await?;

        if step_back_if_empty && page.is_empty() && next.current_page > 1 {
            next.current_page -= 1;
            debug!(page = next.current_page, "Page emptied by delete, stepping back");
            page = self.api.fetch_posts(&next.query()).await?;
        }

        let listing = Listing::new(page, next.page_size, next.current_page);
        self.total_pages = Some(listing.plan.total_pages);
        self.state = next;
        Ok(listing)
    }
}
