//! Access to the remote blog-post API.
//!
//! [`PostsApi`] is the seam between the session state machine and the network.
//! [`ApiClient`] implements it over HTTP; tests substitute in-memory fakes.

mod client;

pub use client::ApiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Direction, Field, PageResult, Post, PostForm};
use crate::store::StoreError;

/// API operation, used to word failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Search,
    Add,
    Update,
    Delete,
    Like,
}

impl Operation {
    #[must_use]
    pub const fn gerund(&self) -> &'static str {
        match self {
            Self::List => "loading posts",
            Self::Search => "searching posts",
            Self::Add => "adding post",
            Self::Update => "updating post",
            Self::Delete => "deleting post",
            Self::Like => "liking post",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API base URL is not set")]
    MissingBaseUrl,
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("network error while {}: {source}", .operation.gerund())]
    Network {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{} failed with status {status}", .operation.gerund())]
    Http {
        status: u16,
        operation: Operation,
        /// Server-provided error text, when the body carried one.
        detail: Option<String>,
    },
    #[error("unexpected response while {}: {source}", .operation.gerund())]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Short message suitable for a transient notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingBaseUrl => "Set the API base URL first".to_string(),
            Self::InvalidBaseUrl { url, .. } => format!("'{url}' is not a valid URL"),
            Self::Network { .. } => "Could not reach the API".to_string(),
            Self::Http {
                status, operation, ..
            } => match status {
                400 => "Invalid request: check your data".to_string(),
                404 => "The requested post was not found".to_string(),
                429 => "Rate limit exceeded, please try again later".to_string(),
                500 => "Internal server error".to_string(),
                _ => format!("Error {} ({status})", operation.gerund()),
            },
            Self::Decode { .. } => "The API returned an unexpected response".to_string(),
            Self::Store(_) => "Could not save the API base URL".to_string(),
        }
    }

    /// HTTP status, if the API answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A request for one page of posts.
///
/// Search and sort parameters never travel together: a search request has no
/// sort, and a listing may have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostQuery {
    List {
        sort: Option<(Field, Direction)>,
        page_size: u32,
        page: u32,
    },
    Search {
        search_for: String,
        search_by: Field,
        page_size: u32,
        page: u32,
    },
}

impl PostQuery {
    /// Path below the base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::List { .. } => "/posts",
            Self::Search { .. } => "/posts/search",
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::List { .. } => Operation::List,
            Self::Search { .. } => Operation::Search,
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        match self {
            Self::List { page, .. } | Self::Search { page, .. } => *page,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        match self {
            Self::List { page_size, .. } | Self::Search { page_size, .. } => *page_size,
        }
    }

    /// Query-string parameters, in the order they are sent.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        match self {
            Self::List { sort, .. } => {
                if let Some((field, direction)) = sort {
                    params.push(("sort", field.as_str().to_string()));
                    params.push(("direction", direction.as_str().to_string()));
                }
            }
            Self::Search {
                search_for,
                search_by,
                ..
            } => {
                params.push(("search_for", search_for.clone()));
                params.push(("search_by", search_by.as_str().to_string()));
            }
        }
        params.push(("pageSize", self.page_size().to_string()));
        params.push(("page", self.page().to_string()));
        params
    }
}

/// Operations the front end performs against the blog API.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Currently configured base URL, if any.
    fn base_url(&self) -> Option<String>;

    /// Validate and persist a new base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or cannot be stored.
    fn set_base_url(&self, url: &str) -> Result<(), ApiError>;

    async fn fetch_posts(&self, query: &PostQuery) -> Result<PageResult, ApiError>;

    async fn create_post(&self, form: &PostForm) -> Result<Post, ApiError>;

    async fn update_post(&self, id: i64, form: &PostForm) -> Result<Post, ApiError>;

    async fn delete_post(&self, id: i64) -> Result<(), ApiError>;

    async fn like_post(&self, id: i64) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_without_sort() {
        let query = PostQuery::List {
            sort: None,
            page_size: 10,
            page: 3,
        };
        assert_eq!(query.path(), "/posts");
        assert_eq!(
            query.params(),
            [("pageSize", "10".to_string()), ("page", "3".to_string())]
        );
    }

    #[test]
    fn test_list_params_with_sort() {
        let query = PostQuery::List {
            sort: Some((Field::Date, Direction::Desc)),
            page_size: 20,
            page: 1,
        };
        let params = query.params();
        assert_eq!(params[0], ("sort", "date".to_string()));
        assert_eq!(params[1], ("direction", "desc".to_string()));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_search_params() {
        let query = PostQuery::Search {
            search_for: "rust".into(),
            search_by: Field::Content,
            page_size: 50,
            page: 2,
        };
        assert_eq!(query.path(), "/posts/search");
        assert_eq!(query.operation(), Operation::Search);
        let names: Vec<&str> = query.params().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ["search_for", "search_by", "pageSize", "page"]);
    }

    #[test]
    fn test_user_messages_by_status() {
        let err = |status| ApiError::Http {
            status,
            operation: Operation::Delete,
            detail: None,
        };
        assert_eq!(err(400).user_message(), "Invalid request: check your data");
        assert_eq!(err(404).user_message(), "The requested post was not found");
        assert_eq!(err(500).user_message(), "Internal server error");
        assert_eq!(err(503).user_message(), "Error deleting post (503)");
        assert_eq!(err(503).status(), Some(503));
        assert_eq!(ApiError::MissingBaseUrl.status(), None);
    }
}
