use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{ApiError, Operation, PostQuery, PostsApi};
use crate::constants::{API_BASE_URL_KEY, USER_AGENT};
use crate::models::{PageResult, Post, PostForm};
use crate::store::SessionStore;

/// HTTP client for the blog API.
///
/// The base URL is read from the session store on every request, so a URL
/// saved from the settings form takes effect immediately.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(store: Arc<dyn SessionStore>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ApiError::Network {
                operation: Operation::List,
                source,
            })?;
        Ok(Self::with_client(client, store))
    }

    #[must_use]
    pub fn with_client(client: Client, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    fn endpoint(&self, path: &str) -> Result<String, ApiError> {
        let base = self.base_url().ok_or(ApiError::MissingBaseUrl)?;
        Ok(format!("{}{path}", base.trim_end_matches('/')))
    }

    async fn send(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = error_detail(response).await;
        warn!(
            status = status.as_u16(),
            operation = operation.gerund(),
            detail = detail.as_deref().unwrap_or(""),
            "API request failed"
        );
        Err(ApiError::Http {
            status: status.as_u16(),
            operation,
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(
        operation: Operation,
        response: Response,
    ) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { operation, source })
    }
}

/// Pull the `error` field out of a JSON error body.
async fn error_detail(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}

#[async_trait]
impl PostsApi for ApiClient {
    fn base_url(&self) -> Option<String> {
        self.store
            .get(API_BASE_URL_KEY)
            .filter(|url| !url.trim().is_empty())
    }

    fn set_base_url(&self, url: &str) -> Result<(), ApiError> {
        let url = url.trim();
        url::Url::parse(url).map_err(|source| ApiError::InvalidBaseUrl {
            url: url.to_string(),
            source,
        })?;
        self.store.set(API_BASE_URL_KEY, url)?;
        info!(base_url = %url, "API base URL saved");
        Ok(())
    }

    async fn fetch_posts(&self, query: &PostQuery) -> Result<PageResult, ApiError> {
        let url = self.endpoint(query.path())?;
        let operation = query.operation();
        debug!(
            url = %url,
            page = query.page(),
            page_size = query.page_size(),
            "Fetching posts"
        );

        let response = self
            .send(operation, self.client.get(&url).query(&query.params()))
            .await?;
        let page: PageResult = Self::decode(operation, response).await?;

        debug!(
            returned = page.posts.len(),
            total = page.total_posts,
            "Posts fetched"
        );
        Ok(page)
    }

    async fn create_post(&self, form: &PostForm) -> Result<Post, ApiError> {
        let url = self.endpoint("/posts")?;
        let response = self
            .send(Operation::Add, self.client.post(&url).json(form))
            .await?;
        let post: Post = Self::decode(Operation::Add, response).await?;
        info!(post_id = post.id, title = %post.title, "Post created");
        Ok(post)
    }

    async fn update_post(&self, id: i64, form: &PostForm) -> Result<Post, ApiError> {
        let url = self.endpoint(&format!("/posts/{id}"))?;
        let response = self
            .send(Operation::Update, self.client.put(&url).json(form))
            .await?;
        let post: Post = Self::decode(Operation::Update, response).await?;
        info!(post_id = post.id, "Post updated");
        Ok(post)
    }

    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/posts/{id}"))?;
        self.send(Operation::Delete, self.client.delete(&url)).await?;
        info!(post_id = id, "Post deleted");
        Ok(())
    }

    async fn like_post(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/like/{id}"))?;
        self.send(Operation::Like, self.client.post(&url)).await?;
        debug!(post_id = id, "Post liked");
        Ok(())
    }
}
