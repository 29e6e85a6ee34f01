//! Integration tests for the HTTP API client against a mock blog API.

use std::sync::Arc;
use std::time::Duration;

use masterblog_frontend::api::{ApiClient, ApiError, Operation, PostQuery, PostsApi};
use masterblog_frontend::constants::API_BASE_URL_KEY;
use masterblog_frontend::models::{Direction, Field, PostForm};
use masterblog_frontend::store::{MemoryStore, SessionStore};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let store = Arc::new(MemoryStore::new());
    store
        .set(API_BASE_URL_KEY, &format!("{}/api/", server.uri()))
        .unwrap();
    ApiClient::new(store, Duration::from_secs(5)).unwrap()
}

fn post_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "author": "Ada",
        "content": "Body",
        "date": "Mon, Jan 01, 2024",
        "likes": 2
    })
}

fn form() -> PostForm {
    PostForm {
        title: "Hello".into(),
        author: "Ada".into(),
        content: "Body".into(),
    }
}

#[tokio::test]
async fn test_list_sends_paging_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("pageSize", "20"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_json(21, "Twenty-one")],
            "totalPosts": 21
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .fetch_posts(&PostQuery::List {
            sort: None,
            page_size: 20,
            page: 2,
        })
        .await
        .unwrap();

    assert_eq!(page.total_posts, 21);
    assert_eq!(page.posts[0].title, "Twenty-one");
    assert_eq!(page.posts[0].like_count, 2);
}

#[tokio::test]
async fn test_list_sends_sort_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("sort", "date"))
        .and(query_param("direction", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [],
            "totalPosts": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .fetch_posts(&PostQuery::List {
            sort: Some((Field::Date, Direction::Desc)),
            page_size: 10,
            page: 1,
        })
        .await
        .unwrap();

    assert!(page.is_empty());
}

#[tokio::test]
async fn test_search_uses_search_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/search"))
        .and(query_param("search_for", "rust"))
        .and(query_param("search_by", "author"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_json(1, "Found")],
            "totalPosts": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .fetch_posts(&PostQuery::Search {
            search_for: "rust".into(),
            search_by: Field::Author,
            page_size: 10,
            page: 1,
        })
        .await
        .unwrap();

    assert_eq!(page.posts.len(), 1);
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(body_json(json!({"title": "Hello", "author": "Ada", "content": "Body"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(post_json(9, "Hello")))
        .expect(1)
        .mount(&server)
        .await;

    let post = client_for(&server).create_post(&form()).await.unwrap();
    assert_eq!(post.id, 9);
}

#[tokio::test]
async fn test_update_delete_and_like_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/posts/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(3, "Hello")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/like/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.update_post(3, &form()).await.unwrap().id, 3);
    client.delete_post(3).await.unwrap();
    client.like_post(3).await.unwrap();
}

#[tokio::test]
async fn test_http_error_carries_detail_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Post not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_post(404).await.unwrap_err();
    match &err {
        ApiError::Http {
            status,
            operation,
            detail,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(*operation, Operation::Delete);
            assert_eq!(detail.as_deref(), Some("Post not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "The requested post was not found");
}

#[tokio::test]
async fn test_unknown_status_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_posts(&PostQuery::List {
            sort: None,
            page_size: 10,
            page: 1,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message(), "Error loading posts (503)");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_posts(&PostQuery::List {
            sort: None,
            page_size: 10,
            page: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_missing_base_url() {
    let client = ApiClient::new(Arc::new(MemoryStore::new()), Duration::from_secs(5)).unwrap();
    assert!(client.base_url().is_none());

    let err = client.like_post(1).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingBaseUrl));
}

#[tokio::test]
async fn test_set_base_url_validates_and_persists() {
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(store.clone(), Duration::from_secs(5)).unwrap();

    let err = client.set_base_url("not a url").unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    assert!(store.get(API_BASE_URL_KEY).is_none());

    client.set_base_url("  http://localhost:5002/api  ").unwrap();
    assert_eq!(
        store.get(API_BASE_URL_KEY).as_deref(),
        Some("http://localhost:5002/api")
    );
    assert_eq!(client.base_url().as_deref(), Some("http://localhost:5002/api"));
}

#[tokio::test]
async fn test_unreachable_api_is_network_error() {
    let store = Arc::new(MemoryStore::new());
    store.set(API_BASE_URL_KEY, "http://127.0.0.1:9").unwrap();
    let client = ApiClient::new(store, Duration::from_secs(2)).unwrap();

    let err = client.delete_post(1).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Network {
            operation: Operation::Delete,
            ..
        }
    ));
}
