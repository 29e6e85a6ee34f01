use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;

use super::pages::{render_home_page, render_post_dialog_page, DialogKind, HomePageParams};
use super::{AppState, PendingDelete};
use crate::api::PostsApi;
use crate::components::AlertVariant;
use crate::models::{Field, PageSize, PostForm};
use crate::session::ActionError;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/settings/api", post(set_base_url))
        .route("/sort/toggle", post(toggle_sort))
        .route("/sort/order", post(toggle_sort_order))
        .route("/sort/field", post(change_sort_field))
        .route("/search", post(enter_search))
        .route("/search/exit", post(exit_search))
        .route("/page-size", post(change_page_size))
        .route("/page/:page", post(go_to_page))
        .route("/posts/new", get(new_post_form))
        .route("/posts", post(create_post))
        .route("/posts/:id/edit", get(edit_post_form))
        .route("/posts/:id", post(update_post))
        .route("/posts/:id/delete", post(request_delete))
        .route("/confirm", post(confirm_delete))
        .route("/posts/:id/like", post(like_post))
        .route("/api/controls", get(api_controls))
        .route("/healthz", get(health))
}

/// Every action redirects back to the home page (post/redirect/get).
fn back_home() -> Response {
    Redirect::to("/").into_response()
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>) -> Response {
    let mut frontend = state.frontend.lock().await;

    // First visit with a known API: load the current page.
    if frontend.listing.is_none() && frontend.session.api().base_url().is_some() {
        let result = frontend.session.refresh().await;
        frontend.apply(result);
    }

    let notice = frontend.notice.take();
    let base_url = frontend.session.api().base_url();
    let html = render_home_page(&HomePageParams {
        state: frontend.session.state(),
        controls: frontend.session.controls(),
        search_text: frontend.session.search_text(),
        base_url: base_url.as_deref(),
        listing: frontend.listing.as_ref(),
        notice: notice.as_ref(),
        pending_delete: frontend.pending_delete.as_ref().map(|p| p.title.as_str()),
    });
    Html(html.into_string()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct BaseUrlForm {
    base_url: String,
}

async fn set_base_url(State(state): State<AppState>, Form(form): Form<BaseUrlForm>) -> Response {
    let mut frontend = state.frontend.lock().await;
    let result = frontend.session.set_base_url(&form.base_url).await;
    frontend.apply(result);
    back_home()
}

// ========== Sort ==========

async fn toggle_sort(State(state): State<AppState>) -> Response {
    let mut frontend = state.frontend.lock().await;
    let result = frontend.session.toggle_sort().await;
    frontend.apply(result);
    back_home()
}

async fn toggle_sort_order(State(state): State<AppState>) -> Response {
    let mut frontend = state.frontend.lock().await;
    match frontend.session.toggle_sort_order().await {
        Ok(Some(listing)) => frontend.listing = Some(listing),
        Ok(None) => {}
        Err(e) => frontend.fail(&e),
    }
    back_home()
}

#[derive(Debug, Deserialize)]
pub struct SortFieldForm {
    field: Field,
}

async fn change_sort_field(
    State(state): State<AppState>,
    Form(form): Form<SortFieldForm>,
) -> Response {
    let mut frontend = state.frontend.lock().await;
    match frontend.session.change_sort_field(form.field).await {
        Ok(Some(listing)) => frontend.listing = Some(listing),
        Ok(None) => {}
        Err(e) => frontend.fail(&e),
    }
    back_home()
}

// ========== Search ==========

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    query: String,
    /// Absent while the field selector is disabled
    field: Option<Field>,
}

async fn enter_search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    let mut frontend = state.frontend.lock().await;
    let field = form
        .field
        .unwrap_or(frontend.session.state().search_field);
    match frontend.session.enter_search(&form.query, field).await {
        Ok(Some(listing)) => frontend.listing = Some(listing),
        Ok(None) => {}
        Err(e) => frontend.fail(&e),
    }
    back_home()
}

async fn exit_search(State(state): State<AppState>) -> Response {
    let mut frontend = state.frontend.lock().await;
    match frontend.session.exit_search().await {
        Ok(Some(listing)) => frontend.listing = Some(listing),
        Ok(None) => {}
        Err(e) => frontend.fail(&e),
    }
    back_home()
}

// ========== Paging ==========

#[derive(Debug, Deserialize)]
pub struct PageSizeForm {
    page_size: u32,
}

async fn change_page_size(
    State(state): State<AppState>,
    Form(form): Form<PageSizeForm>,
) -> Response {
    let size = match PageSize::try_from(form.page_size) {
        Ok(size) => size,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    let mut frontend = state.frontend.lock().await;
    let result = frontend.session.change_page_size(size).await;
    frontend.apply(result);
    back_home()
}

async fn go_to_page(State(state): State<AppState>, Path(page): Path<u32>) -> Response {
    let mut frontend = state.frontend.lock().await;
    let result = frontend.session.go_to_page(page).await;
    frontend.apply(result);
    back_home()
}

// ========== Posts ==========

async fn new_post_form() -> Response {
    let html = render_post_dialog_page(DialogKind::Create, &PostForm::default(), None);
    Html(html.into_string()).into_response()
}

async fn create_post(State(state): State<AppState>, Form(form): Form<PostForm>) -> Response {
    let mut frontend = state.frontend.lock().await;
    match frontend.session.add_post(&form).await {
        Ok(mutation) => {
            frontend.succeed(format!(
                "The post '{}' has been successfully added!",
                mutation.value.title
            ));
            frontend.apply(mutation.listing);
        }
        Err(ActionError::Validation(errors)) => {
            let html = render_post_dialog_page(DialogKind::Create, &form, Some(&errors));
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(html.into_string())).into_response();
        }
        Err(ActionError::Api(e)) => frontend.fail(&e),
    }
    back_home()
}

async fn edit_post_form(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut frontend = state.frontend.lock().await;
    let post = frontend
        .listing
        .as_ref()
        .and_then(|l| l.page.posts.iter().find(|p| p.id == id))
        .map(PostForm::from_post);

    match post {
        Some(form) => {
            let html = render_post_dialog_page(DialogKind::Update(id), &form, None);
            Html(html.into_string()).into_response()
        }
        None => {
            tracing::debug!(post_id = id, "Post not on the current page");
            frontend.notify(AlertVariant::Error, "The requested post was not found");
            back_home()
        }
    }
}

async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Response {
    let mut frontend = state.frontend.lock().await;
    match frontend.session.update_post(id, &form).await {
        Ok(mutation) => {
            frontend.succeed(format!(
                "The post '{}' has been successfully updated!",
                mutation.value.title
            ));
            frontend.apply(mutation.listing);
        }
        Err(ActionError::Validation(errors)) => {
            let html = render_post_dialog_page(DialogKind::Update(id), &form, Some(&errors));
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(html.into_string())).into_response();
        }
        Err(ActionError::Api(e)) => frontend.fail(&e),
    }
    back_home()
}

async fn request_delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut frontend = state.frontend.lock().await;
    let title = frontend
        .post_title(id)
        .map_or_else(|| format!("#{id}"), str::to_string);
    // Replacing an unanswered request drops it, which declines that delete.
    frontend.pending_delete = Some(PendingDelete::open(&state.frontend, id, title));
    back_home()
}

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    answer: String,
}

async fn confirm_delete(State(state): State<AppState>, Form(form): Form<ConfirmForm>) -> Response {
    let pending = state.frontend.lock().await.pending_delete.take();
    if let Some(pending) = pending {
        // The delete task needs the lock, so the guard above is already gone.
        pending.answer(form.answer == "yes").await;
    }
    back_home()
}

async fn like_post(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut frontend = state.frontend.lock().await;
    match frontend.session.like_post(id).await {
        Ok(mutation) => frontend.apply(mutation.listing),
        Err(e) => frontend.fail(&e),
    }
    back_home()
}

// ========== JSON API Routes ==========

#[derive(Debug, Deserialize)]
pub struct ControlsQuery {
    #[serde(default)]
    text: String,
}

async fn api_controls(
    State(state): State<AppState>,
    Query(params): Query<ControlsQuery>,
) -> Response {
    let mut frontend = state.frontend.lock().await;
    Json(frontend.session.search_field_changed(&params.text)).into_response()
}

async fn health() -> &'static str {
    "ok"
}
