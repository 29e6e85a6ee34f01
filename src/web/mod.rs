mod pages;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::api::{ApiClient, ApiError, PostsApi};
use crate::components::AlertVariant;
use crate::config::Config;
use crate::confirm::{self, ConfirmationRequest, Decision};
use crate::constants::API_BASE_URL_KEY;
use crate::session::{Listing, Session};
use crate::store::{FileStore, SessionStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub frontend: Arc<Mutex<Frontend>>,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, api: ApiClient) -> Self {
        let session = Session::new(api, config.page_size());
        Self {
            frontend: Arc::new(Mutex::new(Frontend::new(session))),
            config: Arc::new(config),
        }
    }
}

/// A one-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub variant: AlertVariant,
    pub message: String,
}

/// A delete waiting for the user's answer.
///
/// The delete itself runs on its own task, parked on the confirmation until
/// `/confirm` answers or the request is dropped.
#[derive(Debug)]
pub struct PendingDelete {
    pub post_id: i64,
    pub title: String,
    request: ConfirmationRequest,
    task: JoinHandle<()>,
}

impl PendingDelete {
    fn open(frontend: &Arc<Mutex<Frontend>>, post_id: i64, title: String) -> Self {
        let (request, decision) =
            confirm::request(format!("Are you sure you want to delete this '{title}' post?"));
        let task = tokio::spawn(delete_when_confirmed(
            Arc::clone(frontend),
            post_id,
            decision,
        ));
        Self {
            post_id,
            title,
            request,
            task,
        }
    }

    /// Answer the dialog and wait for the delete it releases to finish.
    ///
    /// Must be called without holding the frontend lock.
    async fn answer(self, confirmed: bool) {
        let post_id = self.post_id;
        self.request.resolve(confirmed);
        if let Err(e) = self.task.await {
            error!(post_id, error = %e, "Delete task failed");
        }
    }
}

async fn delete_when_confirmed(frontend: Arc<Mutex<Frontend>>, post_id: i64, decision: Decision) {
    // Wait unlocked so the page and `/confirm` stay usable meanwhile.
    if !decision.await {
        debug!(post_id, "Delete declined");
        return;
    }
    let mut frontend = frontend.lock().await;
    match frontend.session.delete_confirmed(post_id).await {
        Ok(mutation) => {
            frontend.succeed("Post deleted successfully!");
            frontend.apply(mutation.listing);
        }
        Err(e) => frontend.fail(&e),
    }
}

/// The single browsing session plus what the next render needs.
#[derive(Debug)]
pub struct Frontend {
    pub session: Session<ApiClient>,
    /// Most recent successfully fetched page.
    pub listing: Option<Listing>,
    pub notice: Option<Notice>,
    pub pending_delete: Option<PendingDelete>,
}

impl Frontend {
    #[must_use]
    pub fn new(session: Session<ApiClient>) -> Self {
        Self {
            session,
            listing: None,
            notice: None,
            pending_delete: None,
        }
    }

    /// Keep a fresh listing, or turn a failure into an error notice.
    pub fn apply(&mut self, result: Result<Listing, ApiError>) {
        match result {
            Ok(listing) => self.listing = Some(listing),
            Err(e) => self.fail(&e),
        }
    }

    pub fn fail(&mut self, error: &ApiError) {
        tracing::warn!(error = %error, "Operation failed");
        self.notify(AlertVariant::Error, error.user_message());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.notify(AlertVariant::Success, message);
    }

    /// Replace the pending notice.
    pub fn notify(&mut self, variant: AlertVariant, message: impl Into<String>) {
        self.notice = Some(Notice {
            variant,
            message: message.into(),
        });
    }

    /// Title of a post on the current page, if it is there.
    #[must_use]
    pub fn post_title(&self, id: i64) -> Option<&str> {
        self.listing
            .as_ref()?
            .page
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.title.as_str())
    }
}

/// Build the router with all routes and layers.
pub fn create_app(state: AppState) -> Router {
    routes::router()
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the session store cannot be opened or the server fails
/// to start.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let store = FileStore::open(&config.session_store_path).with_context(|| {
        format!(
            "Failed to open session store: {}",
            config.session_store_path.display()
        )
    })?;
    if store.get(API_BASE_URL_KEY).is_none() {
        if let Some(url) = &config.api_base_url {
            store
                .set(API_BASE_URL_KEY, url)
                .context("Failed to seed API base URL")?;
        }
    }

    let api = ApiClient::new(Arc::new(store), config.request_timeout)
        .context("Failed to create API client")?;
    match api.base_url() {
        Some(url) => info!(base_url = %url, "Using stored API base URL"),
        None => info!("No API base URL yet; it can be set from the web UI"),
    }

    let app = create_app(AppState::new(config, api));

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .await
        .context("Web server error")?;

    Ok(())
}
