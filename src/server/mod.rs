//! HTTP server rendering pages on request

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{ContentQuery, ContentStore};
use crate::pages::{Pages, INTERNAL_ERROR_HTML};
use crate::RapidNews;

/// Shared, read-only server state
pub struct AppState {
    store: ContentStore,
    pages: Pages,
    static_dir: PathBuf,
}

impl AppState {
    pub fn new(app: &RapidNews) -> Result<Self> {
        Ok(Self {
            store: app.store(),
            pages: Pages::new(app.config.clone())?,
            static_dir: app.static_dir.clone(),
        })
    }

    fn respond(&self, query: &ContentQuery, page: Result<Option<String>>) -> Response {
        match page {
            Ok(Some(html)) => Html(html).into_response(),
            Ok(None) => self.not_found(query),
            Err(e) => {
                tracing::error!("Failed to render page: {:#}", e);
                internal_error()
            }
        }
    }

    fn not_found(&self, query: &ContentQuery) -> Response {
        match self.pages.not_found(query) {
            Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render 404 page: {:#}", e);
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>, config: &SiteConfig) -> Router {
    let news_route = format!("/{}/:slug", config.news_dir.trim_matches('/'));
    let tag_route = format!("/{}/:tag", config.tag_dir.trim_matches('/'));

    Router::new()
        .route("/", get(home_handler))
        .route(&news_route, get(article_handler))
        .route(&tag_route, get(tag_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(app: &RapidNews, ip: &str, port: u16) -> Result<()> {
    if !app.content_dir.is_dir() {
        tracing::warn!(
            "Content directory {:?} does not exist; listing pages will fail",
            app.content_dir
        );
    }

    let state = Arc::new(AppState::new(app)?);
    let router = router(state, &app.config);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let listener = tokio::net::TcpListener::bind((bind_ip, port)).await?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");
    tracing::info!("Serving content from {:?}", app.content_dir);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Render a page on the blocking pool, since every query reads the disk
async fn render_blocking<F>(state: Arc<AppState>, render: F) -> Response
where
    F: FnOnce(&Pages, &ContentQuery) -> Result<Option<String>> + Send + 'static,
{
    let rendered = tokio::task::spawn_blocking(move || {
        let query = ContentQuery::new(&state.store);
        let page = render(&state.pages, &query);
        state.respond(&query, page)
    })
    .await;

    rendered.unwrap_or_else(|e| {
        tracing::error!("Render task failed: {}", e);
        internal_error()
    })
}

async fn home_handler(State(state): State<Arc<AppState>>) -> Response {
    render_blocking(state, |pages, query| pages.home(query).map(Some)).await
}

async fn article_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    render_blocking(state, move |pages, query| pages.article(query, &slug)).await
}

async fn tag_handler(State(state): State<Arc<AppState>>, Path(tag): Path<String>) -> Response {
    render_blocking(state, move |pages, query| pages.tag(query, &tag)).await
}

/// Serve static assets, answering with the site's 404 page when none match
async fn fallback_handler(State(state): State<Arc<AppState>>, request: Request<Body>) -> Response {
    let mut service = ServeDir::new(&state.static_dir);
    match service.try_call(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        Ok(_) => render_blocking(state, |_, _| Ok(None)).await,
        Err(_) => internal_error(),
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(INTERNAL_ERROR_HTML),
    )
        .into_response()
}
