// Investor Pages - Web Server
// Server-side rendered pages + small JSON API (axum)
//
// Each request builds its own Page from the shared registry, so no mutable
// state is shared between requests.

use crate::chart::ChartView;
use crate::contact::{ContactForm, Field};
use crate::content::{SiteContent, SiteRegistry};
use crate::navigation::Section;
use crate::page::{Page, SubmitOutcome};
use crate::render::{render_page, HtmlViewport, RenderOptions};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    sites: Arc<SiteRegistry>,
    default_site: Arc<str>,
}

impl AppState {
    pub fn new(sites: SiteRegistry, default_site: &str) -> Self {
        Self {
            sites: Arc::new(sites),
            default_site: Arc::from(default_site),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[derive(Serialize)]
struct SiteSummary {
    slug: String,
    brand: String,
    sections: Vec<&'static str>,
}

impl From<&SiteContent> for SiteSummary {
    fn from(site: &SiteContent) -> Self {
        Self {
            slug: site.slug.clone(),
            brand: site.brand.clone(),
            sections: Section::ALL.iter().map(|s| s.id()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    section: Option<String>,
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Redirect to the default site
async fn index(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format!("/{}", state.default_site))
}

/// GET /:site - Render a site, optionally with an active section
async fn show_page(
    State(state): State<AppState>,
    Path(site): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let Some(content) = state.sites.get(&site) else {
        return page_not_found(&site);
    };

    let mut page = Page::new(content.clone());
    let mut viewport = HtmlViewport::new();
    if let Some(section) = query.section.as_deref() {
        page.activate(section, &mut viewport);
    }

    let body = match render_page(&page, &viewport, &RenderOptions::at(&format!("/{}", site))) {
        Ok(body) => body,
        Err(error) => return render_failed(&site, error),
    };
    let etag = etag_for(&body);

    let cached = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| etag_matches(v, &etag));
    if cached {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    ([(header::ETAG, etag)], Html(body)).into_response()
}

/// POST /:site/contact - Acknowledge a contact form (nothing is delivered)
async fn submit_contact(
    State(state): State<AppState>,
    Path(site): Path<String>,
    Form(submission): Form<ContactForm>,
) -> Response {
    let Some(content) = state.sites.get(&site) else {
        return page_not_found(&site);
    };

    let mut page = Page::new(content.clone());
    let mut viewport = HtmlViewport::new();
    for field in Field::ALL {
        page.update_field(field, submission.get(field));
    }
    page.activate(Section::Contact.id(), &mut viewport);

    let mut options = RenderOptions::at(&format!("/{}", site));
    let status = match page.try_submit() {
        SubmitOutcome::Acknowledged(ack) => {
            info!(site = %site, at = %ack.acknowledged_at, "contact acknowledged");
            StatusCode::OK
        }
        SubmitOutcome::Incomplete(missing) => {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            warn!(site = %site, missing = ?names, "contact form rejected: required fields empty");
            options.missing = missing;
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    match render_page(&page, &viewport, &options) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(error) => render_failed(&site, error),
    }
}

fn page_not_found(site: &str) -> Response {
    warn!(site = %site, "unknown site requested");
    (StatusCode::NOT_FOUND, format!("Unknown site: {}", site)).into_response()
}

fn render_failed(site: &str, error: askama::Error) -> Response {
    error!(site = %site, %error, "page template failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
}

/// Strong ETag: SHA-256 of the rendered body.
pub fn etag_for(body: &str) -> String {
    format!("\"{:x}\"", Sha256::digest(body.as_bytes()))
}

/// `If-None-Match` comparison: a comma-separated list where `*` matches any
/// tag and `W/` prefixes are ignored (weak comparison).
pub fn etag_matches(header: &str, etag: &str) -> bool {
    let etag = etag.trim_start_matches("W/");
    header
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/sites - List registered sites
async fn list_sites(State(state): State<AppState>) -> impl IntoResponse {
    let sites: Vec<SiteSummary> = state.sites.all().map(SiteSummary::from).collect();
    Json(ApiResponse::ok(sites))
}

/// GET /api/sites/:site - Full content of one site
async fn get_site(State(state): State<AppState>, Path(site): Path<String>) -> Response {
    match state.sites.get(&site) {
        Some(content) => Json(ApiResponse::ok(content.clone())).into_response(),
        None => api_not_found(&site),
    }
}

/// GET /api/sites/:site/charts - Chart views of one site
async fn get_charts(State(state): State<AppState>, Path(site): Path<String>) -> Response {
    match state.sites.get(&site) {
        Some(content) => {
            let views: Vec<ChartView> = content
                .charts
                .slots()
                .into_iter()
                .map(|(kind, spec)| ChartView::from_spec(kind, spec))
                .collect();
            Json(ApiResponse::ok(views)).into_response()
        }
        None => api_not_found(&site),
    }
}

fn api_not_found(site: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(format!("unknown site: {}", site))),
    )
        .into_response()
}

// ============================================================================
// Router / Server
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/sites", get(list_sites))
        .route("/sites/:site", get(get_site))
        .route("/sites/:site/charts", get(get_charts));

    Router::new()
        .route("/", get(index))
        .route("/:site", get(show_page))
        .route("/:site/contact", post(submit_contact))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `address` and serve until Ctrl+C.
pub async fn serve(state: AppState, address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind to {}", address))?;

    info!(address = %address, "server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
