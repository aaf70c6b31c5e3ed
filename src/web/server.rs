use axum::http::header;
use axum::{
    extract::{DefaultBodyLimit, Form, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::SongCatalog;
use crate::cli::{ServeArgs, EMPTY_QUERY_MARKER};
use crate::core::types::Direction;
use crate::matching::engine::{MatchResult, MatchingEngine};

/// Longest accepted query, in bytes
pub const MAX_QUERY_LENGTH: usize = 1024;

/// Request body limit; search forms are tiny
pub const MAX_BODY_SIZE: usize = 16 * 1024;

/// Shared application state
pub struct AppState {
    pub catalog: SongCatalog,
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Search results as returned to the page
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The trimmed query, or `(empty)` when nothing was entered
    pub query: String,
    /// `long` or `short`
    pub choice: String,
    pub results: Vec<MatchResult>,
}

/// Fields of the search form
#[derive(Deserialize)]
struct SearchForm {
    #[serde(default)]
    user_input: String,
    #[serde(default)]
    choice: String,
}

/// Query-string form of a search
#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    direction: String,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded, the tokio runtime cannot
/// be created, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// IP rate limiting needs the peer address and is added by the server at
/// startup, not here.
pub fn create_router(catalog: SongCatalog) -> Router {
    let state = Arc::new(AppState { catalog });

    Router::new()
        .route("/", get(index_handler))
        .route("/search", post(search_form_handler))
        .route("/api/search", get(search_api_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/static/js/main.js", get(main_js_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(10),
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(100))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = SongCatalog::load_from_file(&args.dataset)?;
    if catalog.is_empty() {
        tracing::warn!("Dataset {} has no songs", args.dataset.display());
    }

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?;

    let app = create_router(catalog).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting taytay web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

async fn main_js_handler() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        include_str!("static/js/main.js"),
    )
}

/// Search submitted from the page's form
async fn search_form_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Response {
    run_search(&state, &form.user_input, Direction::from_choice(&form.choice))
}

/// Search via query string: `/api/search?q=...&direction=long|short`
async fn search_api_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    run_search(&state, &params.q, Direction::from_choice(&params.direction))
}

fn run_search(state: &AppState, raw_query: &str, direction: Direction) -> Response {
    if raw_query.len() > MAX_QUERY_LENGTH {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(create_safe_error_response(
                "query_too_long",
                "Query exceeds maximum length",
                None,
            )),
        )
            .into_response();
    }

    let query = raw_query.trim();

    // Blank input short-circuits before the engine
    if query.is_empty() {
        return Json(SearchResponse {
            query: EMPTY_QUERY_MARKER.to_string(),
            choice: direction.as_choice().to_string(),
            results: Vec::new(),
        })
        .into_response();
    }

    let start_time = std::time::Instant::now();
    let results = MatchingEngine::new(&state.catalog).search(query, direction);
    tracing::info!(
        "Search '{}' ({}) returned {} results in {:?}",
        query,
        direction,
        results.len(),
        start_time.elapsed()
    );

    Json(SearchResponse {
        query: query.to_string(),
        choice: direction.as_choice().to_string(),
        results,
    })
    .into_response()
}

/// Return all songs in the catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.catalog.len(),
        "records": state.catalog.records(),
    }))
}
