use crate::config::AppConfig;
use crate::error::{BrowserError, Result};
use crate::github::GitHubClient;
use crate::health::health_routes;
use crate::oauth::authorize_url;
use crate::render::{index_page, login_page};
use crate::types::{IndexView, RepositorySummary};
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub github: Arc<GitHubClient>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let github = GitHubClient::new(&config)?;
        Ok(AppState {
            config: Arc::new(config),
            github: Arc::new(github),
            start_time: Instant::now(),
        })
    }
}

/// Query parameters GitHub appends when redirecting back
#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub code: String,
}

/// Create the browser-facing router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(login))
        .route("/index", get(index))
        .merge(health_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Bind `addr` and serve until ctrl-c
pub async fn start_server(state: AppState, addr: &str) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            // A failed signal handler leaves the server running until killed.
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

async fn login(State(state): State<AppState>) -> Html<String> {
    let credentials = &state.config.credentials;
    let url = authorize_url(
        &state.config.oauth_base_url,
        &credentials.client_id,
        &credentials.redirect_uri,
        &credentials.scopes,
    );
    Html(login_page(&url))
}

async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>> {
    let view = load_index_view(&state.github, &params.code).await?;
    Ok(Html(index_page(&view)))
}

/// Exchange `code`, then fetch the profile and repositories. Stops at the first failure.
pub async fn load_index_view(github: &GitHubClient, code: &str) -> Result<IndexView> {
    let token = github.exchange_code_for_token(code).await?;
    let profile = github.fetch_user_profile(&token).await?;
    let raw_repos = github.fetch_repositories_for_listing(&token).await?;

    let repos = raw_repos
        .iter()
        .map(RepositorySummary::from_raw)
        .collect::<Result<Vec<_>>>()?;

    let username = profile
        .login()
        .ok_or_else(|| BrowserError::MissingFieldError("user field 'login'".to_string()))?
        .to_string();
    let avatar_url = profile
        .avatar_url()
        .ok_or_else(|| BrowserError::MissingFieldError("user field 'avatar_url'".to_string()))?
        .to_string();

    info!("Listing {} repositories for {}", repos.len(), username);

    Ok(IndexView {
        username,
        avatar_url,
        repos,
    })
}
