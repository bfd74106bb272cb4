//! HTTP server for the interactive surface.
//!
//! Three routes:
//!
//! | Method | Path              | Description                       |
//! |--------|-------------------|-----------------------------------|
//! | GET    | `/`               | Index page with the search form   |
//! | GET    | `/search`         | Search results (`q`, `type`)      |
//! | GET    | `/country/{code}` | Country detail by 2/3-letter code |
//!
//! Handlers bridge to the blocking API client via `spawn_blocking`; any
//! failure, upstream or local, renders as an empty result with a
//! diagnostic rather than an error response.

use crate::api::Client;
use crate::pages;
use crate::query::{self, SearchMode, SearchOutcome};
use anyhow::Result;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use log::warn;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/country/{code}", get(country_detail))
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(client: Client, port: u16) -> Result<()> {
    let app = router(AppState { client });
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("world-explorer web UI on http://localhost:{port}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: Option<String>,
    /// Search mode; unrecognized values fall back to name search.
    #[serde(default, rename = "type")]
    mode: Option<String>,
}

async fn index() -> Html<String> {
    Html(pages::index_page())
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let term = params.q.unwrap_or_default();
    let mode = SearchMode::from_param(params.mode.as_deref().unwrap_or("name"));

    let client = state.client.clone();
    let task_term = term.clone();
    let outcome = match tokio::task::spawn_blocking(move || query::search(&client, mode, &task_term)).await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("search task failed: {e}");
            SearchOutcome::degraded(mode, format!("search task failed: {e}"))
        }
    };

    Html(pages::results_page(&term, mode, &outcome))
}

async fn country_detail(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Html<String> {
    let client = state.client.clone();
    let task_code = code.clone();
    let country = match tokio::task::spawn_blocking(move || client.by_code(&task_code)).await {
        Ok(Ok(list)) => list.into_iter().next(),
        Ok(Err(e)) => {
            warn!("country detail for {code:?} degraded: {e}");
            None
        }
        Err(e) => {
            warn!("country detail task failed: {e}");
            None
        }
    };

    Html(pages::country_page(&code, country.as_ref()))
}
