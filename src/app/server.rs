use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use log::info;
use serde_json::{Value, json};

use super::{Dashboard, render::render_dashboard};
use crate::{
    api::{HttpTransport, ReqwestTransport},
    config::Settings,
    services::{NewsCache, NewsFetcher, QuoteFetcher},
};

pub fn create_router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/favicon.ico", get(favicon))
        .with_state(dashboard)
}

async fn index(State(dashboard): State<Arc<Dashboard>>) -> Html<String> {
    let view = dashboard.load().await;
    Html(render_dashboard(&view))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn build_dashboard(settings: &Settings, transport: Arc<dyn HttpTransport>) -> Dashboard {
    let cache = Arc::new(NewsCache::new(settings.cache_ttl()));
    let quotes = QuoteFetcher::new(Arc::clone(&transport), settings.quote_config());
    let news = NewsFetcher::new(transport, cache, settings.news_config());

    Dashboard::new(
        Arc::new(quotes),
        Arc::new(news),
        settings.symbol.clone(),
        settings.news_limit,
    )
}

pub async fn serve(settings: Settings) -> Result<()> {
    let transport = ReqwestTransport::new(settings.timeout())
        .context("Failed to build HTTP client")?;
    let dashboard = build_dashboard(&settings, Arc::new(transport));
    let app = create_router(Arc::new(dashboard));

    let listener = tokio::net::TcpListener::bind(settings.bind)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind))?;

    info!("Dashboard for {} listening on {}", settings.symbol, settings.bind);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
