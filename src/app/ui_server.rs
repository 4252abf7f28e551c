use crate::app::metrics;
use crate::app::page::render_page;
use crate::app::pipeline::{run_pipeline, PageOutcome};
use crate::config::Config;
use crate::data::MarketDataProvider;
use crate::{Error, Result};
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct UiState {
    pub config: Config,
    pub provider: Arc<dyn MarketDataProvider>,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    data_source: String,
    timestamp: i64,
}

#[derive(Deserialize)]
pub struct TickerForm {
    #[serde(default)]
    ticker: String,
}

pub async fn run(config: Config, provider: Arc<dyn MarketDataProvider>) -> Result<()> {
    let addr = config.server.addr.clone();
    let app = router(UiState { config, provider });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| Error::new(format!("bind failed: {err}")))?;
    info!(%addr, "stockview listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| Error::new(format!("server error: {err}")))?;
    Ok(())
}

pub fn router(state: UiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/health", get(health))
        .route("/api/metrics", get(metrics_text))
        .with_state(Arc::new(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(render_page(None))
}

async fn submit(
    State(state): State<Arc<UiState>>,
    form: std::result::Result<Form<TickerForm>, FormRejection>,
) -> Html<String> {
    let input = match form {
        Ok(Form(form)) => form.ticker,
        Err(rejection) => {
            warn!(error = %rejection, "ticker form rejected");
            String::new()
        }
    };
    let outcome = handle_submission(state, input).await;
    Html(render_page(Some(&outcome)))
}

/// Runs the blocking chart pipeline off the async workers. Every failure,
/// including a panicked worker, ends up as a `Failed` outcome.
pub async fn handle_submission(state: Arc<UiState>, input: String) -> PageOutcome {
    let outcome = spawn_blocking(move || {
        run_pipeline(&input, state.provider.as_ref(), &state.config)
    })
    .await
    .unwrap_or_else(|err| PageOutcome::Failed {
        ticker: None,
        message: format!("join failed: {err}"),
    });
    metrics::record_outcome(&outcome);
    outcome
}

async fn health(State(state): State<Arc<UiState>>) -> impl IntoResponse {
    let response = Health {
        status: "ok",
        data_source: state.config.data.source.clone(),
        timestamp: metrics::now_epoch(),
    };
    Json(response)
}

async fn metrics_text() -> impl IntoResponse {
    metrics::render_text()
}
