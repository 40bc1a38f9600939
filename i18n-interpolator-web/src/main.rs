use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use i18n_interpolator::{Interpolator, load_catalog_from_dir};

const DEFAULT_MESSAGES_DIR: &str = "messages";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Serialize, Deserialize)]
pub struct InterpolateRequest {
    pub document: Value,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct InterpolateResponse {
    pub result: Value,
    pub language: String,
}

#[derive(Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub interpolator: Interpolator,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let messages_dir = PathBuf::from(
        env::var("I18N_MESSAGES_DIR").unwrap_or_else(|_| DEFAULT_MESSAGES_DIR.to_string()),
    );
    let bind_addr = env::var("I18N_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let catalog = load_catalog_from_dir(&messages_dir)
        .map_err(|e| format!("Failed to load messages: {}", e))?;
    info!(
        "Loaded languages from {}: {}",
        messages_dir.display(),
        catalog.languages().join(", ")
    );

    let state = AppState {
        interpolator: Interpolator::new(catalog),
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/interpolate", post(interpolate_document))
        .route("/api/languages", get(list_languages))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn interpolate_document(
    State(state): State<AppState>,
    Json(request): Json<InterpolateRequest>,
) -> Result<Json<InterpolateResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Each request gets its own engine so the language never leaks between requests
    let interpolator = match &request.language {
        Some(language) => state.interpolator.for_language(language),
        None => state.interpolator.clone(),
    };

    let result = interpolator.interpolate(&request.document).map_err(|e| {
        warn!("Interpolation failed: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Failed to interpolate document: {}", e),
            }),
        )
    })?;

    Ok(Json(InterpolateResponse {
        result,
        language: interpolator.language().to_string(),
    }))
}

async fn list_languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: state
            .interpolator
            .catalog()
            .languages()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
