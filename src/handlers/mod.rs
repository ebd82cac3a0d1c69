/// HTTP request handlers
use crate::domain::{Health, TypeFilter};
use crate::errors::{ApiError, ApiResult};
use crate::services::{ExplorerService, ObjectView};
use crate::view::LoadState;
use axum::{
    extract::{Path, Query, State},
    http::Uri,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub explorer: Arc<ExplorerService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Dashboard listing, statistics and chart series
pub async fn dashboard(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let type_filter = params
        .get("type")
        .map_or("all", String::as_str)
        .parse::<TypeFilter>()
        .map_err(ApiError::InvalidInput)?;
    let search = params.get("search").cloned().unwrap_or_default();

    let body = match state.explorer.dashboard(&search, type_filter).await? {
        Some(dashboard) => serde_json::json!(SuccessResponse::new(serde_json::json!({
            "status": "ready",
            "search": search,
            "type": type_filter_name(type_filter),
            "dashboard": dashboard,
        }))),
        None => serde_json::json!(SuccessResponse::new(serde_json::json!({
            "status": "loading",
            "message": "Loading celestial data...",
        }))),
    };
    Ok(Json(body))
}

/// Re-fetch the catalog now
pub async fn refresh_catalog(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let applied = state.explorer.refresh_catalog().await?;
    Ok(Json(serde_json::json!(SuccessResponse::new(
        serde_json::json!({ "applied": applied })
    ))))
}

/// Detail page data for one body
pub async fn object_detail(
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<ObjectView>>> {
    let samples = params
        .get("samples")
        .map(|raw| {
            raw.trim().parse::<usize>().map_err(|_| {
                ApiError::InvalidInput(format!(
                    "samples must be a non-negative integer, got '{raw}'"
                ))
            })
        })
        .transpose()?;
    let view = state.explorer.object_detail(&name, samples).await?;
    Ok(Json(SuccessResponse::new(view)))
}

/// Whatever object the detail view focused last
pub async fn focused_object(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let (focus, load) = state.explorer.focused().await;
    match load {
        LoadState::Failed(cause) => Err(ApiError::FetchFailure(cause)),
        LoadState::NotFound(what) => Err(ApiError::NotFound(what)),
        load => Ok(Json(serde_json::json!(SuccessResponse::new(
            serde_json::json!({ "focus": focus, "state": load })
        )))),
    }
}

/// Static project description
pub async fn about() -> Json<Value> {
    Json(serde_json::json!(SuccessResponse::new(serde_json::json!({
        "name": "Space Explorer",
        "overview": "Interactive dashboard data for the planets and dwarf planets of our solar system.",
        "dataSource": {
            "name": "Solar System OpenData API",
            "url": "https://api.le-systeme-solaire.net/",
        },
        "features": [
            "Listing with search and type filtering",
            "Detail view for each celestial object",
            "Chart series for diameters, type distribution, moons and orbit samples",
        ],
    }))))
}

/// Catch-all for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Page '{}'", uri.path()))
}

fn type_filter_name(filter: TypeFilter) -> &'static str {
    match filter {
        TypeFilter::All => "all",
        TypeFilter::Only(body_type) => body_type.as_str(),
    }
}
