//! REST API for the macro builder frontend
//!
//! ## Endpoints
//!
//! - `GET  /api/health` - liveness probe
//! - `GET  /api/commands` - command catalog grouped by category
//! - `GET  /api/pick-position` - one blocking pointer-click capture
//! - `POST /api/generate` - compile macros into script text
//! - `POST /api/run-macro` - persist a script and launch the interpreter

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use crate::catalog::CommandCatalog;
use crate::compiler::assemble_script;
use crate::error::{ForgeError, PickError};
use crate::picker::{PointerSample, PositionPicker};
use crate::runner::{self, RunOutcome};
use crate::script::MacroDef;

/// Shared application state. The catalog is global; only the picker (an
/// optional host-specific collaborator) travels here.
#[derive(Clone, Default)]
pub struct AppState {
    pub picker: Option<Arc<dyn PositionPicker>>,
}

impl AppState {
    pub fn with_picker(picker: Arc<dyn PositionPicker>) -> Self {
        Self { picker: Some(picker) }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl std::fmt::Display) -> ApiError {
    (status, Json(json!({ "error": message.to_string() })))
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/commands", get(get_commands))
        .route("/api/pick-position", get(pick_position))
        .route("/api/generate", post(generate_script))
        .route("/api/run-macro", post(run_macro))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub macros: Vec<MacroDef>,
    /// Sent by the frontend; not consumed by the compiler.
    #[serde(default)]
    pub global_vars: Value,
}

#[derive(Debug, Deserialize)]
pub struct RunMacroRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub macros: Option<Vec<MacroDef>>,
}

#[derive(Debug, Serialize)]
pub struct RunMacroResponse {
    pub success: bool,
    pub exe: Option<String>,
    pub file: String,
    pub pid: Option<u32>,
    pub error: Option<String>,
}

impl From<RunOutcome> for RunMacroResponse {
    fn from(outcome: RunOutcome) -> Self {
        Self {
            success: outcome.started(),
            exe: outcome.interpreter.map(|p| p.to_string_lossy().into_owned()),
            file: outcome.script_path.to_string_lossy().into_owned(),
            pid: outcome.pid,
            error: outcome.error,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/commands - the catalog grouped by category name.
async fn get_commands() -> Result<Json<Value>, ApiError> {
    let mut grouped = BTreeMap::new();
    for category in CommandCatalog::global().categories() {
        grouped.insert(category.name.clone(), &category.commands);
    }
    let body = serde_json::to_value(grouped)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;
    Ok(Json(body))
}

/// GET /api/pick-position - block until the collaborator reports a click.
async fn pick_position(State(state): State<AppState>) -> Result<Json<PointerSample>, ApiError> {
    let Some(picker) = state.picker.clone() else {
        return Err(api_error(StatusCode::SERVICE_UNAVAILABLE, PickError::Unavailable));
    };

    let sample = tokio::task::spawn_blocking(move || picker.wait_for_click())
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    Ok(Json(sample))
}

/// POST /api/generate - compile the macro list into script text.
async fn generate_script(Json(req): Json<GenerateRequest>) -> Result<Json<Value>, ApiError> {
    if req.macros.is_empty() {
        let err = ForgeError::MalformedRequest("no macros provided".to_string());
        return Err(api_error(StatusCode::BAD_REQUEST, err));
    }
    if !req.global_vars.is_null() {
        debug!("ignoring global_vars payload");
    }

    let code = assemble_script(&req.macros);
    Ok(Json(json!({ "code": code })))
}

/// POST /api/run-macro - accepts finished code or macros to compile first.
async fn run_macro(Json(req): Json<RunMacroRequest>) -> Result<Json<RunMacroResponse>, ApiError> {
    let code = match (req.code, req.macros) {
        (Some(code), _) if !code.is_empty() => code,
        (_, Some(macros)) if !macros.is_empty() => assemble_script(&macros),
        _ => {
            let err = ForgeError::MalformedRequest("no code or macros provided".to_string());
            return Err(api_error(StatusCode::BAD_REQUEST, err));
        }
    };

    let outcome = tokio::task::spawn_blocking(move || runner::run_script(&code))
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    Ok(Json(RunMacroResponse::from(outcome)))
}
