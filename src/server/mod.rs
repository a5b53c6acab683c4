// SPDX-License-Identifier: MIT

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::toolkit::error::Error;
use crate::toolkit::registry::ToolRegistry;

/// Routes exposing `registry` to an invoking layer
pub fn router(registry: ToolRegistry) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/{name}", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(registry)
}

pub async fn serve(registry: ToolRegistry, port: u16) -> Result<(), Error> {
    let app = router(registry);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_tools(State(registry): State<ToolRegistry>) -> Json<Value> {
    Json(Value::Array(registry.definitions().await))
}

async fn call_tool(
    State(registry): State<ToolRegistry>,
    Path(name): Path<String>,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let request_id = Uuid::new_v4();
    log::info!("[{}] calling tool {}", request_id, name);

    // An empty body means "no arguments"
    let input = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("[{}] invalid JSON body: {}", request_id, e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("request body is not valid JSON: {}", e) })),
                );
            }
        }
    };

    match registry.call(&name, input).await {
        Ok(result) => {
            if result.is_error() {
                log::warn!("[{}] tool {} returned an error", request_id, name);
            }
            (StatusCode::OK, Json(result.into_value()))
        }
        Err(e @ Error::ToolNotFound { .. }) => {
            log::warn!("[{}] {}", request_id, e);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": e.to_string() })),
            )
        }
        Err(e) => {
            log::error!("[{}] {}", request_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
