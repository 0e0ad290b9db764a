use axum::{Json, response::Html};
use serde_json::{Value, json};

/// Static liveness page
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "superheroes",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
