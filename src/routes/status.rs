//! `GET /` — static service descriptor
//! `GET /health` — liveness probe

use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};
use serde::Serialize;

const SERVICE_NAME: &str = "Vertex Experience Contact Form";

pub fn router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/", get(service_status))
        .route("/health", get(health))
}

#[derive(Serialize)]
struct StatusResponse {
    service:   &'static str,
    version:   &'static str,
    status:    &'static str,
    endpoints: BTreeMap<&'static str, &'static str>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        service:   SERVICE_NAME,
        version:   env!("CARGO_PKG_VERSION"),
        status:    "running",
        endpoints: BTreeMap::from([
            ("POST /contact-form-handler", "Submit contact form"),
            ("GET /health", "Health check"),
        ]),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
