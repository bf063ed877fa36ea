//! In-process stand-in for the prediction backend

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// Request bodies the fake `/predict` endpoint has seen
pub type Captured = Arc<Mutex<Vec<Value>>>;

pub fn canonical_result() -> Value {
    json!({
        "success": true,
        "source": "fea",
        "result": {
            "u": [0, -0.002],
            "elem_forces": [150.0],
            "elem_stresses": [2000000.0],
            "max_disp": -0.002,
            "max_stress": 2000000.0
        }
    })
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on
pub async fn dead_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Behaves like the real service on the happy path. The `Json` extractor
/// also enforces `Content-Type: application/json`.
pub fn healthy_backend(captured: Captured) -> Router {
    Router::new()
        .route("/predict", post(record_and_answer))
        .route("/health", get(|| async { Json(json!({ "ok": true, "model_exists": false })) }))
        .with_state(captured)
}

async fn record_and_answer(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    captured.lock().unwrap().push(body);
    Json(canonical_result())
}

pub fn failing_backend() -> Router {
    Router::new().route(
        "/predict",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "singular stiffness matrix" })),
            )
        }),
    )
}

pub fn html_backend() -> Router {
    Router::new().route("/predict", post(|| async { "<html><body>Bad Gateway</body></html>" }))
}

pub fn scalar_model_backend() -> Router {
    Router::new().route(
        "/predict",
        post(|| async { Json(json!({ "success": true, "source": "ml_model", "prediction": 0.0021 })) }),
    )
}

pub fn slow_backend(delay: Duration) -> Router {
    Router::new().route(
        "/predict",
        post(move || async move {
            tokio::time::sleep(delay).await;
            Json(canonical_result())
        }),
    )
}
