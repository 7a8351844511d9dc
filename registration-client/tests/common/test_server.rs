// tests/common/test_server.rs

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// テスト用バックエンドの受信内容
#[derive(Clone, Default)]
pub struct ServerState {
    pub records: Arc<Mutex<Vec<Value>>>,
    pub received: Arc<Mutex<Vec<Value>>>,
}

async fn list_records(State(state): State<ServerState>) -> Json<Value> {
    Json(Value::Array(state.records.lock().unwrap().clone()))
}

async fn submit_record(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.received.lock().unwrap().push(body.clone());
    let mut created = body;
    created["id"] = json!(state.received.lock().unwrap().len());
    (StatusCode::CREATED, Json(created))
}

async fn bind(app: Router) -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(addr).await.unwrap();
    let actual_addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });

    format!("http://{}", actual_addr)
}

/// 登録APIを模したサーバーを起動し、ベースURLを返す
pub async fn spawn_backend(records: Vec<Value>) -> (String, ServerState) {
    let state = ServerState {
        records: Arc::new(Mutex::new(records)),
        ..ServerState::default()
    };

    let app = Router::new()
        .route("/api/user/submit-form", get(list_records).post(submit_record))
        .with_state(state.clone());

    (bind(app).await, state)
}

/// 常に 500 を返すサーバーを起動する
pub async fn spawn_failing_backend() -> String {
    let app = Router::new().route(
        "/api/user/submit-form",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") })
            .post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    bind(app).await
}
