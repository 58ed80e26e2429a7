//! Mock TMDB server lifecycle management
//!
//! Each test gets an isolated server on a random port, serving the popular,
//! details and credits routes from `fixtures.rs`. The importer's HTTP client is
//! blocking, so the server runs on its own thread with its own tokio runtime
//! and tests stay plain `#[test]` functions.

use super::constants::*;
use super::fixtures::{movie_credits, movie_details, popular_page};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type RequestLog = Arc<Mutex<Vec<String>>>;

/// Mock TMDB server
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL of the movie API (e.g., "http://127.0.0.1:12345/3/movie")
    pub api_base_url: String,

    requests: RequestLog,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new mock server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the runtime cannot be built, the port cannot be bound or the
    /// server thread does not report its address within the timeout.
    pub fn spawn() -> Self {
        let requests: RequestLog = Arc::new(Mutex::new(Vec::new()));
        let app = make_app(requests.clone());

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let (port_tx, port_rx) = mpsc::channel::<u16>();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build tokio runtime");

            runtime.block_on(async move {
                // Bind to random port
                let listener = TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind to random port");
                let port = listener
                    .local_addr()
                    .expect("Failed to get local address")
                    .port();
                port_tx.send(port).expect("Test thread went away");

                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        shutdown_rx.await.ok();
                    })
                    .await
                    .expect("Server failed");
            });
        });

        // The listener is bound before the port is sent, so the server accepts
        // connections from here on.
        let port = port_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("Mock server did not start");

        Self {
            api_base_url: format!("http://127.0.0.1:{}{}", port, MOVIE_API_PATH),
            requests,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Paths requested so far, in order, without query strings.
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn make_app(requests: RequestLog) -> Router {
    Router::new()
        .route(&format!("{}/popular", MOVIE_API_PATH), get(popular))
        .route(&format!("{}/{{id}}", MOVIE_API_PATH), get(details))
        .route(&format!("{}/{{id}}/credits", MOVIE_API_PATH), get(credits))
        .with_state(requests)
}

fn check_api_key(params: &HashMap<String, String>) -> Result<(), Response> {
    match params.get("api_key") {
        Some(key) if key == TEST_API_KEY => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key."
            })),
        )
            .into_response()),
    }
}

async fn popular(
    State(requests): State<RequestLog>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    requests
        .lock()
        .unwrap()
        .push(format!("{}/popular", MOVIE_API_PATH));
    if let Err(response) = check_api_key(&params) {
        return response;
    }

    let page = params
        .get("page")
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(1);
    match page {
        FAILING_PAGE => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        GARBAGE_PAGE => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(popular_page(page)).into_response(),
    }
}

async fn details(
    State(requests): State<RequestLog>,
    Path(id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    requests
        .lock()
        .unwrap()
        .push(format!("{}/{}", MOVIE_API_PATH, id));
    if let Err(response) = check_api_key(&params) {
        return response;
    }

    if id == MOVIE_2_ID {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    match movie_details(id) {
        Some(body) => Json(body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn credits(
    State(requests): State<RequestLog>,
    Path(id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    requests
        .lock()
        .unwrap()
        .push(format!("{}/{}/credits", MOVIE_API_PATH, id));
    if let Err(response) = check_api_key(&params) {
        return response;
    }

    match movie_credits(id) {
        Some(body) => Json(body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
