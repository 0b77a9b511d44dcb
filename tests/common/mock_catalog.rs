//! Mock catalog HTTP server for testing the HTTP client.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"message": "{}"}}"#, message),
        }
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Serves canned responses keyed by request path; unknown paths get 404.
pub struct MockCatalog {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCatalog {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn respond(&self, path: &str, response: MockResponse) {
        self.state
            .routes
            .lock()
            .await
            .insert(path.to_string(), response);
    }

    pub async fn requested_paths(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    state.requests.lock().await.push(path.clone());

    let response = state
        .routes
        .lock()
        .await
        .get(&path)
        .cloned()
        .unwrap_or_else(|| MockResponse::error(404, &format!("Path '{}' not found", path)));

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}
