//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use soil_health_relay::config::RelayConfig;
use soil_health_relay::{HttpServer, RelayClient, Shutdown};

pub const HEALTHY_VERDICT: &str =
    r#"{"soilHealthPrediction":"Healthy","recommendations":{"irrigation":"reduce"}}"#;

pub const SAMPLE: &str = r#"{"saturation":0.5,"organicCarbon":1.2,"soilPh":6.8,"nitrogenLevel":10,"phosphorusLevel":5,"potassiumLevel":8,"salinity":0.1,"oxygenLevel":7}"#;

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Handle to a running mock prediction service.
#[derive(Clone)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    calls: Arc<AtomicU32>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    pub fn url(&self) -> String {
        format!("http://{}/predict", self.addr)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct MockState {
    upstream: MockUpstream,
    status: StatusCode,
    body: &'static str,
}

async fn mock_predict(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    state.upstream.calls.fetch_add(1, Ordering::SeqCst);
    state.upstream.requests.lock().unwrap().push(RecordedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

/// Start a mock prediction service that always answers with `status` and `body`.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let upstream = MockUpstream {
        addr: listener.local_addr().unwrap(),
        calls: Arc::new(AtomicU32::new(0)),
        requests: Arc::new(Mutex::new(Vec::new())),
    };

    let state = MockState {
        upstream: upstream.clone(),
        status: StatusCode::from_u16(status).unwrap(),
        body,
    };
    let app = Router::new()
        .route("/predict", post(mock_predict))
        .with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    upstream
}

/// An address nothing is listening on.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Relay client that ignores any proxy settings in the environment.
pub fn relay_client(upstream_url: &str) -> RelayClient {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    RelayClient::with_client(client, upstream_url.parse().unwrap())
}

/// Build a relay server pointed at `upstream_url`.
pub fn relay_server(upstream_url: &str) -> HttpServer {
    let mut config = RelayConfig::default();
    config.upstream.url = upstream_url.to_string();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    HttpServer::new(config, relay_client(upstream_url))
}

/// Serve a relay on an ephemeral port. Returns its address and the shutdown handle.
pub async fn spawn_relay(
    upstream_url: &str,
) -> (SocketAddr, Shutdown, tokio::task::JoinHandle<std::io::Result<()>>) {
    let server = relay_server(upstream_url);
    let listener = TcpListener::bind(&server.config().listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, shutdown_rx).await });

    (addr, shutdown, handle)
}
