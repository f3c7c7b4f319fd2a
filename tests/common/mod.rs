//! In-process HTTP test double
//!
//! A small axum app on an ephemeral port that records every request and
//! answers with a scripted status and body.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tokio::sync::oneshot;

/// How long a test waits for the server to start or for a request to arrive
const WAIT: Duration = Duration::from_secs(10);

/// What the client sent
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lowercased; repeated headers keep every value
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

struct Reply {
    status: StatusCode,
    body: String,
    requests: Mutex<mpsc::Sender<RecordedRequest>>,
}

pub struct TestServer {
    pub url: String,
    requests: mpsc::Receiver<RecordedRequest>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Serve requests on 127.0.0.1, replying with `status` and `body`
    pub fn start(status: u16, body: &str) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let reply = Arc::new(Reply {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
            requests: Mutex::new(request_tx),
        });

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("test server runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind test server");
                addr_tx
                    .send(listener.local_addr().expect("local addr"))
                    .expect("report address");

                let app = Router::new()
                    .fallback(record)
                    .layer(DefaultBodyLimit::disable())
                    .with_state(reply);

                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("serve test app");
            });
        });

        let addr = addr_rx.recv_timeout(WAIT).expect("test server did not start");

        Self {
            url: format!("http://{}/upload", addr),
            requests: request_rx,
            shutdown: Some(shutdown_tx),
        }
    }

    /// The first request served, failing the test if none arrives in time
    pub fn recorded(self) -> RecordedRequest {
        self.requests
            .recv_timeout(WAIT)
            .expect("no request reached the test server")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn record(
    State(reply): State<Arc<Reply>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let mut recorded_headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers.iter() {
        recorded_headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }

    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: recorded_headers,
        body: body.to_vec(),
    };
    if let Ok(sender) = reply.requests.lock() {
        let _ = sender.send(request);
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, "text/plain")],
        reply.body.clone(),
    )
}

/// An address nothing is listening on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/upload", addr)
}

/// Bytes shaped like a small binary glTF container
pub fn sample_glb() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"glTF");
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&64u32.to_le_bytes());
    bytes.extend((0u8..=255).cycle().take(52));
    bytes
}
