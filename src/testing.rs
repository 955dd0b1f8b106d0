//! In-process stand-in for the marketplace backend.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use serde_json::Value;
use tokio::sync::oneshot;

use crate::api::ApiClient;
use crate::session::Session;
use crate::state::http::HttpClient;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string.
    pub path: String,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (u16, Value) + Send + Sync>;

#[derive(Default)]
struct Inner {
    routes: HashMap<(String, String), Responder>,
    requests: Vec<RecordedRequest>,
}

pub struct MockBackend {
    addr: SocketAddr,
    inner: Arc<Mutex<Inner>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(Inner::default()));

        let shared = inner.clone();
        let service = make_service_fn(move |_| {
            let inner = shared.clone();

            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    request_handler(req, inner.clone())
                }))
            }
        });

        let server = Server::bind(&([127, 0, 0, 1], 0).into()).serve(service);
        let addr = server.local_addr();

        let (shutdown, receiver) = oneshot::channel::<()>();

        tokio::spawn(server.with_graceful_shutdown(async {
            receiver.await.ok();
        }));

        Self {
            addr,
            inner,
            shutdown: Some(shutdown),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answers `method path` (without query) with `status` and `body`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_with(method, path, move |_| (status, body.clone()));
    }

    /// Like [`MockBackend::respond`], but the answer depends on the request.
    pub fn respond_with<F>(&self, method: &str, path: &str, responder: F)
    where
        F: Fn(&RecordedRequest) -> (u16, Value) + Send + Sync + 'static,
    {
        self.inner
            .lock()
            .unwrap()
            .routes
            .insert((method.to_string(), path.to_string()), Arc::new(responder));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    pub fn client(&self, session: Session) -> ApiClient {
        ApiClient::new(HttpClient::new(Some(self.url())).unwrap(), session)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

async fn request_handler(
    req: Request<Body>,
    inner: Arc<Mutex<Inner>>,
) -> Result<Response<Body>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = hyper::body::to_bytes(body).await.unwrap_or_default();

    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();

    let (status, body) = {
        let mut inner = inner.lock().unwrap();

        let recorded = RecordedRequest {
            method: method.clone(),
            path: parts
                .uri
                .path_and_query()
                .map_or_else(|| path.clone(), ToString::to_string),
            authorization: parts
                .headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(ToString::to_string),
            body: body.to_vec(),
        };

        let answer = match inner.routes.get(&(method, path)) {
            Some(responder) => responder(&recorded),
            None => (404, serde_json::json!({ "detail": "Not Found" })),
        };

        inner.requests.push(recorded);
        answer
    };

    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(body.to_string().into())
        .unwrap())
}

/// Address nothing listens on.
pub fn unused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}
