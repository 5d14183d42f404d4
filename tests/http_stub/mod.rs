//! Minimal HTTP/1.1 responder standing in for the public holiday API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Canned answer for one request path.
#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    status: u16,
    body: String,
}

impl Route {
    /// Answers `path` with `status` and `body`.
    pub fn new(path: &str, status: u16, body: &str) -> Self {
        Self {
            path: path.to_owned(),
            status,
            body: body.to_owned(),
        }
    }
}

/// Running stub server; unmatched paths answer `404`.
pub struct HttpStub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl HttpStub {
    /// Binds an ephemeral local port and serves `routes` until the runtime
    /// shuts down.
    ///
    /// # Panics
    ///
    /// Panics when no local port can be bound.
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind(("127.0.0.1", 0))
            .await
            .expect("bind local listener");
        let addr = listener.local_addr().expect("listener address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                serve(stream, &routes, &log).await;
            }
        });
        Self { addr, requests }
    }

    /// API root to configure clients with.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v3", self.addr)
    }

    /// Request paths received so far, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics when the request log lock is poisoned.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log lock").clone()
    }
}

/// A local address with nothing listening on it.
///
/// # Panics
///
/// Panics when no local port can be bound.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/api/v3")
}

async fn serve(mut stream: TcpStream, routes: &[Route], log: &Mutex<Vec<String>>) {
    let mut request = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(read) => request.extend_from_slice(chunk.get(..read).unwrap_or_default()),
        }
    }
    let head = String::from_utf8_lossy(&request);
    let path = head
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_owned();
    let (status, body) = routes
        .iter()
        .find(|route| route.path == path)
        .map_or((404, ""), |route| (route.status, route.body.as_str()));
    let response = format!(
        "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    log.lock().expect("request log lock").push(path);
    stream
        .write_all(response.as_bytes())
        .await
        .expect("write stub response");
}
