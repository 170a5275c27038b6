//! One-shot HTTP registry stand-in for remote-mode tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one canned HTTP response on a random local port.
///
/// Runs on the tokio runtime of the caller. Tests that block the current
/// thread while the request is made (e.g. running the binary with
/// `assert_cmd`) need a multi-threaded runtime.
pub struct MockRegistry {
    url: String,
    handle: JoinHandle<Option<String>>,
}

impl MockRegistry {
    /// Start serving `body` with the given HTTP status.
    pub async fn serve_once(status: u16, body: impl Into<String>) -> std::io::Result<Self> {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}", listener.local_addr()?);

        let handle = tokio::spawn(serve(listener, status, body));

        Ok(Self {
            url,
            handle,
        })
    }

    /// Base URL of the stand-in, e.g. `http://127.0.0.1:43121`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for the request to be served and return its path.
    pub async fn requested_path(self) -> Option<String> {
        self.handle.await.ok().flatten()
    }
}

async fn serve(listener: TcpListener, status: u16, body: String) -> Option<String> {
    let (mut socket, _) = listener.accept().await.ok()?;

    let mut request: Vec<u8> = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") && request.len() < 16 * 1024 {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(response.as_bytes()).await.ok()?;
    let _ = socket.shutdown().await;

    // "GET /path HTTP/1.1" -> "/path"
    let request = String::from_utf8_lossy(&request).into_owned();
    request.lines().next().and_then(|line| line.split_whitespace().nth(1)).map(str::to_string)
}

/// A base URL nothing listens on, for transport-failure tests.
///
/// Binds an ephemeral port and releases it immediately, so connecting is
/// refused.
pub async fn unreachable_registry_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
