//! Shared helpers for integration tests: a minimal HTTP stub standing in for
//! the pixel events endpoint.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Spawn a stub events endpoint that answers every request with the given
/// status line and body. Returns the endpoint URL.
pub async fn spawn_stub_endpoint(status: &'static str, body: &str) -> String {
    spawn_stub_endpoint_with_delay(status, body, Duration::ZERO).await
}

/// Like [`spawn_stub_endpoint`], but waits before answering, to simulate a
/// slow backend.
pub async fn spawn_stub_endpoint_with_delay(
    status: &'static str,
    body: &str,
    delay: Duration,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                // Drain the request head; the stub answers regardless of it.
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                let response = format!(
                    "HTTP/1.1 {status}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/api/events")
}
