use crate::application::ports::NumberSource;
use crate::domain::{Category, FetchError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Upstream payload: `{"numbers": [int, ...]}`
#[derive(Debug, Deserialize)]
struct NumbersPayload {
    numbers: Vec<i64>,
}

/// HTTP client for the number generator services
///
/// One GET per fetch, no retries. Idle connections are not pooled, so no
/// socket outlives the fetch that opened it. The client-level timeout only
/// bounds the socket; the caller's deadline is the one that counts.
#[derive(Clone)]
pub struct HttpNumberSource {
    client: Client,
    endpoints: BTreeMap<Category, String>,
    access_token: Option<String>,
}

impl HttpNumberSource {
    pub fn new(
        endpoints: BTreeMap<Category, String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(HttpNumberSource {
            client,
            endpoints,
            access_token,
        })
    }

    pub fn endpoint(&self, category: Category) -> Option<&str> {
        self.endpoints.get(&category).map(String::as_str)
    }
}

#[async_trait]
impl NumberSource for HttpNumberSource {
    async fn fetch(&self, category: Category) -> Result<Vec<i64>, FetchError> {
        let url = self
            .endpoint(category)
            .ok_or(FetchError::Unbound { category })?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let payload: NumbersPayload =
            serde_json::from_str(&text).map_err(|e| FetchError::Malformed(e.to_string()))?;
        Ok(payload.numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::UpstreamFetcher;
    use crate::domain::FetchOutcome;
    use axum::{Router, http::HeaderMap, http::StatusCode, routing::get};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port, returning its base URL
    async fn spawn_stub(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source_for(base: &str, path: &str, token: Option<&str>) -> HttpNumberSource {
        let endpoints = BTreeMap::from([(Category::Prime, format!("{}{}", base, path))]);
        HttpNumberSource::new(
            endpoints,
            token.map(str::to_string),
            Duration::from_millis(500),
        )
        .unwrap()
    }

    async fn stub_server() -> String {
        let router = Router::new()
            .route(
                "/primes",
                get(|| async { r#"{"numbers": [2, 3, 5, 3, 7]}"# }),
            )
            .route(
                "/strings",
                get(|| async { r#"{"numbers": ["2", "3"]}"# }),
            )
            .route("/object", get(|| async { r#"{"values": [1]}"# }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    r#"{"numbers": [1]}"#
                }),
            )
            .route(
                "/down",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
            )
            .route(
                "/private",
                get(|headers: HeaderMap| async move {
                    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                        Some("Bearer secret") => (StatusCode::OK, r#"{"numbers": [11]}"#),
                        _ => (StatusCode::UNAUTHORIZED, r#"{"message": "unauthorized"}"#),
                    }
                }),
            );
        spawn_stub(router).await
    }

    #[tokio::test]
    async fn test_fetch_returns_payload_verbatim() {
        let base = stub_server().await;
        let source = source_for(&base, "/primes", None);

        let numbers = source.fetch(Category::Prime).await.unwrap();
        assert_eq!(numbers, vec![2, 3, 5, 3, 7]);
    }

    #[tokio::test]
    async fn test_non_integer_payload_is_malformed() {
        let base = stub_server().await;

        for path in ["/strings", "/object"] {
            let source = source_for(&base, path, None);
            assert!(matches!(
                source.fetch(Category::Prime).await,
                Err(FetchError::Malformed(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_error_status() {
        let base = stub_server().await;
        let source = source_for(&base, "/down", None);

        assert_eq!(
            source.fetch(Category::Prime).await,
            Err(FetchError::Status { status: 503 })
        );
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let base = stub_server().await;

        let anonymous = source_for(&base, "/private", None);
        assert_eq!(
            anonymous.fetch(Category::Prime).await,
            Err(FetchError::Status { status: 401 })
        );

        let authorized = source_for(&base, "/private", Some("secret"));
        assert_eq!(authorized.fetch(Category::Prime).await.unwrap(), vec![11]);
    }

    #[tokio::test]
    async fn test_unbound_category() {
        let base = stub_server().await;
        let source = source_for(&base, "/primes", None);

        assert_eq!(
            source.fetch(Category::Even).await,
            Err(FetchError::Unbound {
                category: Category::Even
            })
        );
    }

    #[tokio::test]
    async fn test_slow_upstream_hits_fetch_deadline() {
        let base = stub_server().await;
        let source = Arc::new(source_for(&base, "/slow", None));
        let fetcher = UpstreamFetcher::new(source, Duration::from_millis(100));
        let started = std::time::Instant::now();

        let outcome = fetcher.fetch(Category::Prime).await;

        assert_eq!(outcome, FetchOutcome::TimedOut);
        assert!(started.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_connection_closed_after_fetch() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Answers a single keep-alive request, then reports whether the
        // client hung up on its own.
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "client closed before sending a request");
                request.extend_from_slice(&buf[..n]);
            }

            let body = r#"{"numbers":[1,2]}"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();

            tokio::time::timeout(Duration::from_secs(2), socket.read(&mut buf)).await
        });

        let source = source_for(&format!("http://{}", addr), "/primes", None);
        assert_eq!(source.fetch(Category::Prime).await.unwrap(), vec![1, 2]);

        let read = server.await.unwrap();
        assert!(
            matches!(read, Ok(Ok(0)) | Ok(Err(_))),
            "connection still open after fetch returned: {:?}",
            read
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = source_for(&format!("http://{}", addr), "/primes", None);
        assert!(matches!(
            source.fetch(Category::Prime).await,
            Err(FetchError::Network(_))
        ));
    }
}
