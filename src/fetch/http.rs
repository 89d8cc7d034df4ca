// src/fetch/http.rs
// =============================================================================
// This module downloads pages and images from the wiki.
//
// Key functionality:
// - One shared reqwest Client (connection pooling across all requests)
// - Plain GET, returning the raw body bytes together with the status code
// - Page GET, decoding the body with the charset from Content-Type
// - Turns transport failures and non-2xx answers into a typed FetchError
//
// No retries and no timeouts: a request either comes back or its error
// goes straight to the caller.
//
// Rust concepts:
// - async/await: reqwest is an async client
// - thiserror: Typed error enums with readable messages
// - #[source]: Keeps the underlying reqwest error in the error chain
// =============================================================================

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("creature-scraper/", env!("CARGO_PKG_VERSION"));

// Everything that can go wrong while fetching a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be built
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level failure (DNS, connection refused, TLS, broken body...)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a 2xx status
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

// A completed HTTP exchange: what we asked for, what status came back,
// and the raw body.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub url: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

// Ok for 2xx, FetchError::Status for anything else.
fn ensure_success(url: &str, status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

fn request_error(url: &str) -> impl Fn(reqwest::Error) -> FetchError + '_ {
    move |source| FetchError::Request {
        url: url.to_string(),
        source,
    }
}

// Thin wrapper around a reqwest Client.
//
// Cloning is cheap (the Client is reference counted internally), so the
// same fetcher can be handed around freely.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    // GET a URL and hand back status + bytes, whatever the status is.
    //
    // Only transport failures are errors here; callers decide what a
    // non-2xx status means for them.
    pub async fn fetch(&self, url: &str) -> Result<Fetched, FetchError> {
        let response = self.client.get(url).send().await.map_err(request_error(url))?;
        let status = response.status();
        let body = response.bytes().await.map_err(request_error(url))?.to_vec();

        debug!(%url, status = status.as_u16(), bytes = body.len(), "fetched");

        Ok(Fetched {
            url: url.to_string(),
            status,
            body,
        })
    }

    // GET a page that must exist: non-2xx statuses become FetchError::Status.
    //
    // The body is decoded by reqwest using the Content-Type charset
    // (UTF-8 when none is given), so Latin-1 pages come out intact.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(request_error(url))?;
        let status = response.status();
        ensure_success(url, status)?;

        let text = response.text().await.map_err(request_error(url))?;

        debug!(%url, status = status.as_u16(), bytes = text.len(), "fetched page");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    // Serves a single response on a fresh localhost port and returns its URL.
    fn serve_once(status: u16, content_type: &'static str, body: &'static [u8]) -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let url = format!("http://{}/page", server.server_addr());

        thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes())
                        .unwrap();
                let response = tiny_http::Response::from_data(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        url
    }

    #[test]
    fn test_ensure_success_keeps_2xx() {
        assert!(ensure_success("https://example.com/page", StatusCode::OK).is_ok());
        assert!(ensure_success("https://example.com/page", StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn test_ensure_success_rejects_404() {
        let err = ensure_success("https://example.com/page", StatusCode::NOT_FOUND).unwrap_err();
        match err {
            FetchError::Status { url, status } => {
                assert_eq!(url, "https://example.com/page");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "https://example.com/x".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "https://example.com/x answered with HTTP 500");
    }

    #[tokio::test]
    async fn test_fetch_page_decodes_declared_charset() {
        let url = serve_once(
            200,
            "text/html; charset=ISO-8859-1",
            b"<td>Pok\xE9mon</td>",
        );
        let fetcher = HttpFetcher::new().unwrap();

        let text = fetcher.fetch_page(&url).await.unwrap();

        assert_eq!(text, "<td>Pok\u{e9}mon</td>");
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_non_2xx() {
        let url = serve_once(503, "text/plain", b"busy");
        let fetcher = HttpFetcher::new().unwrap();

        let err = fetcher.fetch_page(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_keeps_raw_bytes_and_status() {
        let url = serve_once(404, "image/png", &[0x89, b'P', b'N', b'G']);
        let fetcher = HttpFetcher::new().unwrap();

        let fetched = fetcher.fetch(&url).await.unwrap();

        assert!(!fetched.is_success());
        assert_eq!(fetched.body, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        // Grab a free port, then close it again so nothing is listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let fetcher = HttpFetcher::new().unwrap();

        let err = fetcher
            .fetch(&format!("http://127.0.0.1:{port}/"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Request { .. }));
    }
}
