//! Transport seam between the API client and the network.
//!
//! DESIGN
//! ======
//! `ApiClient` only ever builds an `HttpRequest` and interprets an
//! `HttpResponse`. Moving the bytes is delegated to a `Transport`, so the
//! whole request/refresh cycle runs in plain `cargo test` against an
//! in-memory backend while the browser build talks to the real API through
//! `gloo-net`.

#![allow(clippy::unused_async)]

use super::error::ApiError;

/// HTTP verbs used by the warehouse API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Only POST and PUT attach a JSON body.
    #[must_use]
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

/// Fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: Method,
    pub body: Option<String>,
}

/// Raw response: status code plus body text (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Rejections (no response at all) are `ApiError::Network`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .header("Content-Type", "application/json");

            let pending = match request.body {
                Some(body) if request.method.carries_body() => builder
                    .body(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                _ => builder.send().await,
            };
            let resp = pending.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = if status == 204 {
                String::new()
            } else {
                resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?
            };
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
