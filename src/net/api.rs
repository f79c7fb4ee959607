//! Catalog document fetch.
//!
//! Client-side (hydrate): a real HTTP GET via `gloo-net`.
//! Server-side (SSR) and native tests: [`FetchError::Unavailable`], since the
//! document is only served to browsers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into [`FetchError`]. The resolver absorbs it
//! into a failed resolution; nothing here panics or surfaces to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::types::ProvinceCatalog;

/// Failure to obtain a usable catalog document.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("catalog request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("catalog request returned status {0}")]
    Status(u16),
    /// The body was not a province catalog.
    #[error("catalog body could not be parsed: {0}")]
    Parse(String),
    /// No HTTP client in this build (SSR or native).
    #[error("catalog fetch not available outside the browser")]
    Unavailable,
}

/// Anything that can produce the full province catalog.
///
/// The future is `!Send`: fetches run on the browser's single event loop.
pub trait CatalogSource {
    fn fetch_catalog(&self) -> LocalBoxFuture<'_, Result<ProvinceCatalog, FetchError>>;
}

/// Reads the catalog from a static JSON document on the serving origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCatalogSource {
    path: String,
}

impl HttpCatalogSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_catalog(&self) -> LocalBoxFuture<'_, Result<ProvinceCatalog, FetchError>> {
        fetch_catalog(&self.path).boxed_local()
    }
}

/// Shareable handle to a [`CatalogSource`], suitable for Leptos context.
#[derive(Clone)]
pub struct CatalogHandle(Arc<dyn CatalogSource + Send + Sync>);

impl CatalogHandle {
    pub fn new(source: impl CatalogSource + Send + Sync + 'static) -> Self {
        Self(Arc::new(source))
    }

    pub fn http(path: impl Into<String>) -> Self {
        Self::new(HttpCatalogSource::new(path))
    }
}

impl CatalogSource for CatalogHandle {
    fn fetch_catalog(&self) -> LocalBoxFuture<'_, Result<ProvinceCatalog, FetchError>> {
        self.0.fetch_catalog()
    }
}

impl std::fmt::Debug for CatalogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogHandle").finish_non_exhaustive()
    }
}

/// Parse a catalog document body.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body is not a JSON object. Individual
/// entries are not decoded here; a malformed province only affects itself.
pub fn parse_catalog(body: &str) -> Result<ProvinceCatalog, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// GET the catalog document at `path`.
///
/// # Errors
///
/// Returns a [`FetchError`] describing the transport, status, or parse failure.
pub async fn fetch_catalog(path: &str) -> Result<ProvinceCatalog, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = resp.status();
        if !is_success_status(status) {
            return Err(FetchError::Status(status));
        }
        let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_catalog(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        _ = path;
        Err(FetchError::Unavailable)
    }
}
