//! Test documentation site backed by a mock HTTP server

use mockito::{Mock, Server, ServerGuard};

/// A fake multi-version documentation site.
///
/// Serves a version manifest at `/versions.json` and whatever doc pages
/// the test registers; everything else 404s.
pub struct DocsSite {
    server: ServerGuard,
}

impl DocsSite {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    /// Base URL of the site, without a trailing slash
    pub fn url(&self) -> String {
        self.server.url()
    }

    pub fn manifest_url(&self) -> String {
        format!("{}/versions.json", self.server.url())
    }

    pub async fn with_manifest(&mut self, body: &str) -> Mock {
        self.server
            .mock("GET", "/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    pub async fn with_manifest_error(&mut self, status: usize) -> Mock {
        self.server
            .mock("GET", "/versions.json")
            .with_status(status)
            .create_async()
            .await
    }

    /// Registers an existing doc page at the given path
    pub async fn with_page(&mut self, path: &str) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await
    }

    /// Registers a missing doc page at the given path
    pub async fn with_missing_page(&mut self, path: &str) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(404)
            .create_async()
            .await
    }
}
