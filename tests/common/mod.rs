//! Common test utilities and helpers
//!
//! Every test gets its own temporary data directory, so blob uploads and
//! page fixtures never leak between tests.

#![allow(dead_code)]

use std::path::PathBuf;

use axum_test::TestServer;
use fakecloud::backend::server::create_app;
use fakecloud::shared::{ServerConfig, ServerConfigBuilder};
use tempfile::TempDir;

/// Running test server plus the directory backing it
pub struct TestApp {
    pub server: TestServer,
    pub config: ServerConfig,
    dir: TempDir,
}

impl TestApp {
    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// Spawn an app with default settings
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|builder| builder).await
}

/// Spawn an app, letting the caller adjust the configuration
///
/// The server uses a real HTTP transport so WebSocket tests work too.
pub async fn spawn_app_with(
    configure: impl FnOnce(ServerConfigBuilder) -> ServerConfigBuilder,
) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let builder = ServerConfig::builder()
        .host("local.appspot.com")
        .storage_url("http://localhost:3000")
        .data_dir(dir.path());
    let config = configure(builder).build().expect("Invalid test config");

    let app = create_app(config.clone())
        .await
        .expect("Failed to create app");
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to start test server");

    TestApp {
        server,
        config,
        dir,
    }
}
