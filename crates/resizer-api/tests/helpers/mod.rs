//! Test helpers: build the router for integration tests and spawn local
//! upstream servers for it to fetch from.
//!
//! Run from workspace root: `cargo test -p resizer-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use resizer_api::setup;
use resizer_core::Config;

/// Test application: in-process server wrapping the full router.
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup test app with default configuration.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(Config::default())
}

pub fn setup_test_app_with(config: Config) -> TestApp {
    let (_state, app) = setup::initialize_app(config).expect("Failed to initialize app");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");
    TestApp { server }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_remote(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{}", addr)
}

/// Address nothing listens on: bind a port, then release it.
pub async fn unused_local_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}/image.jpg", addr)
}

/// Raw TCP upstream that announces `Content-Length: 1000`, sends 10 body
/// bytes and closes the connection. Returns the URL to fetch.
pub async fn spawn_short_body_remote() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\n\
                          Content-Type: image/jpeg\r\n\
                          Content-Length: 1000\r\n\
                          \r\n\
                          0123456789",
                    )
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{}/image.jpg", addr)
}
