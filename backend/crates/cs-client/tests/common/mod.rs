#![allow(dead_code)]

//! Real registry server on an ephemeral port, and devices that talk to it

use cs_client::{HttpNameRegistry, IdentityCore, MemoryDeviceStore};
use cs_config::{AdminConfig, RetryConfig, ValidationConfig};
use cs_server::{ADMIN_TOKEN_HEADER, AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const ADMIN_TOKEN: &str = "e2e-admin-token-0123456789";

pub struct TestRegistry {
    /// `http://127.0.0.1:<port>`
    pub root_url: String,
    server: JoinHandle<()>,
}

impl TestRegistry {
    pub fn api_url(&self) -> String {
        format!("{}/api", self.root_url)
    }

    /// A new device with its own in-memory store.
    pub fn device(&self) -> IdentityCore {
        IdentityCore::new(
            Arc::new(MemoryDeviceStore::new()),
            Arc::new(self.http_registry()),
            RetryConfig {
                max_attempts: 3,
                base_delay_ms: 10,
            },
        )
    }

    pub fn http_registry(&self) -> HttpNameRegistry {
        HttpNameRegistry::new(&self.api_url(), Duration::from_secs(5), Duration::from_secs(5))
    }

    pub async fn admin_release(&self, identity: &str) -> reqwest::StatusCode {
        reqwest::Client::new()
            .post(format!("{}/admin/user/{}/release", self.api_url(), identity))
            .header(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)
            .send()
            .await
            .expect("release request failed")
            .status()
    }
}

impl Drop for TestRegistry {
    fn drop(&mut self) {
        self.server.abort();
    }
}

pub async fn spawn_registry() -> TestRegistry {
    let pool = cs_db::open_memory_pool()
        .await
        .expect("Failed to create test database");

    let state = AppState {
        pool,
        validation: ValidationConfig::default(),
        admin: AdminConfig {
            token: Some(String::from(ADMIN_TOKEN)),
        },
    };

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("No local address");

    let server = tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("registry server failed");
    });

    TestRegistry {
        root_url: format!("http://{}", addr),
        server,
    }
}
