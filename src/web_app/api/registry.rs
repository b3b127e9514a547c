// web_app/api/registry.rs - Process-wide API client
//
// Server functions have no direct handle on application state, so the
// server binary registers its client here once at startup.

use std::sync::Mutex;
use std::sync::OnceLock;

use super::client::DummyJsonClient;

static CLIENT: OnceLock<DummyJsonClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<DummyJsonClient>> = Mutex::new(None);

/// Initialize the global API client
pub fn init_client(client: DummyJsonClient) {
    tracing::info!("Initializing global API client for {}", client.base_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("API client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: DummyJsonClient) {
    let mut guard = TEST_CLIENT_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
    *guard = Some(client);
}

/// Get the global API client
pub fn get_client() -> Option<DummyJsonClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global API client is empty!");
    }
    client
}
