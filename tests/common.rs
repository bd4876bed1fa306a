#![allow(dead_code)]

use httpmock::MockServer;
use simfin_rs::{SfClient, TableCache};
use std::{fs, path::Path};
use url::Url;

pub const KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

fn base(server: &MockServer) -> Url {
    Url::parse(&format!("{}/api/v2/", server.base_url())).unwrap()
}

/// A keyed client pointed at the mock server, without a cache.
pub fn client(server: &MockServer) -> SfClient {
    SfClient::builder()
        .base_url(base(server))
        .api_key(KEY)
        .build()
        .unwrap()
}

/// Same as [`client`], with a fresh cache attached.
pub fn cached_client(server: &MockServer) -> SfClient {
    SfClient::builder()
        .base_url(base(server))
        .api_key(KEY)
        .cache(TableCache::new())
        .build()
        .unwrap()
}
