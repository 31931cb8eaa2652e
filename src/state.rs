use crate::source::StoreConfig;
use reqwest::Client;

/// Shared per-process state. The client is a read-only handle reused across
/// requests; each request issues its own independent page scans.
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub store: Option<StoreConfig>,
}

impl AppState {
    pub fn new(store: Option<StoreConfig>) -> Self {
        Self {
            client: Client::new(),
            store,
        }
    }
}
