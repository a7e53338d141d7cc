use rag_client::RagClient;
use reqwest::Client;

/// Shared handler state. The forms are independent; this is only a pair
/// of cheap clonable HTTP handles plus the backend address.
#[derive(Clone)]
pub struct AppState {
    /// Typed client for the three form actions.
    pub rag: RagClient,
    /// Plain client for the passthrough proxy.
    pub http: Client,
    /// Normalized backend base URL (no trailing slash).
    pub backend_url: String,
}

impl AppState {
    pub fn new(backend_url: &str) -> Self {
        let rag = RagClient::new(backend_url);
        let backend_url = rag.base_url().to_string();

        Self {
            rag,
            http: Client::new(),
            backend_url,
        }
    }
}
