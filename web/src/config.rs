use std::env;

/// Runtime configuration, read from the environment (a .env file is
/// loaded in main before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the front-end listens on.
    pub bind_addr: String,
    /// Base URL of the RAG backend all actions are forwarded to.
    pub backend_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Self {
            bind_addr,
            backend_url,
        }
    }
}
