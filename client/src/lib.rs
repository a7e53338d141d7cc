pub mod client;
pub mod error;
pub mod models;

pub use client::RagClient;
pub use error::ClientError;
pub use models::*;
