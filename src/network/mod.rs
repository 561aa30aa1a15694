// Re-export network modules
pub mod api_client;
pub mod config;

pub use api_client::{FetchTransport, HttpRequest, Transport};
pub use config::ApiConfig;
