// Infrastructure layer - External dependencies and adapters
pub mod chunked_html;
pub mod config;
pub mod file_store;
pub mod http_response;
pub mod memory_store;
pub mod placeholder_api;
