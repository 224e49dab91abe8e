// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod error_log;
pub mod http;

pub use error_log::{FileErrorLog, MemoryErrorLog};
pub use http::HttpFetcher;
