//! Read-only HTTP catalog of computers.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use catalog::{Computer, Dataset, Field};
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
