// usage-dashboard library: payload, filtering, summaries and the HTTP/WS surface (shared by main and tests)

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod models;
pub mod provider;
pub mod routes;
pub mod summary;
pub mod version;
pub mod worker;
