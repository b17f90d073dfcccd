//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion provider (OpenAI-compatible chat completions over HTTPS)
//! - Storage (DuckDB for products, suppliers and mediated queries)
//! - Caching (in-memory product cache)
//! - API (composition root, CLI router, HTTP server)

pub mod adapter;
pub mod api;

pub use adapter::*;
