//! # ALP Proxy
//!
//! Pass-through HTTP proxy in front of the adaptive inference backend.
//!
//! The proxy owns no inference logic. It validates incoming prompt
//! submissions, attaches the configured `X-API-Key`, forwards them to the
//! backend's `/generate` and `/stats` endpoints, and relays the JSON
//! responses. Backend failures surface as structured `ErrorResponse`
//! bodies; the proxy never retries on the client's behalf.
//!
//! ## Endpoints
//!
//! - **POST** `/generate` - forward a `{prompt, model}` submission
//! - **GET** `/stats` - relay backend serving statistics
//! - **GET** `/health` - local health probe

pub mod backend;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod types;

pub use backend::BackendClient;
pub use server::ProxyServer;
pub use types::*;
