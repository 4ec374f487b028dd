//! Synchronous API client for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, so the
//! client stays deterministic and testable without a server.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), keeping the I/O boundary explicit.
//! - DTOs are defined independently of the server crate; the integration test
//!   against a live server catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Created, Todo, UpdateTodo};
