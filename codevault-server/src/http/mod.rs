//! HTTP layer
//!
//! Axum server with:
//! - A single method-dispatched `/api/files` endpoint
//! - Permissive CORS and OPTIONS short-circuit
//! - JSON error responses from one translation point (`ApiError`)

pub mod error;
pub mod routes;
pub mod server;

pub use error::{ApiError, ALLOWED_METHODS};
pub use server::{build_router, run_server, AppState, ServerError};
