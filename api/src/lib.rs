//! HTTP layer of the HuettenApp backend.
//!
//! Routes, request/response DTOs, the authentication and authorization
//! middleware and the mapping from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
