//! Authentication service module
//!
//! - Participant self-registration
//! - Email and password login
//! - Resolving the current user from verified claims

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, AuthSession};
