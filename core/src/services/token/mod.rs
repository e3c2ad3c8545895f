//! Token service module for JWT management
//!
//! Tokens are HS256 JWTs carrying the user id, email and role. There is no
//! refresh flow and no revocation list: a token stays valid until it expires.

mod claims;
mod service;


pub use claims::{Claims, InvalidTokenReason};
pub use service::TokenService;
