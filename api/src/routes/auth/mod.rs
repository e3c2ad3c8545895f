//! Authentication route handlers
//!
//! This module contains the account endpoints:
//! - Registration of new participants
//! - Login with email and password
//! - Lookup of the signed-in user

pub mod login;
pub mod me;
pub mod register;

use actix_web::{web, Scope};

use crate::middleware::JwtAuth;

pub fn routes(jwt: &JwtAuth) -> Scope {
    web::scope("/auth")
        .route("/register", web::post().to(register::register))
        .route("/login", web::post().to(login::login))
        .route("/me", web::get().to(me::me).wrap(jwt.clone()))
}
