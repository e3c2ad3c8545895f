pub mod auth;
pub mod authorize;
pub mod cors;

pub use auth::{AuthContext, JwtAuth};
pub use authorize::{RequireAdmin, RequireOwnershipOrAdmin};
pub use cors::create_cors;
