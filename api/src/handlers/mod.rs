pub mod error;
pub mod extractors;

pub use error::{route_not_found, ApiError};
pub use extractors::{json_config, ValidatedJson};
