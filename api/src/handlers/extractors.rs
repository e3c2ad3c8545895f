//! Request body extraction through the named validation schemas.

use std::ops::Deref;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;

use ha_core::errors::ValidationError;
use ha_core::services::validation::{validate_as, Validated, BODY_FIELD};

use super::error::ApiError;

/// JSON body that passed its schema and was deserialized into `T`
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Validated + 'static> FromRequest for ValidatedJson<T> {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let value = body.await?.into_inner();
            validate_as::<T>(&value)
                .map(ValidatedJson)
                .map_err(|e| ApiError::from(e).into())
        })
    }
}

/// JSON extractor settings: 10 MB limit, parse failures as validation errors
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected malformed JSON body");
            ApiError::from(ValidationError::new(BODY_FIELD, "Invalid JSON body")).into()
        })
}
