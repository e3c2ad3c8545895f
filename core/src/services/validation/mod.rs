//! Request validation against named schemas.
//!
//! Fields are checked in declaration order and checks within a field in
//! declaration order. Only the first failure is reported. The normalized
//! output holds exactly the declared fields that were present in the input.

mod schema;
pub mod schemas;


use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::ValidationError;

pub use schema::{Check, Field, FieldKind, Schema};
pub use schemas::{
    CreateActivityRequest, CreateNotificationRequest, LoginRequest, RegisterRequest,
    UpdateActivityRequest, UpdatePaymentStatusRequest,
};

pub const BODY_FIELD: &str = "body";
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// A payload type bound to the schema that admits it
pub trait Validated: DeserializeOwned {
    const SCHEMA: &'static Schema;
}

/// Check `input` against `schema` and return the normalized object
pub fn validate(schema: &Schema, input: &Value) -> Result<Map<String, Value>, ValidationError> {
    let object = input
        .as_object()
        .ok_or_else(|| ValidationError::new(BODY_FIELD, BODY_NOT_OBJECT))?;

    let mut output = Map::new();
    for field in schema.fields() {
        match object.get(field.name) {
            Some(value) => {
                field.check(value)?;
                output.insert(field.name.to_string(), value.clone());
            }
            None if schema.requires(field) => {
                return Err(ValidationError::new(
                    field.name,
                    format!("{} is required", field.name),
                ));
            }
            None => {}
        }
    }

    Ok(output)
}

/// Validate and deserialize into the payload type bound to the schema
pub fn validate_as<T: Validated>(input: &Value) -> Result<T, ValidationError> {
    let normalized = validate(T::SCHEMA, input)?;
    serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        tracing::warn!(schema = T::SCHEMA.name(), error = %e, "Validated payload failed to deserialize");
        ValidationError::new(BODY_FIELD, "Invalid request body")
    })
}
