//! Named schemas for every operation that accepts a body, and the typed
//! payloads they produce.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::activity::ActivityChanges;
use crate::services::password::MAX_SECRET_BYTES;

use super::schema::{Check, Field, Schema};
use super::Validated;

const INVALID_EMAIL: &str = "Invalid email address";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
const TITLE_REQUIRED: &str = "Title is required";
const TITLE_TOO_LONG: &str = "Title must be at most 100 characters";
const INVALID_USER_ID: &str = "Invalid user ID";

/// Capacity of a MySQL `TEXT` column
const TEXT_COLUMN_BYTES: usize = 65_535;

pub const LOGIN: Schema = Schema::new(
    "login",
    &[
        Field::string("email", &[Check::Email(INVALID_EMAIL)]),
        Field::string("password", &[Check::MinLength(6, PASSWORD_TOO_SHORT)]),
    ],
);

pub const REGISTER: Schema = Schema::new(
    "register",
    &[
        Field::string(
            "name",
            &[
                Check::MinLength(2, "Name must be at least 2 characters"),
                Check::MaxLength(100, "Name must be at most 100 characters"),
            ],
        ),
        Field::string("email", &[Check::Email(INVALID_EMAIL)]),
        Field::string(
            "password",
            &[
                Check::MinLength(6, PASSWORD_TOO_SHORT),
                Check::MaxBytes(MAX_SECRET_BYTES, "Password must be at most 72 bytes"),
            ],
        ),
    ],
);

pub const CREATE_ACTIVITY: Schema = Schema::new(
    "create-activity",
    &[
        Field::string(
            "title",
            &[
                Check::MinLength(1, TITLE_REQUIRED),
                Check::MaxLength(100, TITLE_TOO_LONG),
            ],
        ),
        Field::string(
            "description",
            &[Check::MaxBytes(TEXT_COLUMN_BYTES, "Description is too long")],
        )
        .optional(),
        Field::string("startTime", &[Check::DateTime("Invalid start time")]),
        Field::string("endTime", &[Check::DateTime("Invalid end time")]).optional(),
        Field::string(
            "location",
            &[Check::MaxLength(255, "Location must be at most 255 characters")],
        )
        .optional(),
    ],
);

pub const UPDATE_ACTIVITY: Schema = CREATE_ACTIVITY.partial("update-activity");

pub const CREATE_NOTIFICATION: Schema = Schema::new(
    "create-notification",
    &[
        Field::string("userId", &[Check::Uuid(INVALID_USER_ID)]).optional(),
        Field::string(
            "title",
            &[
                Check::MinLength(1, TITLE_REQUIRED),
                Check::MaxLength(100, TITLE_TOO_LONG),
            ],
        ),
        Field::string(
            "body",
            &[
                Check::MinLength(1, "Message is required"),
                Check::MaxBytes(TEXT_COLUMN_BYTES, "Message is too long"),
            ],
        ),
    ],
);

pub const UPDATE_PAYMENT_STATUS: Schema = Schema::new(
    "update-payment-status",
    &[
        Field::string("userId", &[Check::Uuid(INVALID_USER_ID)]),
        Field::boolean("hasPaid"),
    ],
);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validated for LoginRequest {
    const SCHEMA: &'static Schema = &LOGIN;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Validated for RegisterRequest {
    const SCHEMA: &'static Schema = &REGISTER;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl Validated for CreateActivityRequest {
    const SCHEMA: &'static Schema = &CREATE_ACTIVITY;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl Validated for UpdateActivityRequest {
    const SCHEMA: &'static Schema = &UPDATE_ACTIVITY;
}

impl From<UpdateActivityRequest> for ActivityChanges {
    fn from(req: UpdateActivityRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            start_time: req.start_time,
            end_time: req.end_time,
            location: req.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// Single recipient; broadcast to all participants when absent
    pub user_id: Option<Uuid>,
    pub title: String,
    pub body: String,
}

impl Validated for CreateNotificationRequest {
    const SCHEMA: &'static Schema = &CREATE_NOTIFICATION;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
    pub user_id: Uuid,
    pub has_paid: bool,
}

impl Validated for UpdatePaymentStatusRequest {
    const SCHEMA: &'static Schema = &UPDATE_PAYMENT_STATUS;
}
