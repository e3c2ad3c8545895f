//! Declarative field schemas and the checks they run.

use chrono::DateTime;
use serde_json::Value;
use validator::ValidateEmail;

use crate::errors::ValidationError;

/// Primitive JSON type a field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
}

/// A constraint on a string field, carrying its failure message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// At least `n` Unicode scalar values
    MinLength(usize, &'static str),
    /// At most `n` Unicode scalar values
    MaxLength(usize, &'static str),
    /// At most `n` bytes of UTF-8
    MaxBytes(usize, &'static str),
    Email(&'static str),
    /// `YYYY-MM-DDTHH:MM:SS[.fff]Z`
    DateTime(&'static str),
    /// Hyphenated UUID
    Uuid(&'static str),
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        match self {
            Check::MinLength(n, _) => value.chars().count() >= *n,
            Check::MaxLength(n, _) => value.chars().count() <= *n,
            Check::MaxBytes(n, _) => value.len() <= *n,
            Check::Email(_) => value.validate_email(),
            Check::DateTime(_) => is_utc_datetime(value),
            Check::Uuid(_) => value.len() == 36 && uuid::Uuid::try_parse(value).is_ok(),
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Check::MinLength(_, msg)
            | Check::MaxLength(_, msg)
            | Check::MaxBytes(_, msg)
            | Check::Email(msg)
            | Check::DateTime(msg)
            | Check::Uuid(msg) => msg,
        }
    }
}

fn is_utc_datetime(value: &str) -> bool {
    value.as_bytes().get(10) == Some(&b'T')
        && value.ends_with('Z')
        && DateTime::parse_from_rfc3339(value).is_ok()
}

/// One declared field of a schema
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub checks: &'static [Check],
}

impl Field {
    /// A required string field with checks run in order
    pub const fn string(name: &'static str, checks: &'static [Check]) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            required: true,
            checks,
        }
    }

    /// A required boolean field
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Boolean,
            required: true,
            checks: &[],
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    /// Type check first, then each constraint; the first failure wins
    pub(crate) fn check(&self, value: &Value) -> Result<(), ValidationError> {
        match self.kind {
            FieldKind::Boolean => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        self.name,
                        format!("{} must be a boolean", self.name),
                    ))
                }
            }
            FieldKind::String => {
                let s = value.as_str().ok_or_else(|| {
                    ValidationError::new(self.name, format!("{} must be a string", self.name))
                })?;

                match self.checks.iter().find(|check| !check.passes(s)) {
                    Some(failed) => Err(ValidationError::new(self.name, failed.message())),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Named description of an operation's input shape
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    name: &'static str,
    fields: &'static [Field],
    all_optional: bool,
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self {
            name,
            fields,
            all_optional: false,
        }
    }

    /// Same fields and checks, every field optional
    pub const fn partial(self, name: &'static str) -> Self {
        Self {
            name,
            fields: self.fields,
            all_optional: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub(crate) fn requires(&self, field: &Field) -> bool {
        field.required && !self.all_optional
    }
}
