use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Visitor input from the contact form. Every field is required; nothing
/// beyond presence is checked.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, PartialEq)]
#[serde(default)]
pub struct ContactMeForm {
    #[validate(custom(function = "validate_present"))]
    pub name: String,

    #[validate(custom(function = "validate_present"))]
    pub email: String,

    #[validate(custom(function = "validate_present"))]
    pub subject: String,

    #[validate(custom(function = "validate_present"))]
    pub message: String,
}

/// The record appended to the content store.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactMeMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ContactMeResponse {
    pub message: String,
}

fn validate_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("This field is required"));
        return Err(err);
    }
    Ok(())
}

impl ContactMeForm {
    /// Stamps the submission time; the store does not set it.
    pub fn into_message(self, created_at: DateTime<Utc>) -> ContactMeMessage {
        ContactMeMessage {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}
