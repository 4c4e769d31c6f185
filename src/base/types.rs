use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Collection that contact messages are written to.
pub const CONTACT_COLLECTION: &str = "contactmessage";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Letters and digits from any script are allowed, in the local part and in domain labels.
    Regex::new(r"^[\p{L}\p{N}.!#$%&'*+/=?^_`{|}~-]+@[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?)+$")
        .expect("email regex is valid")
});

// Validation.

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where the failure happened, e.g. `["body", "email"]`.
    pub loc: Vec<String>,
    /// Human readable reason.
    pub msg: String,
    /// Machine readable reason.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(field: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    /// A failure of the request body as a whole.
    pub fn body(msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Checks that `value` holds between `min` and `max` characters (inclusive).
fn check_length(errors: &mut Vec<FieldError>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();

    if len < min {
        errors.push(FieldError::new(field, format!("String should have at least {min} characters"), "string_too_short"));
    } else if len > max {
        errors.push(FieldError::new(field, format!("String should have at most {max} characters"), "string_too_long"));
    }
}

/// Returns whether `email` is a syntactically valid address.
pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= 254 && EMAIL_REGEX.is_match(email)
}

// Requests and responses.

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validates the field constraints, collecting every failure.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        check_length(&mut errors, "name", &self.name, 2, 100);

        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "value is not a valid email address", "value_error"));
        }

        check_length(&mut errors, "message", &self.message, 10, 2000);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Converts the submission into the document handed to the store.
    pub fn into_document(self, submitted_at: DateTime<Utc>) -> ContactDocument {
        ContactDocument {
            name: self.name,
            email: self.email,
            message: self.message,
            submitted_at,
        }
    }
}

/// The stored form of a [`ContactMessage`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDocument {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Response to an accepted contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub status: String,
    pub id: String,
}

impl ContactReceipt {
    pub fn ok(id: String) -> Self {
        Self { status: "ok".to_string(), id }
    }
}

/// A question for the FAQ responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuery {
    pub question: String,
}

impl ChatQuery {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_length(&mut errors, "question", &self.question, 2, 2000);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// The responder's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// Payload of the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Report of the diagnostics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
