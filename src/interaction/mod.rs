//! Request handling for the backend.
//!
//! This module provides the operations behind each endpoint:
//! - Health and diagnostics reporting
//! - Contact form validation and storage
//! - FAQ answers from the responder
//!
//! Each operation validates its input and coordinates the services it needs;
//! the HTTP layer only translates to and from the wire.

pub mod chat;
pub mod contact;
pub mod diagnostics;
pub mod health;

use crate::base::types::{Err, FieldError};

/// Why an interaction did not produce a result.
#[derive(Debug)]
pub enum InteractionError {
    /// The input broke one or more field constraints.
    Invalid(Vec<FieldError>),
    /// A collaborator failed.
    Failed(Err),
}

impl From<Err> for InteractionError {
    fn from(err: Err) -> Self {
        Self::Failed(err)
    }
}

impl From<Vec<FieldError>> for InteractionError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Invalid(errors)
    }
}

impl std::fmt::Display for InteractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionError::Invalid(errors) => write!(f, "{} invalid field(s)", errors.len()),
            InteractionError::Failed(err) => write!(f, "{err}"),
        }
    }
}

pub type InteractionResult<T> = Result<T, InteractionError>;
