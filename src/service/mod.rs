//! Service integrations for external collaborators.
//!
//! This module contains the document store used by the contact form:
//! - A generic `GenericDbClient` trait describing the store
//! - A SurrealDB implementation (remote or in-memory)
//!
//! The trait keeps the HTTP layer independent of the concrete store, allowing
//! for extensibility and easy testing.

pub mod db;
