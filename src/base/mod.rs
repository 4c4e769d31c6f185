//! Core components, types, and utilities for the backend.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The knowledge base and its builtin content.
//! - Request and response types, validation, and result handling.

pub mod config;
pub mod content;
pub mod knowledge;
pub mod types;
