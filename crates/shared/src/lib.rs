//! Shared utilities and common types for the Game Night backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic
//! - Business-rule constants shared by the domain and API layers

pub mod validation;
