//! Core types for MN Roasters.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod password;

pub use id::*;
pub use password::Password;
