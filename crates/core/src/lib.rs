//! MN Roasters Core - Shared types library.
//!
//! This crate provides common types used across all MN Roasters components:
//! - `site` - Entities, repositories, forms and seed data for the review site
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. Database
//! encoding for the ID types is behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for entity IDs and passwords

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
